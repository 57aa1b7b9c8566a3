pub mod a001_bank;
pub mod a002_commission;
pub mod a003_fraud_rule;
pub mod a004_fraud_alert;
pub mod a005_transaction_history;
pub mod a006_connection_log;
pub mod common;
