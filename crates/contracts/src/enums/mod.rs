pub mod alert_status;
pub mod commission_type;
pub mod record_status;
pub mod risk_level;
pub mod rule_type;
pub mod time_period;
pub mod transaction_status;

pub use alert_status::AlertStatus;
pub use commission_type::CommissionType;
pub use record_status::RecordStatus;
pub use risk_level::RiskLevel;
pub use rule_type::RuleType;
pub use time_period::TimePeriod;
pub use transaction_status::TransactionStatus;
