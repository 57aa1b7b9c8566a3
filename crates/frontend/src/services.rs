//! Хранилища сессии: создаются один раз из конфигурации и раздаются через контекст

use crate::domain::a001_bank::{api::BankApi, store::BankStore};
use crate::domain::a002_commission::{api::CommissionApi, store::CommissionStore};
use crate::domain::a003_fraud_rule::{api::FraudRuleApi, store::FraudRuleStore};
use crate::domain::a004_fraud_alert::{api::FraudAlertApi, store::FraudAlertStore};
use crate::domain::a005_transaction_history::{
    api::TransactionHistoryApi, store::TransactionHistoryStore,
};
use crate::domain::a006_connection_log::{api::ConnectionLogApi, store::ConnectionLogStore};
use crate::shared::config::Config;
use crate::shared::http::{ApiClient, ApiTransport};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppServices {
    pub banks: BankStore,
    pub commissions: CommissionStore,
    pub fraud_rules: FraudRuleStore,
    pub fraud_alerts: FraudAlertStore,
    pub transactions: TransactionHistoryStore,
    pub connection_logs: ConnectionLogStore,
}

impl AppServices {
    /// `origin` подставляется, когда в конфигурации нет `base_url`
    pub fn new(config: &Config, transport: Arc<dyn ApiTransport>, origin: &str) -> Self {
        let api = &config.api;
        let client = |endpoint: &str| {
            let base_url = api.resolve(endpoint, origin);
            log::debug!("API endpoint: {}", base_url);
            ApiClient::new(base_url, transport.clone())
        };

        Self {
            banks: BankStore::new(BankApi::new(client(&api.banks))),
            commissions: CommissionStore::new(CommissionApi::new(client(&api.commissions))),
            fraud_rules: FraudRuleStore::new(FraudRuleApi::new(client(&api.fraud_rules))),
            fraud_alerts: FraudAlertStore::new(FraudAlertApi::new(client(&api.fraud_monitoring))),
            transactions: TransactionHistoryStore::new(TransactionHistoryApi::new(client(
                &api.transactions,
            ))),
            connection_logs: ConnectionLogStore::new(ConnectionLogApi::new(client(
                &api.connection_logs,
            ))),
        }
    }

    /// Конец сессии: все списки и ошибки сбрасываются
    pub fn reset(&self) {
        self.banks.list.reset();
        self.commissions.list.reset();
        self.fraud_rules.list.reset();
        self.fraud_alerts.list.reset();
        self.transactions.list.reset();
        self.connection_logs.list.reset();
    }

    pub fn provide(self) {
        provide_context(self);
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices context not found")
}
