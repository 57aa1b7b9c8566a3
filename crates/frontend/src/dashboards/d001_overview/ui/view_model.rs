use crate::dashboards::d001_overview::summary::{summarize, DashboardSummary};
use crate::domain::a001_bank::store::BankStore;
use crate::domain::a004_fraud_alert::store::FraudAlertStore;
use crate::domain::a005_transaction_history::store::TransactionHistoryStore;
use crate::domain::a005_transaction_history::ui::list::view_model::DEFAULT_WINDOW_DAYS;
use crate::shared::date_utils::Clock;
use contracts::domain::a005_transaction_history::aggregate::TransactionFilter;
use contracts::shared::DateRange;

/// Обзор: банки, ожидающие алерты и транзакции за последние 7 дней
#[derive(Clone)]
pub struct OverviewViewModel {
    pub banks: BankStore,
    pub alerts: FraudAlertStore,
    pub transactions: TransactionHistoryStore,
    today: Clock,
}

impl OverviewViewModel {
    pub fn new(
        banks: BankStore,
        alerts: FraudAlertStore,
        transactions: TransactionHistoryStore,
        today: Clock,
    ) -> Self {
        Self {
            banks,
            alerts,
            transactions,
            today,
        }
    }

    fn transaction_filter(&self) -> TransactionFilter {
        let (start, end) = DateRange::last_days((self.today)(), DEFAULT_WINDOW_DAYS).bounds();
        TransactionFilter {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    pub async fn load_banks(&self) {
        self.banks.fetch_banks().await;
    }

    pub async fn load_alerts(&self) {
        self.alerts.fetch_pending().await;
    }

    pub async fn load_transactions(&self) {
        self.transactions
            .fetch_transactions(&self.transaction_filter())
            .await;
    }

    /// Отслеживает все три списка
    pub fn summary(&self) -> DashboardSummary {
        summarize(
            &self.banks.list.items(),
            &self.alerts.list.items(),
            &self.transactions.list.items(),
        )
    }

    pub fn is_loading(&self) -> bool {
        self.banks.list.is_loading()
            || self.alerts.list.is_loading()
            || self.transactions.list.is_loading()
    }

    /// Ошибки всех трёх хранилищ
    pub fn errors(&self) -> Vec<String> {
        [
            self.banks.list.error(),
            self.alerts.list.error(),
            self.transactions.list.error(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Три независимые задачи: медленный список не держит остальные
    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load_banks().await });
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load_alerts().await });
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load_transactions().await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_bank::store::tests as bank_tests;
    use crate::domain::a004_fraud_alert::store::tests as alert_tests;
    use crate::domain::a005_transaction_history::store::tests as history_tests;
    use crate::shared::http::mock::MockTransport;
    use chrono::NaiveDate;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[tokio::test]
    async fn test_concurrent_loads_feed_summary() {
        let bank_transport = MockTransport::new();
        let alert_transport = MockTransport::new();
        let history_transport = MockTransport::new();
        bank_transport.push_json(json!([
            bank_tests::bank_json(1, "Pichincha"),
            bank_tests::bank_json(2, "Guayaquil")
        ]));
        alert_transport.push_json(json!([alert_tests::alert_json(1, "ALT", 10)]));
        history_transport.push_json(json!([
            history_tests::history_json(1, "APR", 100.0, "Pichincha"),
            history_tests::history_json(2, "REC", 40.0, "Guayaquil")
        ]));
        let vm = OverviewViewModel::new(
            bank_tests::store_with(&bank_transport),
            alert_tests::store_with(&alert_transport),
            history_tests::store_with(&history_transport),
            today,
        );

        tokio::join!(vm.load_banks(), vm.load_alerts(), vm.load_transactions());

        let summary = vm.summary();
        assert_eq!(summary.active_banks, 2);
        assert_eq!(summary.pending_alerts, 1);
        assert_eq!(summary.high_risk_alerts, 1);
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.total_amount, 140.0);
        assert!(!vm.is_loading());
        assert!(vm.errors().is_empty());
        assert!(history_transport
            .last_request()
            .unwrap()
            .url
            .contains("fechaInicio=2024-03-08T00%3A00%3A00"));
    }

    #[tokio::test]
    async fn test_one_failure_does_not_hide_the_rest() {
        let bank_transport = MockTransport::new();
        let alert_transport = MockTransport::new();
        let history_transport = MockTransport::new();
        bank_transport.push_json(json!([bank_tests::bank_json(1, "Pichincha")]));
        alert_transport.push_network_error();
        history_transport.push_json(json!([]));
        let vm = OverviewViewModel::new(
            bank_tests::store_with(&bank_transport),
            alert_tests::store_with(&alert_transport),
            history_tests::store_with(&history_transport),
            today,
        );

        tokio::join!(vm.load_banks(), vm.load_alerts(), vm.load_transactions());

        assert_eq!(vm.summary().active_banks, 1);
        assert_eq!(
            vm.errors(),
            vec!["Error al cargar las alertas pendientes".to_string()]
        );
    }
}
