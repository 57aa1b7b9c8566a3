use crate::domain::a004_fraud_alert::store::FraudAlertStore;
use crate::shared::date_utils::Clock;
use chrono::NaiveDate;
use contracts::domain::a004_fraud_alert::aggregate::DEFAULT_PROCESS_DETAIL;
use contracts::enums::AlertStatus;
use contracts::shared::DateRange;
use leptos::prelude::*;

/// Окно по умолчанию, дней
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// ViewModel страницы мониторинга.
///
/// Период задаётся двумя датами; пока заданы обе, список грузится по периоду,
/// иначе показываются ожидающие алерты. Пока пользователь не менял даты,
/// период сдвигается вместе с текущим днём при каждой загрузке. Поиск по
/// номеру транзакции временно заменяет период.
#[derive(Clone)]
pub struct FraudAlertListViewModel {
    pub store: FraudAlertStore,
    pub start: RwSignal<Option<NaiveDate>>,
    pub end: RwSignal<Option<NaiveDate>>,
    pub search: RwSignal<String>,
    /// Ошибка последней обработки алерта
    pub process_error: RwSignal<Option<String>>,
    /// Даты ещё не трогали: окно последних 7 дней
    rolling: RwSignal<bool>,
    today: Clock,
}

impl FraudAlertListViewModel {
    pub fn new(store: FraudAlertStore, today: Clock) -> Self {
        let window = DateRange::last_days(today(), DEFAULT_WINDOW_DAYS);
        Self {
            store,
            start: RwSignal::new(Some(window.start)),
            end: RwSignal::new(Some(window.end)),
            search: RwSignal::new(String::new()),
            process_error: RwSignal::new(None),
            rolling: RwSignal::new(true),
            today,
        }
    }

    pub fn range(&self) -> Option<DateRange> {
        match (self.start.get_untracked(), self.end.get_untracked()) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    /// Период, если задан, иначе ожидающие
    pub async fn load(&self) {
        if self.rolling.get_untracked() {
            let window = DateRange::last_days((self.today)(), DEFAULT_WINDOW_DAYS);
            self.start.set(Some(window.start));
            self.end.set(Some(window.end));
        }
        match self.range() {
            Some(range) => self.store.fetch_by_date(range).await,
            None => self.store.fetch_pending().await,
        }
    }

    pub async fn set_start(&self, day: Option<NaiveDate>) {
        self.rolling.set(false);
        self.start.set(day);
        self.search.set(String::new());
        self.load().await;
    }

    pub async fn set_end(&self, day: Option<NaiveDate>) {
        self.rolling.set(false);
        self.end.set(day);
        self.search.set(String::new());
        self.load().await;
    }

    pub async fn clear_range(&self) {
        self.rolling.set(false);
        self.start.set(None);
        self.end.set(None);
        self.search.set(String::new());
        self.store.fetch_pending().await;
    }

    /// Числовой текст ищет по транзакции; нечисловой запрос не отправляет
    pub async fn set_search(&self, text: String) {
        self.search.set(text.clone());
        let term = text.trim();
        if term.is_empty() {
            self.load().await;
        } else if let Ok(transaction_id) = term.parse::<i32>() {
            self.store.fetch_by_transaction(transaction_id).await;
        }
    }

    pub async fn process(&self, id: i32) {
        self.process_error.set(None);
        if let Err(e) = self
            .store
            .process_alert(id, AlertStatus::Processed, DEFAULT_PROCESS_DETAIL)
            .await
        {
            log::warn!("alert {} was not processed: {}", id, e);
            self.process_error.set(Some(e));
        }
    }

    // Commands for the view

    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load().await });
    }

    pub fn set_start_command(&self, day: Option<NaiveDate>) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.set_start(day).await });
    }

    pub fn set_end_command(&self, day: Option<NaiveDate>) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.set_end(day).await });
    }

    pub fn clear_range_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.clear_range().await });
    }

    pub fn search_command(&self, text: String) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.set_search(text).await });
    }

    pub fn process_command(&self, id: i32) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.process(id).await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_fraud_alert::store::tests::{alert_json, store_with};
    use crate::shared::http::mock::MockTransport;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    thread_local! {
        static CLOCK: std::cell::Cell<NaiveDate> = std::cell::Cell::new(today());
    }

    fn moving_today() -> NaiveDate {
        CLOCK.with(|d| d.get())
    }

    #[tokio::test]
    async fn test_default_window_follows_the_day() {
        let transport = MockTransport::new();
        transport.push_json(json!([]));
        transport.push_json(json!([]));
        let vm = FraudAlertListViewModel::new(store_with(&transport), moving_today);
        vm.load().await;

        CLOCK.with(|d| d.set(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()));
        vm.load().await;

        let url = transport.last_request().unwrap().url;
        assert!(url.contains("fechaInicio=2024-03-09T00%3A00%3A00"));
        assert!(url.contains("fechaFin=2024-03-16T23%3A59%3A59"));
        assert_eq!(vm.end.get_untracked(), NaiveDate::from_ymd_opt(2024, 3, 16));
    }

    #[tokio::test]
    async fn test_chosen_dates_do_not_move() {
        let transport = MockTransport::new();
        transport.push_json(json!([]));
        transport.push_json(json!([]));
        let vm = FraudAlertListViewModel::new(store_with(&transport), moving_today);
        vm.set_start(NaiveDate::from_ymd_opt(2024, 3, 1)).await;

        CLOCK.with(|d| d.set(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()));
        vm.load().await;

        let url = transport.last_request().unwrap().url;
        assert!(url.contains("fechaInicio=2024-03-01T00%3A00%3A00"));
        assert!(url.contains("fechaFin=2024-03-15T23%3A59%3A59"));
    }

    #[tokio::test]
    async fn test_mount_loads_last_seven_days() {
        let transport = MockTransport::new();
        transport.push_json(json!([alert_json(1, "ALT", 10)]));
        let vm = FraudAlertListViewModel::new(store_with(&transport), today);

        vm.load().await;

        let url = transport.last_request().unwrap().url;
        assert!(url.contains("/alertas/por-fecha?"));
        assert!(url.contains("fechaInicio=2024-03-08T00%3A00%3A00"));
        assert!(url.contains("fechaFin=2024-03-15T23%3A59%3A59"));
        assert_eq!(vm.store.list.items_untracked().len(), 1);
    }

    #[tokio::test]
    async fn test_cleared_range_loads_pending() {
        let transport = MockTransport::new();
        transport.push_json(json!([]));
        let vm = FraudAlertListViewModel::new(store_with(&transport), today);

        vm.clear_range().await;

        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("/alertas/pendientes"));
        assert_eq!(vm.range(), None);
    }

    #[tokio::test]
    async fn test_numeric_search_fetches_by_transaction() {
        let transport = MockTransport::new();
        transport.push_json(json!([alert_json(4, "MED", 77)]));
        let vm = FraudAlertListViewModel::new(store_with(&transport), today);

        vm.set_search(" 77 ".to_string()).await;

        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("/alertas/por-transaccion/77"));
    }

    #[tokio::test]
    async fn test_non_numeric_search_sends_nothing() {
        let transport = MockTransport::new();
        let vm = FraudAlertListViewModel::new(store_with(&transport), today);

        vm.set_search("abc".to_string()).await;

        assert_eq!(transport.request_count(), 0);
        assert_eq!(vm.search.get_untracked(), "abc");
    }

    #[tokio::test]
    async fn test_empty_search_returns_to_range() {
        let transport = MockTransport::new();
        transport.push_json(json!([]));
        let vm = FraudAlertListViewModel::new(store_with(&transport), today);

        vm.set_search("   ".to_string()).await;

        assert!(transport
            .last_request()
            .unwrap()
            .url
            .contains("/alertas/por-fecha?"));
    }

    #[tokio::test]
    async fn test_process_sends_fixed_detail() {
        let transport = MockTransport::new();
        transport.push_json(json!([alert_json(5, "ALT", 10)]));
        transport.push_ok("");
        let vm = FraudAlertListViewModel::new(store_with(&transport), today);
        vm.load().await;

        vm.process(5).await;

        let url = transport.last_request().unwrap().url;
        assert!(url.contains("/alertas/5/procesar?estado=PRO&detalle=Alerta+procesada+por+el+usuario"));
        assert!(vm.store.list.items_untracked().is_empty());
        assert_eq!(vm.process_error.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_process_failure_is_reported() {
        let transport = MockTransport::new();
        transport.push_network_error();
        let vm = FraudAlertListViewModel::new(store_with(&transport), today);

        vm.process(5).await;

        assert_eq!(
            vm.process_error.get_untracked().as_deref(),
            Some("Error al procesar la alerta")
        );
    }
}
