use crate::domain::a006_connection_log::store::ConnectionLogStore;
use crate::shared::list_utils::{contains_ci, filter_list, Searchable};
use crate::shared::date_utils::Clock;
use contracts::domain::a006_connection_log::aggregate::ConnectionLog;
use contracts::shared::DateRange;
use leptos::prelude::*;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;

impl Searchable for ConnectionLog {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.source_ip, filter)
            || contains_ci(&self.operation, filter)
            || contains_ci(&self.result, filter)
    }
}

/// ViewModel журнала подключений.
///
/// С сервера берутся последние 7 дней, дальше поиск и фильтр по результату
/// работают по уже загруженному списку.
#[derive(Clone)]
pub struct ConnectionLogListViewModel {
    pub store: ConnectionLogStore,
    pub search: RwSignal<String>,
    pub result_filter: RwSignal<Option<String>>,
    today: Clock,
}

impl ConnectionLogListViewModel {
    pub fn new(store: ConnectionLogStore, today: Clock) -> Self {
        Self {
            store,
            search: RwSignal::new(String::new()),
            result_filter: RwSignal::new(None),
            today,
        }
    }

    pub async fn load(&self) {
        self.store
            .fetch_logs(DateRange::last_days((self.today)(), DEFAULT_WINDOW_DAYS))
            .await;
    }

    /// Строки для таблицы (отслеживает сигналы)
    pub fn visible(&self) -> Vec<ConnectionLog> {
        let search = self.search.get();
        let result = self.result_filter.get();
        filter_list(self.store.list.items(), &search)
            .into_iter()
            .filter(|log| result.as_deref().map_or(true, |r| log.result == r))
            .collect()
    }

    /// Коды результата, встречающиеся в загруженном списке
    pub fn result_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .store
            .list
            .items()
            .into_iter()
            .map(|log| log.result)
            .collect();
        codes.sort();
        codes.dedup();
        codes
    }

    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load().await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_connection_log::store::tests::{log_json, store_with};
    use crate::shared::http::mock::MockTransport;
    use chrono::NaiveDate;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    async fn loaded(transport: &std::sync::Arc<MockTransport>) -> ConnectionLogListViewModel {
        transport.push_json(json!([
            log_json(1, "10.0.0.1", "AUTORIZACION", "EXI"),
            log_json(2, "10.0.0.2", "REVERSO", "ERR"),
            log_json(3, "192.168.1.5", "AUTORIZACION", "ERR"),
        ]));
        let vm = ConnectionLogListViewModel::new(
            store_with(transport),
            today,
        );
        vm.load().await;
        vm
    }

    fn ids(logs: Vec<ConnectionLog>) -> Vec<i32> {
        logs.into_iter().map(|l| l.id).collect()
    }

    #[tokio::test]
    async fn test_mount_loads_last_seven_days() {
        let transport = MockTransport::new();
        let vm = loaded(&transport).await;

        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("?fechaInicio=2024-03-08T00%3A00%3A00&fechaFin=2024-03-15T23%3A59%3A59"));
        assert_eq!(ids(vm.visible()), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_search_and_result_filter_are_local() {
        let transport = MockTransport::new();
        let vm = loaded(&transport).await;

        vm.search.set("autorizacion".to_string());
        assert_eq!(ids(vm.visible()), vec![1, 3]);

        vm.result_filter.set(Some("ERR".to_string()));
        assert_eq!(ids(vm.visible()), vec![3]);

        vm.search.set(String::new());
        assert_eq!(ids(vm.visible()), vec![2, 3]);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_result_codes_are_distinct() {
        let transport = MockTransport::new();
        let vm = loaded(&transport).await;

        assert_eq!(vm.result_codes(), vec!["ERR".to_string(), "EXI".to_string()]);
    }
}
