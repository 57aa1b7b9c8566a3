use super::api::ConnectionLogApi;
use crate::shared::store::EntityStore;
use contracts::domain::a006_connection_log::aggregate::{ConnectionLog, RegisterConnectionQuery};
use contracts::shared::DateRange;

/// Журнал подключений банков к процессору
#[derive(Clone)]
pub struct ConnectionLogStore {
    pub list: EntityStore<ConnectionLog>,
    api: ConnectionLogApi,
}

impl ConnectionLogStore {
    pub fn new(api: ConnectionLogApi) -> Self {
        Self {
            list: EntityStore::new(),
            api,
        }
    }

    pub async fn fetch_logs(&self, range: DateRange) {
        self.list
            .load(self.api.fetch(range), "Error al cargar los logs de conexión")
            .await
    }

    pub async fn register_connection(
        &self,
        query: &RegisterConnectionQuery,
    ) -> Result<ConnectionLog, String> {
        query.validate()?;
        self.list
            .insert(
                self.api.register(query),
                "Error al registrar la conexión",
            )
            .await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::http::mock::MockTransport;
    use crate::shared::http::{ApiClient, Method};
    use chrono::NaiveDate;
    use serde_json::json;
    use std::sync::Arc;

    pub(crate) fn log_json(id: i32, ip: &str, operation: &str, result: &str) -> serde_json::Value {
        json!({
            "codLog": id,
            "fecha": "2024-03-14T08:30:00",
            "ipOrigen": ip,
            "operacion": operation,
            "resultado": result
        })
    }

    pub(crate) fn store_with(transport: &Arc<MockTransport>) -> ConnectionLogStore {
        ConnectionLogStore::new(ConnectionLogApi::new(ApiClient::new(
            "http://api.test/api/v1/logs-conexion",
            transport.clone(),
        )))
    }

    fn query() -> RegisterConnectionQuery {
        RegisterConnectionQuery {
            brand: "VISA".to_string(),
            bank_id: 1,
            source_ip: "10.0.0.1".to_string(),
            operation: "AUTORIZACION".to_string(),
            result: "EXI".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_logs_by_range() {
        let transport = MockTransport::new();
        transport.push_json(json!([log_json(1, "10.0.0.1", "AUTORIZACION", "EXI")]));
        let store = store_with(&transport);
        let day = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();

        store.fetch_logs(DateRange::single_day(day)).await;

        assert_eq!(
            transport.last_request().unwrap().url,
            "http://api.test/api/v1/logs-conexion?fechaInicio=2024-03-14T00%3A00%3A00&fechaFin=2024-03-14T23%3A59%3A59"
        );
        assert_eq!(store.list.items_untracked().len(), 1);
    }

    #[tokio::test]
    async fn test_register_appends_canonical_record() {
        let transport = MockTransport::new();
        transport.push_json(json!([log_json(1, "10.0.0.1", "AUTORIZACION", "EXI")]));
        transport.push_json(log_json(9, "10.0.0.1", "AUTORIZACION", "EXI"));
        let store = store_with(&transport);
        store
            .fetch_logs(DateRange::single_day(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()))
            .await;

        let created = store.register_connection(&query()).await.unwrap();

        assert_eq!(created.id, 9);
        let ids: Vec<i32> = store.list.items_untracked().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 9]);
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert!(request.url.ends_with(
            "?marca=VISA&codBanco=1&ipOrigen=10.0.0.1&operacion=AUTORIZACION&resultado=EXI"
        ));
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_invalid_register_is_not_sent() {
        let transport = MockTransport::new();
        let store = store_with(&transport);
        let mut bad = query();
        bad.result = "EXITO".to_string();

        assert!(store.register_connection(&bad).await.is_err());
        assert_eq!(transport.request_count(), 0);
    }
}
