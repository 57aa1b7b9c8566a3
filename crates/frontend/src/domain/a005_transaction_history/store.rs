use super::api::TransactionHistoryApi;
use crate::shared::store::EntityStore;
use contracts::domain::a005_transaction_history::aggregate::{
    TransactionFilter, TransactionHistory,
};

/// История статусов транзакций (только чтение)
#[derive(Clone)]
pub struct TransactionHistoryStore {
    pub list: EntityStore<TransactionHistory>,
    api: TransactionHistoryApi,
}

impl TransactionHistoryStore {
    pub fn new(api: TransactionHistoryApi) -> Self {
        Self {
            list: EntityStore::new(),
            api,
        }
    }

    pub async fn fetch_transactions(&self, filter: &TransactionFilter) {
        self.list
            .load(self.api.fetch(filter), "Error al cargar las transacciones")
            .await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::http::mock::MockTransport;
    use crate::shared::http::ApiClient;
    use contracts::enums::TransactionStatus;
    use serde_json::json;
    use std::sync::Arc;

    pub(crate) fn history_json(
        id: i32,
        status: &str,
        amount: f64,
        bank: &str,
    ) -> serde_json::Value {
        json!({
            "codHistorialEstado": id,
            "estado": status,
            "fechaEstadoCambio": "2024-03-14T10:15:00",
            "detalle": "Cambio de estado",
            "transaccion": {
                "codigo": 100 + id,
                "monto": amount,
                "modalidad": "SIM",
                "codigoMoneda": "USD",
                "marca": "VISA",
                "banco": {"codigo": 1, "nombreComercial": bank, "razonSocial": format!("{} S.A.", bank)}
            }
        })
    }

    pub(crate) fn store_with(transport: &Arc<MockTransport>) -> TransactionHistoryStore {
        TransactionHistoryStore::new(TransactionHistoryApi::new(ApiClient::new(
            "http://api.test/v1/historial-estados",
            transport.clone(),
        )))
    }

    #[tokio::test]
    async fn test_unfiltered_fetch_has_no_query() {
        let transport = MockTransport::new();
        transport.push_json(json!([history_json(1, "APR", 10.0, "Pichincha")]));
        let store = store_with(&transport);

        store.fetch_transactions(&TransactionFilter::default()).await;

        assert_eq!(
            transport.last_request().unwrap().url,
            "http://api.test/v1/historial-estados"
        );
        assert_eq!(store.list.items_untracked().len(), 1);
    }

    #[tokio::test]
    async fn test_paged_response_is_accepted() {
        let transport = MockTransport::new();
        transport.push_json(json!({
            "content": [history_json(1, "APR", 10.0, "Pichincha"), history_json(2, "REC", 5.0, "Guayaquil")],
            "totalElements": 2
        }));
        let store = store_with(&transport);

        store.fetch_transactions(&TransactionFilter::default()).await;

        let ids: Vec<i32> = store.list.items_untracked().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_filter_goes_to_query() {
        let transport = MockTransport::new();
        transport.push_json(json!([]));
        let store = store_with(&transport);
        let filter = TransactionFilter {
            status: Some(TransactionStatus::Rejected),
            bank_name: Some("Pichincha".to_string()),
            ..Default::default()
        };

        store.fetch_transactions(&filter).await;

        let url = transport.last_request().unwrap().url;
        assert!(url.ends_with("?estado=REC&bancoNombre=Pichincha"));
    }

    #[tokio::test]
    async fn test_failure_keeps_rows() {
        let transport = MockTransport::new();
        transport.push_json(json!([history_json(1, "APR", 10.0, "Pichincha")]));
        transport.push_network_error();
        let store = store_with(&transport);

        store.fetch_transactions(&TransactionFilter::default()).await;
        store.fetch_transactions(&TransactionFilter::default()).await;

        let state = store.list.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Error al cargar las transacciones"));
    }
}
