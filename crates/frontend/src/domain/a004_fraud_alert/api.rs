use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::a004_fraud_alert::aggregate::{FraudAlert, ProcessAlertQuery};
use contracts::shared::{DateRange, DateRangeQuery};

/// `/api/v1/monitoreo-fraude`
#[derive(Clone)]
pub struct FraudAlertApi {
    client: ApiClient,
}

impl FraudAlertApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn fetch_pending(&self) -> Result<Vec<FraudAlert>, ApiError> {
        self.client
            .get_list(self.client.url("/alertas/pendientes"))
            .await
    }

    pub async fn fetch_by_date(&self, range: DateRange) -> Result<Vec<FraudAlert>, ApiError> {
        let url = self
            .client
            .url_with_query("/alertas/por-fecha", &DateRangeQuery::from(range))?;
        self.client.get_list(url).await
    }

    pub async fn fetch_by_transaction(
        &self,
        transaction_id: i32,
    ) -> Result<Vec<FraudAlert>, ApiError> {
        self.client
            .get_list(
                self.client
                    .url(&format!("/alertas/por-transaccion/{}", transaction_id)),
            )
            .await
    }

    /// Статус и детализация уходят query-параметрами, тело пустое
    pub async fn process(&self, id: i32, query: &ProcessAlertQuery) -> Result<(), ApiError> {
        let url = self
            .client
            .url_with_query(&format!("/alertas/{}/procesar", id), query)?;
        self.client.put_empty(url).await
    }
}
