use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::a006_connection_log::aggregate::{ConnectionLog, RegisterConnectionQuery};
use contracts::shared::{DateRange, DateRangeQuery};

/// `/api/v1/logs-conexion`
#[derive(Clone)]
pub struct ConnectionLogApi {
    client: ApiClient,
}

impl ConnectionLogApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, range: DateRange) -> Result<Vec<ConnectionLog>, ApiError> {
        let url = self
            .client
            .url_with_query("", &DateRangeQuery::from(range))?;
        self.client.get_list(url).await
    }

    /// Поля записи передаются query-параметрами
    pub async fn register(
        &self,
        query: &RegisterConnectionQuery,
    ) -> Result<ConnectionLog, ApiError> {
        let url = self.client.url_with_query("", query)?;
        self.client.post_query(url).await
    }
}
