use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::a005_transaction_history::aggregate::{
    TransactionFilter, TransactionHistory,
};

/// `/v1/historial-estados`
#[derive(Clone)]
pub struct TransactionHistoryApi {
    client: ApiClient,
}

impl TransactionHistoryApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Ответ может быть как массивом, так и страницей с `content`
    pub async fn fetch(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionHistory>, ApiError> {
        let url = self.client.url_with_query("", filter)?;
        self.client.get_list(url).await
    }
}
