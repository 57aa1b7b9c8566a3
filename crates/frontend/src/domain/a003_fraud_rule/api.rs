use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::a003_fraud_rule::aggregate::{FraudRule, FraudRuleDto};

/// `/v1/fraudes/reglas`
#[derive(Clone)]
pub struct FraudRuleApi {
    client: ApiClient,
}

impl FraudRuleApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<FraudRule>, ApiError> {
        self.client.get_list(self.client.url("")).await
    }

    pub async fn create(&self, dto: &FraudRuleDto) -> Result<FraudRule, ApiError> {
        self.client.post_json(self.client.url(""), dto).await
    }

    pub async fn update(&self, id: i32, dto: &FraudRuleDto) -> Result<FraudRule, ApiError> {
        self.client
            .put_json(self.client.url(&format!("/{}", id)), dto)
            .await
    }

    /// Сервер помечает правило неактивным
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .delete(self.client.url(&format!("/{}", id)))
            .await
    }
}
