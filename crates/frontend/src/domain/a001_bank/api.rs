use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::a001_bank::aggregate::{Bank, BankDto, BankNameQuery};

/// `/api/v1/bancos`
#[derive(Clone)]
pub struct BankApi {
    client: ApiClient,
}

impl BankApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn fetch_active(&self) -> Result<Vec<Bank>, ApiError> {
        self.client
            .get_list(self.client.url("/bancos-activos"))
            .await
    }

    pub async fn search_by_name(&self, trade_name: &str) -> Result<Vec<Bank>, ApiError> {
        let query = BankNameQuery {
            trade_name: trade_name.to_string(),
        };
        let url = self.client.url_with_query("/buscar-nombre", &query)?;
        self.client.get_list(url).await
    }

    pub async fn create(&self, dto: &BankDto) -> Result<Bank, ApiError> {
        self.client
            .post_json(self.client.url("/agregar-banco"), dto)
            .await
    }

    pub async fn update(&self, id: i32, dto: &BankDto) -> Result<Bank, ApiError> {
        self.client
            .put_json(self.client.url(&format!("/actualizar-banco/{}", id)), dto)
            .await
    }

    pub async fn deactivate(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .delete(self.client.url(&format!("/inactivar-banco/{}", id)))
            .await
    }
}
