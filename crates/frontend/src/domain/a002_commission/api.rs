use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::a002_commission::aggregate::{
    Commission, CommissionDto, CommissionQuery, CommissionSegment, SegmentDto,
};

/// `/v1/comisiones`
#[derive(Clone)]
pub struct CommissionApi {
    client: ApiClient,
}

impl CommissionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, query: &CommissionQuery) -> Result<Vec<Commission>, ApiError> {
        let url = self.client.url_with_query("", query)?;
        self.client.get_list(url).await
    }

    pub async fn create(&self, dto: &CommissionDto) -> Result<Commission, ApiError> {
        self.client.post_json(self.client.url(""), dto).await
    }

    pub async fn update(&self, id: i32, dto: &CommissionDto) -> Result<Commission, ApiError> {
        self.client
            .put_json(self.client.url(&format!("/{}", id)), dto)
            .await
    }

    pub async fn add_segment(
        &self,
        commission_id: i32,
        dto: &SegmentDto,
    ) -> Result<CommissionSegment, ApiError> {
        self.client
            .post_json(
                self.client.url(&format!("/{}/segmentos", commission_id)),
                dto,
            )
            .await
    }
}
