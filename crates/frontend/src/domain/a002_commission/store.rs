use super::api::CommissionApi;
use crate::shared::store::EntityStore;
use contracts::domain::a002_commission::aggregate::{
    Commission, CommissionDto, CommissionQuery, CommissionSegment, SegmentDto,
};
use contracts::enums::CommissionType;

#[derive(Clone)]
pub struct CommissionStore {
    pub list: EntityStore<Commission>,
    api: CommissionApi,
}

impl CommissionStore {
    pub fn new(api: CommissionApi) -> Self {
        Self {
            list: EntityStore::new(),
            api,
        }
    }

    pub async fn fetch_commissions(&self) {
        self.list
            .load(
                self.api.fetch(&CommissionQuery::default()),
                "Error al cargar las comisiones",
            )
            .await
    }

    pub async fn fetch_by_type(&self, kind: CommissionType) {
        let query = CommissionQuery {
            kind: Some(kind),
            ..Default::default()
        };
        self.list
            .load(self.api.fetch(&query), "Error al cargar las comisiones")
            .await
    }

    pub async fn fetch_by_amount(&self, min_amount: f64, max_amount: f64) {
        let query = CommissionQuery {
            min_amount: Some(min_amount),
            max_amount: Some(max_amount),
            ..Default::default()
        };
        self.list
            .load(self.api.fetch(&query), "Error al buscar comisiones")
            .await
    }

    pub async fn create_commission(&self, dto: &CommissionDto) -> Result<Commission, String> {
        self.list
            .insert(self.api.create(dto), "Error al crear la comisión")
            .await
    }

    pub async fn update_commission(
        &self,
        id: i32,
        dto: &CommissionDto,
    ) -> Result<Commission, String> {
        self.list
            .replace(id, self.api.update(id, dto), "Error al actualizar la comisión")
            .await
    }

    /// Сегмент дописывается в `segmentos` своей комиссии, остальные поля не меняются
    pub async fn add_segment(
        &self,
        commission_id: i32,
        dto: &SegmentDto,
    ) -> Result<CommissionSegment, String> {
        self.list
            .modify(
                commission_id,
                self.api.add_segment(commission_id, dto),
                "Error al agregar el segmento",
                |commission, segment: &CommissionSegment| commission.segments.push(segment.clone()),
            )
            .await
    }
}
