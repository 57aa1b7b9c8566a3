use super::api::BankApi;
use crate::shared::store::EntityStore;
use contracts::domain::a001_bank::aggregate::{Bank, BankDto};

/// Активные банки
#[derive(Clone)]
pub struct BankStore {
    pub list: EntityStore<Bank>,
    api: BankApi,
}

impl BankStore {
    pub fn new(api: BankApi) -> Self {
        Self {
            list: EntityStore::new(),
            api,
        }
    }

    pub async fn fetch_banks(&self) {
        self.list
            .load(self.api.fetch_active(), "Error al cargar los bancos")
            .await
    }

    pub async fn search_banks(&self, trade_name: &str) {
        self.list
            .load(self.api.search_by_name(trade_name), "Error al buscar bancos")
            .await
    }

    pub async fn create_bank(&self, dto: &BankDto) -> Result<Bank, String> {
        self.list
            .insert(self.api.create(dto), "Error al crear el banco")
            .await
    }

    pub async fn update_bank(&self, id: i32, dto: &BankDto) -> Result<Bank, String> {
        self.list
            .replace(id, self.api.update(id, dto), "Error al actualizar el banco")
            .await
    }

    /// Банк становится неактивным и пропадает из списка активных
    pub async fn deactivate_bank(&self, id: i32) -> Result<(), String> {
        self.list
            .remove(id, self.api.deactivate(id), "Error al desactivar el banco")
            .await
    }
}
