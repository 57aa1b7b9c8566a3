use super::api::FraudAlertApi;
use crate::shared::store::EntityStore;
use contracts::domain::a004_fraud_alert::aggregate::{FraudAlert, ProcessAlertQuery};
use contracts::enums::AlertStatus;
use contracts::shared::DateRange;

/// Алерты фрод-мониторинга.
///
/// Обработанный алерт уходит из списка: страница показывает только
/// то, что ещё требует внимания оператора.
#[derive(Clone)]
pub struct FraudAlertStore {
    pub list: EntityStore<FraudAlert>,
    api: FraudAlertApi,
}

impl FraudAlertStore {
    pub fn new(api: FraudAlertApi) -> Self {
        Self {
            list: EntityStore::new(),
            api,
        }
    }

    pub async fn fetch_pending(&self) {
        self.list
            .load(
                self.api.fetch_pending(),
                "Error al cargar las alertas pendientes",
            )
            .await
    }

    pub async fn fetch_by_date(&self, range: DateRange) {
        self.list
            .load(
                self.api.fetch_by_date(range),
                "Error al buscar alertas por fecha",
            )
            .await
    }

    pub async fn fetch_by_transaction(&self, transaction_id: i32) {
        self.list
            .load(
                self.api.fetch_by_transaction(transaction_id),
                "Error al buscar alertas por transacción",
            )
            .await
    }

    pub async fn process_alert(
        &self,
        id: i32,
        status: AlertStatus,
        detail: &str,
    ) -> Result<(), String> {
        let query = ProcessAlertQuery::new(status, detail);
        query.validate()?;
        self.list
            .remove(
                id,
                self.api.process(id, &query),
                "Error al procesar la alerta",
            )
            .await
    }
}
