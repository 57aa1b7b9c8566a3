use super::api::FraudRuleApi;
use crate::shared::store::EntityStore;
use contracts::domain::a003_fraud_rule::aggregate::{FraudRule, FraudRuleDto};

#[derive(Clone)]
pub struct FraudRuleStore {
    pub list: EntityStore<FraudRule>,
    api: FraudRuleApi,
}

impl FraudRuleStore {
    pub fn new(api: FraudRuleApi) -> Self {
        Self {
            list: EntityStore::new(),
            api,
        }
    }

    pub async fn fetch_rules(&self) {
        self.list
            .load(self.api.fetch_all(), "Error al cargar las reglas")
            .await
    }

    pub async fn create_rule(&self, dto: &FraudRuleDto) -> Result<FraudRule, String> {
        self.list
            .insert(self.api.create(dto), "Error al crear la regla")
            .await
    }

    pub async fn update_rule(&self, id: i32, dto: &FraudRuleDto) -> Result<FraudRule, String> {
        self.list
            .replace(id, self.api.update(id, dto), "Error al actualizar la regla")
            .await
    }

    pub async fn delete_rule(&self, id: i32) -> Result<(), String> {
        self.list
            .remove(id, self.api.delete(id), "Error al eliminar la regla")
            .await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::http::mock::MockTransport;
    use crate::shared::http::{ApiClient, Method};
    use contracts::domain::a003_fraud_rule::aggregate::RuleCriteria;
    use serde_json::json;
    use std::sync::Arc;

    pub(crate) fn rule_json(id: i32, name: &str) -> serde_json::Value {
        json!({
            "codRegla": id,
            "nombreRegla": name,
            "descripcion": "Regla de prueba para el monitoreo",
            "tipoRegla": "TRX",
            "limiteTransacciones": 20,
            "periodoTiempo": "DIA",
            "puntajeRiesgo": 60.0,
            "nivelRiesgo": "MED",
            "prioridad": 2,
            "estado": "ACT"
        })
    }

    pub(crate) fn store_with(transport: &Arc<MockTransport>) -> FraudRuleStore {
        FraudRuleStore::new(FraudRuleApi::new(ApiClient::new(
            "http://api.test/v1/fraudes/reglas",
            transport.clone(),
        )))
    }

    async fn seeded(transport: &Arc<MockTransport>) -> FraudRuleStore {
        transport.push_json(json!([rule_json(1, "Regla uno"), rule_json(2, "Regla dos")]));
        let store = store_with(transport);
        store.fetch_rules().await;
        store
    }

    #[tokio::test]
    async fn test_create_rule_sends_tagged_criteria() {
        let transport = MockTransport::new();
        let store = seeded(&transport).await;
        transport.push_json(rule_json(3, "Regla tres"));

        let dto = FraudRuleDto {
            name: "Regla tres".to_string(),
            description: "Monto diario demasiado alto".to_string(),
            criteria: RuleCriteria::Amount {
                max_total_amount: 2500.0,
            },
            ..Default::default()
        };
        store.create_rule(&dto).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://api.test/v1/fraudes/reglas");
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["tipoRegla"], "MNT");
        assert_eq!(body["limiteMontoTotal"], 2500.0);
        assert!(body.get("codRegla").is_none());

        let ids: Vec<i32> = store.list.items_untracked().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_rule_removes_from_list() {
        let transport = MockTransport::new();
        let store = seeded(&transport).await;
        transport.push(200, "");

        store.delete_rule(2).await.unwrap();

        assert!(store.list.find(2).is_none());
        assert!(store.list.find(1).is_some());
        assert!(transport.last_request().unwrap().url.ends_with("/reglas/2"));
    }

    #[tokio::test]
    async fn test_update_failure_returns_message() {
        let transport = MockTransport::new();
        let store = seeded(&transport).await;
        transport.push(500, "");

        let dto = FraudRuleDto::from(&store.list.find(1).unwrap());
        let result = store.update_rule(1, &dto).await;

        assert_eq!(result, Err("Error al actualizar la regla".to_string()));
        assert_eq!(store.list.find(1).unwrap().name, "Regla uno");
    }
}
