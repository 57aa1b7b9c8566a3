use crate::domain::a003_fraud_rule::store::FraudRuleStore;
use crate::shared::dialog::{DialogMode, FormDialog};
use contracts::domain::a003_fraud_rule::aggregate::{FraudRule, FraudRuleDto};
use contracts::enums::RuleType;
use leptos::prelude::*;

#[derive(Clone)]
pub struct FraudRuleListViewModel {
    pub store: FraudRuleStore,
    pub dialog: FormDialog<i32, FraudRuleDto>,
}

impl FraudRuleListViewModel {
    pub fn new(store: FraudRuleStore) -> Self {
        Self {
            store,
            dialog: FormDialog::new(),
        }
    }

    pub async fn load(&self) {
        self.store.fetch_rules().await;
    }

    pub fn open_create(&self) {
        self.dialog.open(DialogMode::Create, FraudRuleDto::default());
    }

    pub fn open_edit(&self, rule: &FraudRule) {
        self.dialog
            .open(DialogMode::Edit(rule.id), FraudRuleDto::from(rule));
    }

    /// Limits of the previous rule type are dropped
    pub fn set_rule_type(&self, rule_type: RuleType) {
        self.dialog.form.update(|f| f.set_rule_type(rule_type));
    }

    pub async fn submit(&self) {
        let store = self.store.clone();
        self.dialog
            .submit(FraudRuleDto::validate, |mode, dto| async move {
                match mode {
                    DialogMode::Edit(id) => store.update_rule(id, &dto).await.map(|_| ()),
                    DialogMode::Create | DialogMode::Append(_) => {
                        store.create_rule(&dto).await.map(|_| ())
                    }
                }
            })
            .await;
    }

    pub async fn delete(&self, id: i32) {
        if let Err(e) = self.store.delete_rule(id).await {
            log::warn!("fraud rule {} was not deleted: {}", id, e);
        }
    }

    // Commands for the view

    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load().await });
    }

    pub fn submit_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.submit().await });
    }

    pub fn delete_command(&self, id: i32) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.delete(id).await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_fraud_rule::store::tests::{rule_json, store_with};
    use crate::shared::dialog::DialogState;
    use crate::shared::http::mock::MockTransport;
    use contracts::domain::a003_fraud_rule::aggregate::RuleCriteria;
    use serde_json::json;

    #[tokio::test]
    async fn test_changing_type_resets_criteria() {
        let transport = MockTransport::new();
        let vm = FraudRuleListViewModel::new(store_with(&transport));
        vm.open_create();

        vm.set_rule_type(RuleType::Schedule);

        assert_eq!(
            vm.dialog.form.get_untracked().criteria,
            RuleCriteria::Schedule {
                starts_at: None,
                ends_at: None
            }
        );
    }

    #[tokio::test]
    async fn test_edit_round_trip() {
        let transport = MockTransport::new();
        transport.push_json(json!([rule_json(1, "Regla uno")]));
        let vm = FraudRuleListViewModel::new(store_with(&transport));
        vm.load().await;

        let rule = vm.store.list.find(1).unwrap();
        vm.open_edit(&rule);
        vm.dialog.form.update(|f| f.priority = 7);
        let mut updated = rule_json(1, "Regla uno");
        updated["prioridad"] = json!(7);
        transport.push_json(updated);

        vm.submit().await;

        assert_eq!(vm.dialog.state.get_untracked(), DialogState::Closed);
        assert_eq!(vm.store.list.find(1).unwrap().priority, 7);
        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["prioridad"], 7);
        assert_eq!(body["tipoRegla"], "TRX");
    }

    #[tokio::test]
    async fn test_short_name_is_rejected_before_sending() {
        let transport = MockTransport::new();
        let vm = FraudRuleListViewModel::new(store_with(&transport));
        vm.open_create();
        vm.dialog.form.update(|f| {
            f.name = "abc".to_string();
            f.description = "Descripción suficiente".to_string();
        });

        vm.submit().await;

        assert_eq!(transport.request_count(), 0);
        assert_eq!(
            vm.dialog.error.get_untracked().as_deref(),
            Some("El nombre debe tener entre 5 y 50 caracteres")
        );
    }
}
