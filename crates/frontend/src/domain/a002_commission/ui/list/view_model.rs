use crate::domain::a002_commission::store::CommissionStore;
use crate::shared::dialog::{DialogMode, FormDialog};
use contracts::domain::a002_commission::aggregate::{Commission, CommissionDto, SegmentDto};
use contracts::enums::CommissionType;
use leptos::prelude::*;

/// ViewModel страницы комиссий.
///
/// Список грузится по типу (по умолчанию POR); фильтр по диапазону суммы,
/// пока он применён, заменяет фильтр по типу.
#[derive(Clone)]
pub struct CommissionListViewModel {
    pub store: CommissionStore,
    pub kind: RwSignal<CommissionType>,
    pub min_amount: RwSignal<String>,
    pub max_amount: RwSignal<String>,
    pub amount_filter_active: RwSignal<bool>,
    pub filter_error: RwSignal<Option<String>>,
    pub dialog: FormDialog<i32, CommissionDto>,
    pub segment_dialog: FormDialog<i32, SegmentDto>,
}

impl CommissionListViewModel {
    pub fn new(store: CommissionStore) -> Self {
        Self {
            store,
            kind: RwSignal::new(CommissionType::Percentage),
            min_amount: RwSignal::new(String::new()),
            max_amount: RwSignal::new(String::new()),
            amount_filter_active: RwSignal::new(false),
            filter_error: RwSignal::new(None),
            dialog: FormDialog::new(),
            segment_dialog: FormDialog::new(),
        }
    }

    pub async fn load(&self) {
        self.store.fetch_by_type(self.kind.get_untracked()).await;
    }

    pub async fn set_kind(&self, kind: CommissionType) {
        self.kind.set(kind);
        self.amount_filter_active.set(false);
        self.filter_error.set(None);
        self.load().await;
    }

    pub async fn apply_amount_filter(&self) {
        let range = parse_range(
            &self.min_amount.get_untracked(),
            &self.max_amount.get_untracked(),
        );
        match range {
            Ok((min, max)) => {
                self.filter_error.set(None);
                self.amount_filter_active.set(true);
                self.store.fetch_by_amount(min, max).await;
            }
            Err(message) => self.filter_error.set(Some(message)),
        }
    }

    pub async fn clear_amount_filter(&self) {
        self.min_amount.set(String::new());
        self.max_amount.set(String::new());
        self.filter_error.set(None);
        self.amount_filter_active.set(false);
        self.load().await;
    }

    pub fn open_create(&self) {
        self.dialog.open(DialogMode::Create, CommissionDto::default());
    }

    pub fn open_edit(&self, commission: &Commission) {
        self.dialog
            .open(DialogMode::Edit(commission.id), CommissionDto::from(commission));
    }

    pub fn open_add_segment(&self, commission_id: i32) {
        self.segment_dialog
            .open(DialogMode::Append(commission_id), SegmentDto::default());
    }

    pub async fn submit(&self) {
        let store = self.store.clone();
        self.dialog
            .submit(CommissionDto::validate, |mode, dto| async move {
                match mode {
                    DialogMode::Edit(id) => store.update_commission(id, &dto).await.map(|_| ()),
                    DialogMode::Create | DialogMode::Append(_) => {
                        store.create_commission(&dto).await.map(|_| ())
                    }
                }
            })
            .await;
    }

    pub async fn submit_segment(&self) {
        let store = self.store.clone();
        self.segment_dialog
            .submit(SegmentDto::validate, |mode, dto| async move {
                match mode {
                    DialogMode::Append(id) | DialogMode::Edit(id) => {
                        store.add_segment(id, &dto).await.map(|_| ())
                    }
                    DialogMode::Create => Err("Seleccione una comisión".to_string()),
                }
            })
            .await;
    }

    // Commands for the view

    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load().await });
    }

    pub fn set_kind_command(&self, kind: CommissionType) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.set_kind(kind).await });
    }

    pub fn apply_amount_filter_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.apply_amount_filter().await });
    }

    pub fn clear_amount_filter_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.clear_amount_filter().await });
    }

    pub fn submit_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.submit().await });
    }

    pub fn submit_segment_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.submit_segment().await });
    }
}

fn parse_range(min: &str, max: &str) -> Result<(f64, f64), String> {
    let parse = |text: &str| {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
    };
    match (parse(min), parse(max)) {
        (Some(min), Some(max)) if min <= max => Ok((min, max)),
        (Some(_), Some(_)) => {
            Err("El monto mínimo no puede ser mayor que el máximo".to_string())
        }
        _ => Err("Ingrese montos válidos".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_commission::store::tests::{commission_json, store_with};
    use crate::shared::dialog::DialogState;
    use crate::shared::http::mock::MockTransport;
    use serde_json::json;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1", " 2.5 "), Ok((1.0, 2.5)));
        assert!(parse_range("3", "2").is_err());
        assert!(parse_range("", "2").is_err());
        assert!(parse_range("-1", "2").is_err());
    }

    #[tokio::test]
    async fn test_mount_loads_percentage_commissions() {
        let transport = MockTransport::new();
        transport.push_json(json!([commission_json(1, "POR", 0.5)]));
        let vm = CommissionListViewModel::new(store_with(&transport));

        vm.load().await;

        assert!(transport.last_request().unwrap().url.ends_with("?tipo=POR"));
        assert_eq!(vm.store.list.items_untracked().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_amount_range_sends_nothing() {
        let transport = MockTransport::new();
        let vm = CommissionListViewModel::new(store_with(&transport));
        vm.min_amount.set("10".to_string());
        vm.max_amount.set("5".to_string());

        vm.apply_amount_filter().await;

        assert_eq!(transport.request_count(), 0);
        assert!(vm.filter_error.get_untracked().is_some());
        assert!(!vm.amount_filter_active.get_untracked());
    }

    #[tokio::test]
    async fn test_clear_amount_filter_returns_to_type() {
        let transport = MockTransport::new();
        let vm = CommissionListViewModel::new(store_with(&transport));
        vm.min_amount.set("1".to_string());
        vm.max_amount.set("5".to_string());
        transport.push_json(json!([]));
        vm.apply_amount_filter().await;
        assert!(vm.amount_filter_active.get_untracked());

        transport.push_json(json!([commission_json(1, "FIJ", 2.0)]));
        vm.kind.set(CommissionType::Fixed);
        vm.clear_amount_filter().await;

        assert!(transport.last_request().unwrap().url.ends_with("?tipo=FIJ"));
        assert_eq!(vm.min_amount.get_untracked(), "");
    }

    #[tokio::test]
    async fn test_segment_dialog_appends_to_selected_commission() {
        let transport = MockTransport::new();
        transport.push_json(json!([commission_json(1, "POR", 0.5), commission_json(2, "POR", 1.0)]));
        let vm = CommissionListViewModel::new(store_with(&transport));
        vm.load().await;

        vm.open_add_segment(1);
        vm.segment_dialog.form.set(SegmentDto {
            transactions_from: Some(101.0),
            transactions_to: 500.0,
            amount: 0.4,
        });
        transport.push_json(json!({
            "pk": {"codComision": 1, "codSegmento": 3},
            "transaccionesDesde": 101,
            "transaccionesHasta": 500,
            "monto": 0.4
        }));
        vm.submit_segment().await;

        assert_eq!(vm.segment_dialog.state.get_untracked(), DialogState::Closed);
        assert_eq!(vm.store.list.find(1).unwrap().segments.len(), 1);
        assert!(vm.store.list.find(2).unwrap().segments.is_empty());
    }

    #[tokio::test]
    async fn test_segment_with_inverted_range_is_rejected_inline() {
        let transport = MockTransport::new();
        let vm = CommissionListViewModel::new(store_with(&transport));
        vm.open_add_segment(1);
        vm.segment_dialog.form.set(SegmentDto {
            transactions_from: Some(500.0),
            transactions_to: 100.0,
            amount: 0.4,
        });

        vm.submit_segment().await;

        assert_eq!(transport.request_count(), 0);
        assert_eq!(
            vm.segment_dialog.state.get_untracked(),
            DialogState::Open(DialogMode::Append(1))
        );
        assert!(vm.segment_dialog.error.get_untracked().is_some());
    }
}
