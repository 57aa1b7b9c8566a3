use crate::domain::a005_transaction_history::store::TransactionHistoryStore;
use crate::shared::date_utils::{format_datetime, Clock};
use crate::shared::export::{export_to_excel, ExcelExportable};
use chrono::NaiveDate;
use contracts::domain::a005_transaction_history::aggregate::{
    TransactionFilter, TransactionHistory,
};
use contracts::enums::TransactionStatus;
use contracts::shared::DateRange;
use leptos::prelude::*;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;

impl ExcelExportable for TransactionHistory {
    fn headers() -> Vec<&'static str> {
        vec![
            "Código",
            "Transacción",
            "Banco",
            "Monto",
            "Moneda",
            "Estado",
            "Fecha",
            "Detalle",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let transaction = self.transaction.as_ref();
        vec![
            self.id.to_string(),
            transaction.map(|t| t.id.to_string()).unwrap_or_default(),
            self.bank_name().unwrap_or_default().to_string(),
            format!("{:.2}", self.amount()),
            transaction
                .and_then(|t| t.currency.clone())
                .unwrap_or_default(),
            self.status.label().to_string(),
            format_datetime(&self.changed_at),
            self.detail.clone().unwrap_or_default(),
        ]
    }
}

/// ViewModel страницы транзакций
#[derive(Clone)]
pub struct TransactionHistoryListViewModel {
    pub store: TransactionHistoryStore,
    /// `None` - все статусы
    pub status: RwSignal<Option<TransactionStatus>>,
    pub day: RwSignal<Option<NaiveDate>>,
    pub bank_name: RwSignal<String>,
    pub export_error: RwSignal<Option<String>>,
    today: Clock,
}

impl TransactionHistoryListViewModel {
    pub fn new(store: TransactionHistoryStore, today: Clock) -> Self {
        Self {
            store,
            status: RwSignal::new(None),
            day: RwSignal::new(None),
            bank_name: RwSignal::new(String::new()),
            export_error: RwSignal::new(None),
            today,
        }
    }

    /// Выбранный день, иначе последние 7 дней
    pub fn effective_range(&self) -> DateRange {
        match self.day.get_untracked() {
            Some(day) => DateRange::single_day(day),
            None => DateRange::last_days((self.today)(), DEFAULT_WINDOW_DAYS),
        }
    }

    pub fn filter(&self) -> TransactionFilter {
        let (start, end) = self.effective_range().bounds();
        let bank_name = self.bank_name.get_untracked();
        let bank_name = bank_name.trim();
        TransactionFilter {
            status: self.status.get_untracked(),
            start: Some(start),
            end: Some(end),
            bank_name: (!bank_name.is_empty()).then(|| bank_name.to_string()),
        }
    }

    pub async fn load(&self) {
        self.store.fetch_transactions(&self.filter()).await;
    }

    pub async fn set_status(&self, status: Option<TransactionStatus>) {
        self.status.set(status);
        self.load().await;
    }

    pub async fn set_day(&self, day: Option<NaiveDate>) {
        self.day.set(day);
        self.load().await;
    }

    pub async fn set_bank_name(&self, text: String) {
        self.bank_name.set(text);
        self.load().await;
    }

    pub async fn clear_filters(&self) {
        self.status.set(None);
        self.day.set(None);
        self.bank_name.set(String::new());
        self.load().await;
    }

    /// Выгружает то, что сейчас в таблице
    pub fn export(&self) {
        let rows = self.store.list.items_untracked();
        let filename = format!("transacciones_{}.csv", (self.today)().format("%Y%m%d"));
        match export_to_excel(&rows, &filename) {
            Ok(()) => self.export_error.set(None),
            Err(e) => {
                log::warn!("transaction export failed: {}", e);
                self.export_error.set(Some(e));
            }
        }
    }

    // Commands for the view

    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load().await });
    }

    pub fn set_status_command(&self, status: Option<TransactionStatus>) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.set_status(status).await });
    }

    pub fn set_day_command(&self, day: Option<NaiveDate>) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.set_day(day).await });
    }

    pub fn set_bank_name_command(&self, text: String) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.set_bank_name(text).await });
    }

    pub fn clear_filters_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.clear_filters().await });
    }
}
