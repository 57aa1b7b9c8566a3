use crate::domain::a001_bank::store::BankStore;
use crate::shared::dialog::{DialogMode, FormDialog};
use contracts::domain::a001_bank::aggregate::{Bank, BankDto};
use leptos::prelude::*;

/// ViewModel страницы банков.
///
/// Поиск идёт на сервер: непустой текст ищет по коммерческому названию,
/// пустой возвращает полный список активных банков.
#[derive(Clone)]
pub struct BankListViewModel {
    pub store: BankStore,
    pub search: RwSignal<String>,
    pub dialog: FormDialog<i32, BankDto>,
}

impl BankListViewModel {
    pub fn new(store: BankStore) -> Self {
        Self {
            store,
            search: RwSignal::new(String::new()),
            dialog: FormDialog::new(),
        }
    }

    pub async fn load(&self) {
        self.store.fetch_banks().await;
    }

    pub async fn set_search(&self, text: String) {
        self.search.set(text.clone());
        let term = text.trim();
        if term.is_empty() {
            self.store.fetch_banks().await;
        } else {
            self.store.search_banks(term).await;
        }
    }

    pub fn open_create(&self) {
        self.dialog.open(DialogMode::Create, BankDto::default());
    }

    pub fn open_edit(&self, bank: &Bank) {
        self.dialog.open(DialogMode::Edit(bank.id), BankDto::from(bank));
    }

    pub async fn submit(&self) {
        let store = self.store.clone();
        self.dialog
            .submit(BankDto::validate, |mode, dto| async move {
                match mode {
                    DialogMode::Edit(id) => store.update_bank(id, &dto).await.map(|_| ()),
                    DialogMode::Create | DialogMode::Append(_) => {
                        store.create_bank(&dto).await.map(|_| ())
                    }
                }
            })
            .await;
    }

    /// Ошибка попадает в слот ошибки хранилища
    pub async fn deactivate(&self, id: i32) {
        if let Err(e) = self.store.deactivate_bank(id).await {
            log::warn!("bank {} was not deactivated: {}", id, e);
        }
    }

    // Commands for the view

    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load().await });
    }

    pub fn search_command(&self, text: String) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.set_search(text).await });
    }

    pub fn submit_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.submit().await });
    }

    pub fn deactivate_command(&self, id: i32) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.deactivate(id).await });
    }
}
