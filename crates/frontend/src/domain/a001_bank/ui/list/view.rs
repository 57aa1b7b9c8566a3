use super::view_model::BankListViewModel;
use crate::domain::a001_bank::ui::details::BankFormDialog;
use crate::services::use_services;
use crate::shared::components::{ErrorState, PageHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_percent;
use contracts::domain::a001_bank::aggregate::Bank;
use leptos::prelude::*;

#[component]
pub fn BankList() -> impl IntoView {
    let vm = BankListViewModel::new(use_services().banks.clone());
    vm.load_command();

    let store = vm.store.list;
    let search = vm.search;

    let on_search = {
        let vm = vm.clone();
        Callback::new(move |text: String| vm.search_command(text))
    };
    let on_new = {
        let vm = vm.clone();
        move |_| vm.open_create()
    };
    let on_retry = {
        let vm = vm.clone();
        Callback::new(move |_| vm.load_command())
    };
    let vm_cards = vm.clone();

    view! {
        <div id="a001_bank--list" data-page-category="list" class="page">
            <PageHeader title="Bancos" subtitle="Bancos activos del procesador" loading=Signal::derive(move || store.is_loading())>
                <button class="button button--primary" on:click=on_new>
                    {icon("plus")}
                    "Nuevo Banco"
                </button>
            </PageHeader>

            <div class="page__toolbar">
                <SearchInput
                    value=Signal::derive(move || search.get())
                    on_change=on_search
                    placeholder="Buscar por nombre..."
                />
            </div>

            {move || {
                let error = store.error();
                let banks = store.items();
                match error {
                    Some(message) if banks.is_empty() => view! {
                        <ErrorState message=message on_retry=on_retry />
                    }.into_any(),
                    error => {
                        let vm = vm_cards.clone();
                        view! {
                            {error.map(|message| view! {
                                <div class="alert alert--error" role="alert">{message}</div>
                            })}
                            <div class="card-grid">
                                <For
                                    each=move || banks.clone()
                                    key=|bank| (bank.id, bank.trade_name.clone(), bank.legal_name.clone())
                                    children=move |bank| bank_card(vm.clone(), bank)
                                />
                            </div>
                        }.into_any()
                    }
                }
            }}

            <BankFormDialog vm=vm.clone() />
        </div>
    }
}

fn bank_card(vm: BankListViewModel, bank: Bank) -> impl IntoView {
    let id = bank.id;
    let on_edit = {
        let vm = vm.clone();
        let bank = bank.clone();
        move |_| vm.open_edit(&bank)
    };
    let on_deactivate = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("¿Estás seguro de que deseas desactivar este banco?")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            vm.deactivate_command(id);
        }
    };
    let commission = bank
        .commission
        .as_ref()
        .map(|c| format!("{} ({})", c.name, format_percent(c.percentage)))
        .unwrap_or_else(|| "-".to_string());
    let created = bank
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="card">
            <div class="card__header">
                <div class="card__icon">{icon("bank")}</div>
                <div>
                    <div class="card__title">{bank.trade_name.clone()}</div>
                    <div class="card__subtitle">{bank.legal_name.clone()}</div>
                </div>
            </div>
            <dl class="card__body">
                <dt>"Código interno"</dt><dd>{bank.internal_code.clone()}</dd>
                <dt>"RUC"</dt><dd>{bank.ruc.clone()}</dd>
                <dt>"Comisión"</dt><dd>{commission}</dd>
                <dt>"Creado"</dt><dd>{created}</dd>
                <dt>"Estado"</dt><dd>{bank.status.label()}</dd>
            </dl>
            <div class="card__actions">
                <button class="button button--secondary" on:click=on_edit>"Editar"</button>
                <button class="button button--danger" on:click=on_deactivate>"Desactivar"</button>
            </div>
        </div>
    }
}
