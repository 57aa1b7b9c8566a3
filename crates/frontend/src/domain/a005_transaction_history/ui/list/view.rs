use super::view_model::TransactionHistoryListViewModel;
use crate::services::use_services;
use crate::shared::components::{DateInput, ErrorState, PageHeader};
use crate::shared::date_utils::{format_datetime, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::number_format::format_money;
use contracts::domain::a005_transaction_history::aggregate::TransactionHistory;
use contracts::enums::TransactionStatus;
use leptos::prelude::*;

#[component]
pub fn TransactionHistoryList() -> impl IntoView {
    let vm = TransactionHistoryListViewModel::new(use_services().transactions.clone(), today);
    vm.load_command();

    let store = vm.store.list;
    let (status, day, bank_name) = (vm.status, vm.day, vm.bank_name);
    let export_error = vm.export_error;

    let on_status = {
        let vm = vm.clone();
        move |ev: leptos::ev::Event| {
            let code = event_target_value(&ev);
            vm.set_status_command(TransactionStatus::from_code(&code));
        }
    };
    let on_day = {
        let vm = vm.clone();
        Callback::new(move |d| vm.set_day_command(d))
    };
    let on_bank = {
        let vm = vm.clone();
        Callback::new(move |text: String| vm.set_bank_name_command(text))
    };
    let on_clear = {
        let vm = vm.clone();
        move |_| vm.clear_filters_command()
    };
    let on_export = {
        let vm = vm.clone();
        move |_| vm.export()
    };
    let on_retry = {
        let vm = vm.clone();
        Callback::new(move |_| vm.load_command())
    };

    view! {
        <div id="a005_transaction_history--list" data-page-category="list" class="page">
            <PageHeader
                title="Transacciones"
                subtitle="Historial de estados; por defecto los últimos 7 días"
                loading=Signal::derive(move || store.is_loading())
            >
                <button class="button button--secondary" on:click=on_export>
                    {icon("download")}
                    "Exportar"
                </button>
            </PageHeader>

            <div class="page__toolbar">
                <select
                    prop:value=move || status.get().map(|s| s.code()).unwrap_or("")
                    on:change=on_status
                >
                    <option value="">"Todos los estados"</option>
                    {TransactionStatus::all().into_iter().map(|s| view! {
                        <option value=s.code()>{s.label()}</option>
                    }).collect_view()}
                </select>
                <DateInput label="Día" value=Signal::derive(move || day.get()) on_change=on_day />
                <SearchInput
                    value=Signal::derive(move || bank_name.get())
                    on_change=on_bank
                    placeholder="Banco..."
                />
                <button class="button button--secondary" on:click=on_clear>"Limpiar filtros"</button>
            </div>

            {move || export_error.get().map(|message| view! {
                <div class="alert alert--warning" role="alert">{message}</div>
            })}

            {move || {
                let error = store.error();
                let rows = store.items();
                match error {
                    Some(message) if rows.is_empty() => view! {
                        <ErrorState message=message on_retry=on_retry />
                    }.into_any(),
                    error => view! {
                        {error.map(|message| view! {
                            <div class="alert alert--error" role="alert">{message}</div>
                        })}
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Código"</th>
                                    <th>"Transacción"</th>
                                    <th>"Banco"</th>
                                    <th>"Monto"</th>
                                    <th>"Estado"</th>
                                    <th>"Fecha"</th>
                                    <th>"Detalle"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(history_row).collect_view()}
                            </tbody>
                        </table>
                    }.into_any(),
                }
            }}
        </div>
    }
}

fn history_row(row: TransactionHistory) -> impl IntoView {
    let transaction = row
        .transaction
        .as_ref()
        .map(|t| t.id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let bank = row.bank_name().unwrap_or("-").to_string();

    view! {
        <tr>
            <td>{row.id}</td>
            <td>{transaction}</td>
            <td>{bank}</td>
            <td class="table__cell--number">{format_money(row.amount())}</td>
            <td>
                <span class=format!("badge badge--status-{}", row.status.code().to_lowercase())>
                    {row.status.label()}
                </span>
            </td>
            <td>{format_datetime(&row.changed_at)}</td>
            <td>{row.detail.clone().unwrap_or_default()}</td>
        </tr>
    }
}
