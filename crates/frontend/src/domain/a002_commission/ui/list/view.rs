use super::view_model::CommissionListViewModel;
use crate::domain::a002_commission::ui::details::{CommissionFormDialog, SegmentFormDialog};
use crate::services::use_services;
use crate::shared::components::{ErrorState, PageHeader};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_percent};
use contracts::domain::a002_commission::aggregate::Commission;
use contracts::enums::CommissionType;
use leptos::prelude::*;

#[component]
pub fn CommissionList() -> impl IntoView {
    let vm = CommissionListViewModel::new(use_services().commissions.clone());
    vm.load_command();

    let store = vm.store.list;
    let kind = vm.kind;
    let min_amount = vm.min_amount;
    let max_amount = vm.max_amount;
    let filter_error = vm.filter_error;
    let amount_filter_active = vm.amount_filter_active;

    let on_new = {
        let vm = vm.clone();
        move |_| vm.open_create()
    };
    let on_kind = {
        let vm = vm.clone();
        move |ev| {
            if let Some(kind) = CommissionType::from_code(&event_target_value(&ev)) {
                vm.set_kind_command(kind);
            }
        }
    };
    let on_apply = {
        let vm = vm.clone();
        move |_| vm.apply_amount_filter_command()
    };
    let on_clear = {
        let vm = vm.clone();
        move |_| vm.clear_amount_filter_command()
    };
    let on_retry = {
        let vm = vm.clone();
        Callback::new(move |_| vm.load_command())
    };
    let vm_rows = vm.clone();

    view! {
        <div id="a002_commission--list" data-page-category="list" class="page">
            <PageHeader title="Comisiones" loading=Signal::derive(move || store.is_loading())>
                <button class="button button--primary" on:click=on_new>
                    {icon("plus")}
                    "Nueva Comisión"
                </button>
            </PageHeader>

            <div class="page__toolbar">
                <select
                    class="select"
                    prop:value=move || kind.get().code()
                    disabled=move || amount_filter_active.get()
                    on:change=on_kind
                >
                    {CommissionType::all().into_iter().map(|k| view! {
                        <option value=k.code()>{k.label()}</option>
                    }).collect_view()}
                </select>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Monto mínimo"
                    prop:value=move || min_amount.get()
                    on:input=move |ev| min_amount.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Monto máximo"
                    prop:value=move || max_amount.get()
                    on:input=move |ev| max_amount.set(event_target_value(&ev))
                />
                <button class="button button--secondary" on:click=on_apply>"Filtrar por monto"</button>
                <Show when=move || amount_filter_active.get()>
                    <button class="button button--ghost" on:click=on_clear.clone()>"Quitar filtro"</button>
                </Show>
                {move || filter_error.get().map(|message| view! {
                    <span class="field-error">{message}</span>
                })}
            </div>

            {move || {
                let error = store.error();
                let commissions = store.items();
                match error {
                    Some(message) if commissions.is_empty() => view! {
                        <ErrorState message=message on_retry=on_retry />
                    }.into_any(),
                    error => {
                        let vm = vm_rows.clone();
                        view! {
                            {error.map(|message| view! {
                                <div class="alert alert--error" role="alert">{message}</div>
                            })}
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Código"</th>
                                        <th>"Tipo"</th>
                                        <th>"Monto base"</th>
                                        <th>"Transacciones base"</th>
                                        <th>"Segmentos"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {commissions.into_iter().map(|c| commission_row(vm.clone(), c)).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }
            }}

            <CommissionFormDialog vm=vm.clone() />
            <SegmentFormDialog vm=vm.clone() />
        </div>
    }
}

fn commission_row(vm: CommissionListViewModel, commission: Commission) -> impl IntoView {
    let id = commission.id;
    let amount = match commission.kind {
        CommissionType::Percentage => format_percent(commission.base_amount),
        CommissionType::Fixed => format_money(commission.base_amount),
    };
    let segments = commission
        .segments
        .iter()
        .map(|s| {
            let from = s.transactions_from.unwrap_or(0.0);
            format!("{:.0}–{:.0}: {}", from, s.transactions_to, s.amount)
        })
        .collect::<Vec<_>>()
        .join(", ");
    let has_segments = commission.has_segments;
    let on_edit = {
        let vm = vm.clone();
        let commission = commission.clone();
        move |_| vm.open_edit(&commission)
    };
    let on_segment = move |_| vm.open_add_segment(id);

    view! {
        <tr>
            <td>{id}</td>
            <td>{commission.kind.label()}</td>
            <td class="table__cell--number">{amount}</td>
            <td class="table__cell--number">{commission.base_transactions}</td>
            <td>{if segments.is_empty() { "-".to_string() } else { segments }}</td>
            <td class="table__actions">
                <button class="button button--secondary" on:click=on_edit>"Editar"</button>
                <Show when=move || has_segments>
                    <button class="button button--ghost" on:click=on_segment.clone()>"Agregar segmento"</button>
                </Show>
            </td>
        </tr>
    }
}
