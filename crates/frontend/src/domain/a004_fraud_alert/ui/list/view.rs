use super::view_model::FraudAlertListViewModel;
use crate::services::use_services;
use crate::shared::components::{DateInput, ErrorState, PageHeader};
use crate::shared::date_utils::{format_datetime, today};
use crate::shared::list_utils::SearchInput;
use crate::shared::number_format::{format_money, format_number_with_decimals};
use contracts::domain::a004_fraud_alert::aggregate::FraudAlert;
use leptos::prelude::*;

#[component]
pub fn FraudAlertList() -> impl IntoView {
    let vm = FraudAlertListViewModel::new(use_services().fraud_alerts.clone(), today);
    vm.load_command();

    let store = vm.store.list;
    let (start, end, search) = (vm.start, vm.end, vm.search);
    let process_error = vm.process_error;

    let on_start = {
        let vm = vm.clone();
        Callback::new(move |day| vm.set_start_command(day))
    };
    let on_end = {
        let vm = vm.clone();
        Callback::new(move |day| vm.set_end_command(day))
    };
    let on_clear = {
        let vm = vm.clone();
        move |_| vm.clear_range_command()
    };
    let on_search = {
        let vm = vm.clone();
        Callback::new(move |text: String| vm.search_command(text))
    };
    let on_retry = {
        let vm = vm.clone();
        Callback::new(move |_| vm.load_command())
    };
    let vm_rows = vm.clone();

    view! {
        <div id="a004_fraud_alert--list" data-page-category="list" class="page">
            <PageHeader
                title="Monitoreo de Fraude"
                subtitle="Alertas detectadas por las reglas activas"
                loading=Signal::derive(move || store.is_loading())
            />

            <div class="page__toolbar">
                <DateInput label="Desde" value=Signal::derive(move || start.get()) on_change=on_start />
                <DateInput label="Hasta" value=Signal::derive(move || end.get()) on_change=on_end />
                <button class="button button--secondary" on:click=on_clear>"Solo pendientes"</button>
                <SearchInput
                    value=Signal::derive(move || search.get())
                    on_change=on_search
                    placeholder="Buscar por número de transacción..."
                />
            </div>

            {move || process_error.get().map(|message| view! {
                <div class="alert alert--error" role="alert">{message}</div>
            })}

            {move || {
                let error = store.error();
                let alerts = store.items();
                match error {
                    Some(message) if alerts.is_empty() => view! {
                        <ErrorState message=message on_retry=on_retry />
                    }.into_any(),
                    _ if alerts.is_empty() => view! {
                        <div class="empty-state">"No hay alertas para los criterios seleccionados"</div>
                    }.into_any(),
                    _ => {
                        let vm = vm_rows.clone();
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Código"</th>
                                        <th>"Transacción"</th>
                                        <th>"Monto"</th>
                                        <th>"Regla"</th>
                                        <th>"Riesgo"</th>
                                        <th>"Puntaje"</th>
                                        <th>"Detectada"</th>
                                        <th>"Estado"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {alerts.into_iter().map(|alert| alert_row(vm.clone(), alert)).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

fn alert_row(vm: FraudAlertListViewModel, alert: FraudAlert) -> impl IntoView {
    let id = alert.id;
    let transaction = alert
        .transaction
        .as_ref()
        .map(|t| t.unique_code.clone().unwrap_or_else(|| t.id.to_string()))
        .or_else(|| alert.transaction_unique_code.clone())
        .unwrap_or_else(|| "-".to_string());
    let amount = alert
        .transaction
        .as_ref()
        .map(|t| format_money(t.amount))
        .unwrap_or_else(|| "-".to_string());
    let rule = alert
        .rule
        .as_ref()
        .map(|r| r.name.clone())
        .unwrap_or_else(|| "-".to_string());
    let row_class = if alert.is_high_risk() {
        "table__row table__row--danger"
    } else {
        "table__row"
    };

    view! {
        <tr class=row_class>
            <td>{id}</td>
            <td>{transaction}</td>
            <td class="table__cell--number">{amount}</td>
            <td>{rule}</td>
            <td>
                <span class=format!("badge badge--risk-{}", alert.risk_level.code().to_lowercase())>
                    {alert.risk_level.label()}
                </span>
            </td>
            <td class="table__cell--number">{format_number_with_decimals(alert.risk_score, 2)}</td>
            <td>{format_datetime(&alert.detected_at)}</td>
            <td>{alert.status.label()}</td>
            <td class="table__actions">
                <button class="button button--primary" on:click=move |_| vm.process_command(id)>
                    "Procesar"
                </button>
            </td>
        </tr>
    }
}
