use super::view_model::FraudRuleListViewModel;
use crate::domain::a003_fraud_rule::ui::details::FraudRuleFormDialog;
use crate::services::use_services;
use crate::shared::components::{ErrorState, PageHeader};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_with_decimals};
use contracts::domain::a003_fraud_rule::aggregate::{FraudRule, RuleCriteria};
use leptos::prelude::*;

/// Короткое описание условия для таблицы
pub fn criteria_summary(criteria: &RuleCriteria) -> String {
    match criteria {
        RuleCriteria::TransactionCount { max_transactions } => {
            format!("Máx. {} transacciones", max_transactions)
        }
        RuleCriteria::Amount { max_total_amount } => {
            format!("Límite: {}", format_money(*max_total_amount))
        }
        RuleCriteria::Location { allowed_countries } => format!(
            "Países: {}",
            allowed_countries.as_deref().unwrap_or("-")
        ),
        RuleCriteria::Merchant { excluded_merchants } => format!(
            "Excluidos: {}",
            excluded_merchants.as_deref().unwrap_or("-")
        ),
        RuleCriteria::Schedule { starts_at, ends_at } => format!(
            "{} - {}",
            starts_at.as_deref().unwrap_or("--:--"),
            ends_at.as_deref().unwrap_or("--:--")
        ),
    }
}

#[component]
pub fn FraudRuleList() -> impl IntoView {
    let vm = FraudRuleListViewModel::new(use_services().fraud_rules.clone());
    vm.load_command();

    let store = vm.store.list;
    let on_new = {
        let vm = vm.clone();
        move |_| vm.open_create()
    };
    let on_retry = {
        let vm = vm.clone();
        Callback::new(move |_| vm.load_command())
    };
    let vm_rows = vm.clone();

    view! {
        <div id="a003_fraud_rule--list" data-page-category="list" class="page">
            <PageHeader title="Reglas de Fraude" loading=Signal::derive(move || store.is_loading())>
                <button class="button button--primary" on:click=on_new>
                    {icon("plus")}
                    "Nueva Regla"
                </button>
            </PageHeader>

            {move || {
                let error = store.error();
                let rules = store.items();
                match error {
                    Some(message) if rules.is_empty() => view! {
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
                                        <th>"Nombre"</th>
                                        <th>"Tipo"</th>
                                        <th>"Condición"</th>
                                        <th>"Periodo"</th>
                                        <th>"Riesgo"</th>
                                        <th>"Prioridad"</th>
                                        <th>"Estado"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rules.into_iter().map(|rule| rule_row(vm.clone(), rule)).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }
            }}

            <FraudRuleFormDialog vm=vm.clone() />
        </div>
    }
}

fn rule_row(vm: FraudRuleListViewModel, rule: FraudRule) -> impl IntoView {
    let id = rule.id;
    let on_edit = {
        let vm = vm.clone();
        let rule = rule.clone();
        move |_| vm.open_edit(&rule)
    };
    let on_delete = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("¿Estás seguro de que deseas desactivar esta regla?")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            vm.delete_command(id);
        }
    };
    let score = rule
        .risk_score
        .map(|s| format_number_with_decimals(s, 2))
        .unwrap_or_else(|| "-".to_string());

    view! {
        <tr>
            <td title=rule.description.clone().unwrap_or_default()>{rule.name.clone()}</td>
            <td>{rule.criteria.rule_type().label()}</td>
            <td>{criteria_summary(&rule.criteria)}</td>
            <td>{rule.period.label()}</td>
            <td>
                <span class=format!("badge badge--risk-{}", rule.risk_level.code().to_lowercase())>
                    {rule.risk_level.label()}
                </span>
                " "
                {score}
            </td>
            <td class="table__cell--number">{rule.priority}</td>
            <td>{rule.status.label()}</td>
            <td class="table__actions">
                <button class="button button--secondary" on:click=on_edit>"Editar"</button>
                <button class="button button--danger" on:click=on_delete>"Desactivar"</button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_summary() {
        assert_eq!(
            criteria_summary(&RuleCriteria::Amount {
                max_total_amount: 5000.0
            }),
            "Límite: $5,000.00"
        );
        assert_eq!(
            criteria_summary(&RuleCriteria::Schedule {
                starts_at: Some("22:00".to_string()),
                ends_at: None
            }),
            "22:00 - --:--"
        );
    }
}
