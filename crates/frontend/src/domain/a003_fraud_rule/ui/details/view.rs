use crate::domain::a003_fraud_rule::ui::list::FraudRuleListViewModel;
use crate::shared::dialog::DialogMode;
use crate::shared::modal::Modal;
use contracts::domain::a003_fraud_rule::aggregate::{FraudRuleDto, RuleCriteria};
use contracts::enums::{RiskLevel, RuleType, TimePeriod};
use leptos::prelude::*;

fn optional_text(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn FraudRuleFormDialog(vm: FraudRuleListViewModel) -> impl IntoView {
    let dialog = vm.dialog;
    let form = dialog.form;

    view! {
        <Show when=move || dialog.is_open()>
            {
                let vm = vm.clone();
                let vm_type = vm.clone();
                // Поля условия пересоздаются только при смене типа
                let rule_type = Memo::new(move |_| form.with(|f| f.criteria.rule_type()));
                let is_edit = matches!(dialog.state.get_untracked().mode(), Some(DialogMode::Edit(_)));
                let on_submit = move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                };
                view! {
                    <Modal
                        title=if is_edit { "Editar Regla" } else { "Nueva Regla" }
                        on_close=Callback::new(move |_| dialog.close())
                        error=Signal::derive(move || dialog.error.get())
                    >
                        <form class="form" on:submit=on_submit>
                            <label class="form__field">
                                <span>"Nombre de la Regla"</span>
                                <input
                                    maxlength="50"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                <span>"Descripción"</span>
                                <textarea
                                    maxlength="500"
                                    prop:value=move || form.with(|f| f.description.clone())
                                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                                ></textarea>
                            </label>
                            <div class="form__row">
                                <label class="form__field">
                                    <span>"Tipo de Regla"</span>
                                    <select
                                        prop:value=move || form.with(|f| f.criteria.rule_type().code())
                                        on:change=move |ev| {
                                            if let Some(rule_type) = RuleType::from_code(&event_target_value(&ev)) {
                                                vm_type.set_rule_type(rule_type);
                                            }
                                        }
                                    >
                                        {RuleType::all().into_iter().map(|t| view! {
                                            <option value=t.code()>{t.label()}</option>
                                        }).collect_view()}
                                    </select>
                                </label>
                                <label class="form__field">
                                    <span>"Periodo de Tiempo"</span>
                                    <select
                                        prop:value=move || form.with(|f| f.period.code())
                                        on:change=move |ev| {
                                            if let Some(period) = TimePeriod::from_code(&event_target_value(&ev)) {
                                                form.update(|f| f.period = period);
                                            }
                                        }
                                    >
                                        {TimePeriod::all().into_iter().map(|p| view! {
                                            <option value=p.code()>{p.label()}</option>
                                        }).collect_view()}
                                    </select>
                                </label>
                            </div>

                            {move || criteria_fields(rule_type.get(), form)}

                            <div class="form__row">
                                <label class="form__field">
                                    <span>"Puntaje de Riesgo"</span>
                                    <input
                                        type="number"
                                        step="0.01"
                                        min="0.01"
                                        prop:value=move || form.with(|f| f.risk_score.map(|s| s.to_string()).unwrap_or_default())
                                        on:input=move |ev| {
                                            let score = event_target_value(&ev).trim().parse::<f64>().ok();
                                            form.update(|f| f.risk_score = score);
                                        }
                                    />
                                </label>
                                <label class="form__field">
                                    <span>"Nivel de Riesgo"</span>
                                    <select
                                        prop:value=move || form.with(|f| f.risk_level.code())
                                        on:change=move |ev| {
                                            if let Some(level) = RiskLevel::from_code(&event_target_value(&ev)) {
                                                form.update(|f| f.risk_level = level);
                                            }
                                        }
                                    >
                                        {RiskLevel::all().into_iter().map(|l| view! {
                                            <option value=l.code()>{l.label()}</option>
                                        }).collect_view()}
                                    </select>
                                </label>
                                <label class="form__field">
                                    <span>"Prioridad"</span>
                                    <input
                                        type="number"
                                        min="1"
                                        max="99"
                                        prop:value=move || form.with(|f| f.priority.to_string())
                                        on:input=move |ev| {
                                            if let Ok(priority) = event_target_value(&ev).trim().parse::<u8>() {
                                                form.update(|f| f.priority = priority);
                                            }
                                        }
                                    />
                                </label>
                            </div>
                            <div class="form__actions">
                                <button type="submit" class="button button--primary" disabled=move || dialog.is_submitting()>
                                    {if is_edit { "Actualizar Regla" } else { "Crear Regla" }}
                                </button>
                            </div>
                        </form>
                    </Modal>
                }
            }
        </Show>
    }
}

/// Поля условия; набор зависит от типа правила
fn criteria_fields(
    rule_type: RuleType,
    form: RwSignal<FraudRuleDto>,
) -> AnyView {
    match rule_type {
        RuleType::TransactionCount => view! {
            <label class="form__field">
                <span>"Límite de Transacciones"</span>
                <input
                    type="number"
                    min="1"
                    prop:value=move || form.with(|f| match &f.criteria {
                        RuleCriteria::TransactionCount { max_transactions } => max_transactions.to_string(),
                        _ => String::new(),
                    })
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).trim().parse::<u64>() {
                            form.update(|f| f.criteria = RuleCriteria::TransactionCount { max_transactions: value });
                        }
                    }
                />
            </label>
        }.into_any(),
        RuleType::Amount => view! {
            <label class="form__field">
                <span>"Límite de Monto"</span>
                <input
                    type="number"
                    step="0.01"
                    min="0.01"
                    prop:value=move || form.with(|f| match &f.criteria {
                        RuleCriteria::Amount { max_total_amount } => max_total_amount.to_string(),
                        _ => String::new(),
                    })
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).trim().parse::<f64>() {
                            form.update(|f| f.criteria = RuleCriteria::Amount { max_total_amount: value });
                        }
                    }
                />
            </label>
        }.into_any(),
        RuleType::Location => view! {
            <label class="form__field">
                <span>"Países permitidos"</span>
                <input
                    placeholder="EC, CO, PE"
                    prop:value=move || form.with(|f| match &f.criteria {
                        RuleCriteria::Location { allowed_countries } => allowed_countries.clone().unwrap_or_default(),
                        _ => String::new(),
                    })
                    on:input=move |ev| {
                        let value = optional_text(event_target_value(&ev));
                        form.update(|f| f.criteria = RuleCriteria::Location { allowed_countries: value });
                    }
                />
            </label>
        }.into_any(),
        RuleType::Merchant => view! {
            <label class="form__field">
                <span>"Comercios excluidos"</span>
                <input
                    prop:value=move || form.with(|f| match &f.criteria {
                        RuleCriteria::Merchant { excluded_merchants } => excluded_merchants.clone().unwrap_or_default(),
                        _ => String::new(),
                    })
                    on:input=move |ev| {
                        let value = optional_text(event_target_value(&ev));
                        form.update(|f| f.criteria = RuleCriteria::Merchant { excluded_merchants: value });
                    }
                />
            </label>
        }.into_any(),
        RuleType::Schedule => view! {
            <div class="form__row">
                <label class="form__field">
                    <span>"Hora inicio"</span>
                    <input
                        type="time"
                        prop:value=move || form.with(|f| match &f.criteria {
                            RuleCriteria::Schedule { starts_at, .. } => starts_at.clone().unwrap_or_default(),
                            _ => String::new(),
                        })
                        on:input=move |ev| {
                            let value = optional_text(event_target_value(&ev));
                            form.update(|f| {
                                if let RuleCriteria::Schedule { starts_at, .. } = &mut f.criteria {
                                    *starts_at = value;
                                }
                            });
                        }
                    />
                </label>
                <label class="form__field">
                    <span>"Hora fin"</span>
                    <input
                        type="time"
                        prop:value=move || form.with(|f| match &f.criteria {
                            RuleCriteria::Schedule { ends_at, .. } => ends_at.clone().unwrap_or_default(),
                            _ => String::new(),
                        })
                        on:input=move |ev| {
                            let value = optional_text(event_target_value(&ev));
                            form.update(|f| {
                                if let RuleCriteria::Schedule { ends_at, .. } = &mut f.criteria {
                                    *ends_at = value;
                                }
                            });
                        }
                    />
                </label>
            </div>
        }.into_any(),
    }
}
