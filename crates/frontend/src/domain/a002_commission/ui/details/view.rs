use crate::domain::a002_commission::ui::list::CommissionListViewModel;
use crate::shared::dialog::DialogMode;
use crate::shared::modal::Modal;
use contracts::enums::CommissionType;
use leptos::prelude::*;

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

#[component]
pub fn CommissionFormDialog(vm: CommissionListViewModel) -> impl IntoView {
    let dialog = vm.dialog;
    let form = dialog.form;

    view! {
        <Show when=move || dialog.is_open()>
            {
                let vm = vm.clone();
                let is_edit = matches!(dialog.state.get_untracked().mode(), Some(DialogMode::Edit(_)));
                let on_submit = move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                };
                view! {
                    <Modal
                        title=if is_edit { "Editar Comisión" } else { "Nueva Comisión" }
                        on_close=Callback::new(move |_| dialog.close())
                        error=Signal::derive(move || dialog.error.get())
                    >
                        <form class="form" on:submit=on_submit>
                            <label class="form__field">
                                <span>"Tipo"</span>
                                <select
                                    prop:value=move || form.with(|f| f.kind.code())
                                    on:change=move |ev| {
                                        if let Some(kind) = CommissionType::from_code(&event_target_value(&ev)) {
                                            form.update(|f| f.kind = kind);
                                        }
                                    }
                                >
                                    {CommissionType::all().into_iter().map(|k| view! {
                                        <option value=k.code()>{k.label()}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                            <label class="form__field">
                                <span>"Monto Base"</span>
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    prop:value=move || form.with(|f| f.base_amount.to_string())
                                    on:input=move |ev| {
                                        if let Some(value) = parse_number(&event_target_value(&ev)) {
                                            form.update(|f| f.base_amount = value);
                                        }
                                    }
                                />
                            </label>
                            <label class="form__field">
                                <span>"Transacciones Base"</span>
                                <input
                                    type="number"
                                    min="0"
                                    prop:value=move || form.with(|f| f.base_transactions.to_string())
                                    on:input=move |ev| {
                                        if let Ok(value) = event_target_value(&ev).trim().parse::<u32>() {
                                            form.update(|f| f.base_transactions = value);
                                        }
                                    }
                                />
                            </label>
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.has_segments)
                                    on:change=move |ev| form.update(|f| f.has_segments = event_target_checked(&ev))
                                />
                                <span>"Maneja segmentos"</span>
                            </label>
                            <div class="form__actions">
                                <button type="submit" class="button button--primary" disabled=move || dialog.is_submitting()>
                                    {if is_edit { "Actualizar" } else { "Crear" }}
                                </button>
                            </div>
                        </form>
                    </Modal>
                }
            }
        </Show>
    }
}

#[component]
pub fn SegmentFormDialog(vm: CommissionListViewModel) -> impl IntoView {
    let dialog = vm.segment_dialog;
    let form = dialog.form;

    view! {
        <Show when=move || dialog.is_open()>
            {
                let vm = vm.clone();
                let on_submit = move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_segment_command();
                };
                view! {
                    <Modal
                        title="Agregar Segmento"
                        on_close=Callback::new(move |_| dialog.close())
                        error=Signal::derive(move || dialog.error.get())
                    >
                        <form class="form" on:submit=on_submit>
                            <label class="form__field">
                                <span>"Transacciones desde"</span>
                                <input
                                    type="number"
                                    min="0"
                                    prop:value=move || form.with(|f| f.transactions_from.map(|v| v.to_string()).unwrap_or_default())
                                    on:input=move |ev| {
                                        let value = parse_number(&event_target_value(&ev));
                                        form.update(|f| f.transactions_from = value);
                                    }
                                />
                            </label>
                            <label class="form__field">
                                <span>"Transacciones hasta"</span>
                                <input
                                    type="number"
                                    min="0"
                                    prop:value=move || form.with(|f| f.transactions_to.to_string())
                                    on:input=move |ev| {
                                        if let Some(value) = parse_number(&event_target_value(&ev)) {
                                            form.update(|f| f.transactions_to = value);
                                        }
                                    }
                                />
                            </label>
                            <label class="form__field">
                                <span>"Monto"</span>
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    prop:value=move || form.with(|f| f.amount.to_string())
                                    on:input=move |ev| {
                                        if let Some(value) = parse_number(&event_target_value(&ev)) {
                                            form.update(|f| f.amount = value);
                                        }
                                    }
                                />
                            </label>
                            <div class="form__actions">
                                <button type="submit" class="button button--primary" disabled=move || dialog.is_submitting()>
                                    "Agregar"
                                </button>
                            </div>
                        </form>
                    </Modal>
                }
            }
        </Show>
    }
}
