use crate::domain::a001_bank::ui::list::BankListViewModel;
use crate::shared::dialog::DialogMode;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Форма создания/редактирования банка
#[component]
pub fn BankFormDialog(vm: BankListViewModel) -> impl IntoView {
    let dialog = vm.dialog;
    let form = dialog.form;

    view! {
        <Show when=move || dialog.is_open()>
            {
                let vm = vm.clone();
                let is_edit = matches!(dialog.state.get_untracked().mode(), Some(DialogMode::Edit(_)));
                let title = if is_edit { "Editar Banco" } else { "Crear Nuevo Banco" };
                let on_submit = move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                };
                view! {
                    <Modal
                        title=title
                        on_close=Callback::new(move |_| dialog.close())
                        error=Signal::derive(move || dialog.error.get())
                    >
                        <form class="form" on:submit=on_submit>
                            <div class="form__row">
                                <label class="form__field">
                                    <span>"Código Interno"</span>
                                    <input
                                        maxlength="10"
                                        prop:value=move || form.with(|f| f.internal_code.clone())
                                        on:input=move |ev| form.update(|f| f.internal_code = event_target_value(&ev))
                                    />
                                </label>
                                <label class="form__field">
                                    <span>"RUC"</span>
                                    <input
                                        maxlength="13"
                                        inputmode="numeric"
                                        prop:value=move || form.with(|f| f.ruc.clone())
                                        on:input=move |ev| form.update(|f| f.ruc = event_target_value(&ev))
                                    />
                                </label>
                            </div>
                            <label class="form__field">
                                <span>"Razón Social"</span>
                                <input
                                    maxlength="100"
                                    prop:value=move || form.with(|f| f.legal_name.clone())
                                    on:input=move |ev| form.update(|f| f.legal_name = event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                <span>"Nombre Comercial"</span>
                                <input
                                    maxlength="100"
                                    prop:value=move || form.with(|f| f.trade_name.clone())
                                    on:input=move |ev| form.update(|f| f.trade_name = event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                <span>"Comisión (%)"</span>
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    prop:value=move || form.with(|f| f.commission.percentage.to_string())
                                    on:input=move |ev| {
                                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                            form.update(|f| f.commission.percentage = value);
                                        }
                                    }
                                />
                            </label>
                            <div class="form__actions">
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || dialog.is_submitting()
                                >
                                    {if is_edit { "Actualizar Banco" } else { "Crear Banco" }}
                                </button>
                            </div>
                        </form>
                    </Modal>
                }
            }
        </Show>
    }
}
