use super::view_model::ConnectionLogListViewModel;
use crate::services::use_services;
use crate::shared::components::{ErrorState, PageHeader};
use crate::shared::date_utils::{format_datetime, today};
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;

#[component]
pub fn ConnectionLogList() -> impl IntoView {
    let vm = ConnectionLogListViewModel::new(use_services().connection_logs.clone(), today);
    vm.load_command();

    let store = vm.store.list;
    let (search, result_filter) = (vm.search, vm.result_filter);
    let on_retry = {
        let vm = vm.clone();
        Callback::new(move |_| vm.load_command())
    };
    let vm_codes = vm.clone();
    let vm_rows = vm.clone();

    view! {
        <div id="a006_connection_log--list" data-page-category="list" class="page">
            <PageHeader
                title="Logs de Conexión"
                subtitle="Últimos 7 días"
                loading=Signal::derive(move || store.is_loading())
            />

            <div class="page__toolbar">
                <SearchInput
                    value=Signal::derive(move || search.get())
                    on_change=Callback::new(move |text: String| search.set(text))
                    placeholder="IP, operación o resultado..."
                />
                <select
                    prop:value=move || result_filter.get().unwrap_or_default()
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        result_filter.set((!code.is_empty()).then_some(code));
                    }
                >
                    <option value="">"Todos los resultados"</option>
                    {move || vm_codes.result_codes().into_iter().map(|code| view! {
                        <option value=code.clone()>{code.clone()}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || {
                let error = store.error();
                let rows = vm_rows.visible();
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
                                    <th>"Fecha"</th>
                                    <th>"IP Origen"</th>
                                    <th>"Operación"</th>
                                    <th>"Resultado"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|log| view! {
                                    <tr>
                                        <td>{log.id}</td>
                                        <td>{format_datetime(&log.logged_at)}</td>
                                        <td>{log.source_ip}</td>
                                        <td>{log.operation}</td>
                                        <td>{log.result}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any(),
                }
            }}
        </div>
    }
}
