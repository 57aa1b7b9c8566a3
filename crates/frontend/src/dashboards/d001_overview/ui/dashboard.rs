use super::view_model::OverviewViewModel;
use crate::services::use_services;
use crate::shared::components::{CardTone, PageHeader, StatCard};
use crate::shared::date_utils::today;
use crate::shared::number_format::{format_money, format_percent};
use leptos::prelude::*;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let services = use_services();
    let vm = OverviewViewModel::new(
        services.banks.clone(),
        services.fraud_alerts.clone(),
        services.transactions.clone(),
        today,
    );
    vm.load_command();

    let summary = {
        let vm = vm.clone();
        Memo::new(move |_| vm.summary())
    };
    let loading = {
        let vm = vm.clone();
        Signal::derive(move || vm.is_loading())
    };
    let vm_errors = vm.clone();

    view! {
        <div id="d001_overview--dashboard" data-page-category="dashboard" class="page">
            <PageHeader title="Panel de Control" subtitle="Resumen de los últimos 7 días" loading=loading />

            {move || vm_errors.errors().into_iter().map(|message| view! {
                <div class="alert alert--error" role="alert">{message}</div>
            }).collect_view()}

            <div class="stat-grid">
                <StatCard
                    label="Bancos activos"
                    icon_name="bank"
                    value=Signal::derive(move || summary.get().active_banks.to_string())
                />
                <StatCard
                    label="Alertas pendientes"
                    icon_name="alert"
                    value=Signal::derive(move || summary.get().pending_alerts.to_string())
                    tone=Signal::derive(move || if summary.get().pending_alerts > 0 { CardTone::Warning } else { CardTone::Good })
                    subtitle=Signal::derive(move || Some(format!("{} de riesgo alto", summary.get().high_risk_alerts)))
                />
                <StatCard
                    label="Transacciones"
                    icon_name="activity"
                    value=Signal::derive(move || summary.get().transaction_count.to_string())
                    subtitle=Signal::derive(move || {
                        let s = summary.get();
                        Some(format!("{} aprobadas, {} rechazadas", s.approved_count, s.rejected_count))
                    })
                />
                <StatCard
                    label="Tasa de aprobación"
                    icon_name="percent"
                    value=Signal::derive(move || format_percent(summary.get().approval_rate()))
                    tone=Signal::derive(move || {
                        let s = summary.get();
                        if s.transaction_count == 0 {
                            CardTone::Neutral
                        } else if s.rejected_count > s.approved_count {
                            CardTone::Bad
                        } else {
                            CardTone::Good
                        }
                    })
                />
                <StatCard
                    label="Monto total"
                    icon_name="dashboard"
                    value=Signal::derive(move || format_money(summary.get().total_amount))
                />
            </div>

            <section class="card">
                <h2 class="card__title">"Monto por banco"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Banco"</th>
                            <th>"Monto"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || summary.get().amount_by_bank.into_iter().map(|(bank, amount)| view! {
                            <tr>
                                <td>{bank}</td>
                                <td class="table__cell--number">{format_money(amount)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
