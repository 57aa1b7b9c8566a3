use crate::dashboards::d001_overview::ui::OverviewDashboard;
use crate::domain::a001_bank::ui::list::BankList;
use crate::domain::a002_commission::ui::list::CommissionList;
use crate::domain::a003_fraud_rule::ui::list::FraudRuleList;
use crate::domain::a004_fraud_alert::ui::list::FraudAlertList;
use crate::domain::a005_transaction_history::ui::list::TransactionHistoryList;
use crate::domain::a006_connection_log::ui::list::ConnectionLogList;
use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

/// Активная страница; при переключении страница монтируется заново
/// и заново грузит свои данные
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content">
            {move || match ctx.active.get() {
                Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                Page::Banks => view! { <BankList /> }.into_any(),
                Page::Commissions => view! { <CommissionList /> }.into_any(),
                Page::FraudRules => view! { <FraudRuleList /> }.into_any(),
                Page::FraudMonitoring => view! { <FraudAlertList /> }.into_any(),
                Page::Transactions => view! { <TransactionHistoryList /> }.into_any(),
                Page::ConnectionLogs => view! { <ConnectionLogList /> }.into_any(),
            }}
        </div>
    }
}
