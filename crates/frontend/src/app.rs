use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::services::AppServices;
use crate::shared::api_utils::api_base;
use crate::shared::config::load_config;
use crate::shared::http::GlooTransport;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    // One set of stores per session
    let config = load_config();
    let services = AppServices::new(&config, Arc::new(GlooTransport), &api_base());
    let teardown = services.clone();
    services.provide();
    on_cleanup(move || teardown.reset());

    view! {
        <Shell />
    }
}
