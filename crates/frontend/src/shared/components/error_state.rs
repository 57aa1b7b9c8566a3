use crate::shared::icons::icon;
use leptos::prelude::*;

/// Full-page failure of a list load (icon + message)
#[component]
pub fn ErrorState(
    #[prop(into)]
    message: String,
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-state" role="alert">
            <div class="error-state__icon">{icon("alert")}</div>
            <p class="error-state__message">{message}</p>
            {on_retry.map(|retry| view! {
                <button class="button button--secondary" on:click=move |_| retry.run(())>
                    "Reintentar"
                </button>
            })}
        </div>
    }
}
