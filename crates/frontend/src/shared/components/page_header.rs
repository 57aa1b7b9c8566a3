use leptos::prelude::*;

/// Header of a list page: title, optional subtitle, action buttons
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Spinner next to the title while the page store has requests in flight
    #[prop(optional, into)]
    loading: Signal<bool>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {title}
                    <Show when=move || loading.get()>
                        <span class="spinner" aria-label="Cargando"></span>
                    </Show>
                </h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
