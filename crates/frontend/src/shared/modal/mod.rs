use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно формы; `error` показывается над содержимым
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Inline error of the form
    #[prop(into, optional)]
    error: Signal<Option<String>>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                {move || error.get().map(|message| view! {
                    <div class="modal-error" role="alert">{message}</div>
                })}
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
