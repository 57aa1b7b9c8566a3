use chrono::NaiveDate;
use leptos::prelude::*;

/// Native date picker bound to an optional calendar day.
/// An emptied input reports `None`.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    let text = move || {
        value
            .get()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    view! {
        <label class="date-input">
            {(!label.is_empty()).then(|| view! { <span class="date-input__label">{label}</span> })}
            <input
                type="date"
                class="date-input__field"
                prop:value=text
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    on_change.run(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok());
                }
            />
        </label>
    }
}
