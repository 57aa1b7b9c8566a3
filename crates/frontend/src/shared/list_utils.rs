/// Утилиты для списков: клиентский поиск и поле поиска с debounce
use leptos::prelude::*;

/// Задержка перед отправкой введённого текста, мс
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (в нижнем регистре)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Фильтрует список по поисковому запросу; пустой запрос возвращает всё
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

/// Подстрока без учёта регистра; `filter` уже в нижнем регистре
pub fn contains_ci(value: &str, filter: &str) -> bool {
    value.to_lowercase().contains(filter)
}

/// Поле поиска: `on_change` получает значение после паузы во вводе
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Номер последнего нажатия: отправляет только таймер самого свежего
    let keystroke = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        keystroke.update_value(|n| *n += 1);
        let current = keystroke.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if keystroke.try_get_value() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        keystroke.update_value(|n| *n += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpiar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
