//! Боковое меню, сгруппированное по разделам

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<Page>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "General",
            items: vec![Page::Dashboard],
        },
        MenuGroup {
            label: "Catálogos",
            items: vec![Page::Banks, Page::Commissions],
        },
        MenuGroup {
            label: "Fraude",
            items: vec![Page::FraudRules, Page::FraudMonitoring],
        },
        MenuGroup {
            label: "Operaciones",
            items: vec![Page::Transactions, Page::ConnectionLogs],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{group.label}</div>
                    {group.items.into_iter().map(|page| view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.get() == page
                            on:click=move |_| ctx.activate(page)
                        >
                            {icon(page.icon())}
                            <span>{page.title()}</span>
                        </div>
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_is_in_the_menu_once() {
        let pages: Vec<Page> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items)
            .collect();
        let unique: std::collections::HashSet<Page> = pages.iter().copied().collect();
        assert_eq!(pages.len(), Page::all().len());
        assert_eq!(unique.len(), Page::all().len());
    }
}
