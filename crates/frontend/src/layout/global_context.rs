use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Страницы приложения; `key` попадает в `?active=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Banks,
    Commissions,
    FraudRules,
    FraudMonitoring,
    Transactions,
    ConnectionLogs,
}

impl Page {
    pub fn all() -> Vec<Page> {
        vec![
            Page::Dashboard,
            Page::Banks,
            Page::Commissions,
            Page::FraudRules,
            Page::FraudMonitoring,
            Page::Transactions,
            Page::ConnectionLogs,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "d001_overview",
            Page::Banks => "a001_bank",
            Page::Commissions => "a002_commission",
            Page::FraudRules => "a003_fraud_rule",
            Page::FraudMonitoring => "a004_fraud_alert",
            Page::Transactions => "a005_transaction_history",
            Page::ConnectionLogs => "a006_connection_log",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Panel de Control",
            Page::Banks => "Bancos",
            Page::Commissions => "Comisiones",
            Page::FraudRules => "Reglas de Fraude",
            Page::FraudMonitoring => "Monitoreo de Fraude",
            Page::Transactions => "Transacciones",
            Page::ConnectionLogs => "Logs de Conexión",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Banks => "bank",
            Page::Commissions => "percent",
            Page::FraudRules => "shield",
            Page::FraudMonitoring => "alert",
            Page::Transactions => "activity",
            Page::ConnectionLogs => "list",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::all().into_iter().find(|p| p.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn activate(&self, page: Page) {
        log::debug!("activate page '{}'", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Синхронизирует активную страницу с `?active=` в адресной строке
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| Page::from_key(key))
}

fn query_for(page: Page) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active".to_string(), page.key().to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("a999_unknown"), None);
    }

    #[test]
    fn test_active_query() {
        assert_eq!(
            page_from_query("?active=a004_fraud_alert"),
            Some(Page::FraudMonitoring)
        );
        assert_eq!(page_from_query(""), None);
        assert_eq!(query_for(Page::Banks), "?active=a001_bank");
    }
}
