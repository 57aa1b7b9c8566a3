use serde::{Deserialize, Serialize};

/// Ответ списочного endpoint'а.
///
/// Сервер отдаёт либо голый массив, либо страницу Spring Data
/// (`{"content": [...], "totalElements": N, ...}`). Принимаем оба варианта.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Items(Vec<T>),
    Page {
        #[serde(default = "Vec::new")]
        content: Vec<T>,
        #[serde(default, rename = "totalElements")]
        total_elements: Option<u64>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Items(items) => items,
            ListEnvelope::Page { content, .. } => content,
        }
    }
}
