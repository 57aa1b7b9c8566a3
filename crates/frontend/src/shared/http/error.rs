use thiserror::Error;

/// Ошибка обращения к REST API.
///
/// Store-слой сводит все варианты к одной строке через [`ApiError::user_message`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Текст для пользователя.
    ///
    /// Для ответа с кодом ошибки берётся тело ответа (поле `error`/`mensaje`/`message`
    /// JSON-объекта, JSON-строка или сырой текст); если оно пустое, `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { body, .. } => {
                extract_message(body).unwrap_or_else(|| fallback.to_string())
            }
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::Encode(_) => {
                fallback.to_string()
            }
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => ["error", "mensaje", "message"]
            .iter()
            .filter_map(|field| map.get(*field).and_then(|v| v.as_str()))
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(str::to_string),
        Ok(serde_json::Value::String(text)) if !text.trim().is_empty() => {
            Some(text.trim().to_string())
        }
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(body: &str) -> ApiError {
        ApiError::Status {
            status: 400,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_status_uses_plain_body() {
        assert_eq!(
            status("El RUC ya existe").user_message("Error al crear el banco"),
            "El RUC ya existe"
        );
    }

    #[test]
    fn test_status_uses_json_fields() {
        assert_eq!(
            status(r#"{"mensaje": "Banco no encontrado"}"#).user_message("x"),
            "Banco no encontrado"
        );
        assert_eq!(
            status(r#"{"timestamp": "t", "error": "Bad Request"}"#).user_message("x"),
            "Bad Request"
        );
        assert_eq!(status(r#""Comisión inválida""#).user_message("x"), "Comisión inválida");
    }

    #[test]
    fn test_empty_or_opaque_body_falls_back() {
        assert_eq!(status("   ").user_message("fallback"), "fallback");
        assert_eq!(status(r#"{"status": 500}"#).user_message("fallback"), "fallback");
    }

    #[test]
    fn test_transport_errors_fall_back() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(
            err.user_message("Error al cargar los bancos"),
            "Error al cargar los bancos"
        );
        let err = ApiError::Decode("missing field `codigo`".to_string());
        assert_eq!(err.user_message("fallback"), "fallback");
    }
}
