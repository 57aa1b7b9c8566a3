//! HTTP-слой: транспорт (fetch в браузере, mock в тестах) и типизированный клиент.

pub mod error;
pub mod gloo;
#[cfg(test)]
pub mod mock;

pub use error::ApiError;
pub use gloo::GlooTransport;

use async_trait::async_trait;
use contracts::domain::common::ListEnvelope;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Отправка одного HTTP-запроса.
///
/// Браузерные future не `Send`, поэтому трейт объявлен через `async_trait(?Send)`.
#[async_trait(?Send)]
pub trait ApiTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// JSON-клиент одного сервиса REST API
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn ApiTransport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// `path` пустой или начинается с `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn url_with_query<Q: Serialize>(&self, path: &str, query: &Q) -> Result<String, ApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
        if qs.is_empty() {
            Ok(self.url(path))
        } else {
            Ok(format!("{}?{}", self.url(path), qs))
        }
    }

    /// GET списка: принимает и голый массив, и страницу с `content`
    pub async fn get_list<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>, ApiError> {
        let envelope: ListEnvelope<T> = self.get_json(url).await?;
        Ok(envelope.into_items())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self.execute(Method::Get, url, None).await?;
        decode(&response)
    }

    pub async fn post_json<B, T>(&self, url: String, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::Post, url, Some(encode(body)?)).await?;
        decode(&response)
    }

    pub async fn put_json<B, T>(&self, url: String, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::Put, url, Some(encode(body)?)).await?;
        decode(&response)
    }

    /// POST без тела (параметры в query string)
    pub async fn post_query<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self.execute(Method::Post, url, None).await?;
        decode(&response)
    }

    /// PUT без тела; тело ответа не разбирается
    pub async fn put_empty(&self, url: String) -> Result<(), ApiError> {
        self.execute(Method::Put, url, None).await.map(|_| ())
    }

    pub async fn delete(&self, url: String) -> Result<(), ApiError> {
        self.execute(Method::Delete, url, None).await.map(|_| ())
    }

    async fn execute(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {}", method, url);
        let response = self
            .transport
            .send(ApiRequest { method, url, body })
            .await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        codigo: i32,
    }

    #[derive(Serialize)]
    struct Filter {
        #[serde(skip_serializing_if = "Option::is_none")]
        tipo: Option<String>,
    }

    #[test]
    fn test_url_with_query_omits_empty_query() {
        let client = ApiClient::new("http://host/v1/comisiones/", MockTransport::new());
        assert_eq!(
            client.url_with_query("", &Filter { tipo: None }).unwrap(),
            "http://host/v1/comisiones"
        );
        assert_eq!(
            client
                .url_with_query("", &Filter { tipo: Some("POR".to_string()) })
                .unwrap(),
            "http://host/v1/comisiones?tipo=POR"
        );
    }

    #[tokio::test]
    async fn test_get_list_accepts_both_shapes() {
        let transport = MockTransport::new();
        transport.push_ok(r#"[{"codigo": 1}, {"codigo": 2}]"#);
        transport.push_ok(r#"{"content": [{"codigo": 3}], "totalElements": 1}"#);
        let client = ApiClient::new("http://host", transport.clone());

        let flat: Vec<Item> = client.get_list(client.url("/a")).await.unwrap();
        let paged: Vec<Item> = client.get_list(client.url("/b")).await.unwrap();

        assert_eq!(flat, vec![Item { codigo: 1 }, Item { codigo: 2 }]);
        assert_eq!(paged, vec![Item { codigo: 3 }]);
        assert_eq!(transport.requests()[1].url, "http://host/b");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let transport = MockTransport::new();
        transport.push(404, "Banco no encontrado");
        let client = ApiClient::new("http://host", transport);

        let err = client.delete(client.url("/inactivar-banco/9")).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                body: "Banco no encontrado".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_decode_failure() {
        let transport = MockTransport::new();
        transport.push_ok("<html>");
        let client = ApiClient::new("http://host", transport);

        let result: Result<Item, _> = client.get_json(client.url("/x")).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let transport = MockTransport::new();
        transport.push_ok(r#"{"codigo": 10}"#);
        let client = ApiClient::new("http://host", transport.clone());

        let created: Item = client
            .post_json(client.url(""), &serde_json::json!({"tipo": "FIJ"}))
            .await
            .unwrap();

        assert_eq!(created, Item { codigo: 10 });
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.body.as_deref(), Some(r#"{"tipo":"FIJ"}"#));
    }
}
