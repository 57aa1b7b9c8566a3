use super::{ApiError, ApiRequest, ApiResponse, ApiTransport};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Транспорт для тестов: отдаёт заранее поставленные ответы по очереди
/// и запоминает отправленные запросы.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, status: u16, body: &str) {
        self.push_result(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_ok(&self, body: &str) {
        self.push(200, body);
    }

    pub fn push_json(&self, value: serde_json::Value) {
        self.push_ok(&value.to_string());
    }

    pub fn push_network_error(&self) {
        self.push_result(Err(ApiError::Network("Failed to fetch".to_string())));
    }

    pub fn push_result(&self, result: Result<ApiResponse, ApiError>) {
        self.responses.lock().unwrap().push_back(result);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl ApiTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network(format!("no mock response for {}", request.url))))
    }
}
