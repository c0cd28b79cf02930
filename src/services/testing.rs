// Transporte en memoria para los tests: respuestas programadas y peticiones grabadas

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::services::api_client::ApiClient;
use crate::services::cancellation::{CancelScope, CancelToken};
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::utils::storage::CredentialStore;

enum Scripted {
    Response(HttpResponse),
    Failure(ApiError),
}

#[derive(Default)]
struct FakeInner {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
    cancel_next: RefCell<Option<CancelScope>>,
}

#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Rc<FakeInner>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.respond_text(status, &body.to_string());
    }

    pub fn respond_text(&self, status: u16, body: &str) {
        self.inner.script.borrow_mut().push_back(Scripted::Response(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: ApiError) {
        self.inner.script.borrow_mut().push_back(Scripted::Failure(error));
    }

    /// Simula que la vista se desmonta mientras la próxima petición está en vuelo
    pub fn cancel_during_next(&self, scope: CancelScope) {
        *self.inner.cancel_next.borrow_mut() = Some(scope);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest, _cancel: &CancelToken) -> Result<HttpResponse, ApiError> {
        self.inner.requests.borrow_mut().push(request);
        if let Some(scope) = self.inner.cancel_next.borrow_mut().take() {
            scope.cancel();
        }
        match self.inner.script.borrow_mut().pop_front() {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Failure(error)) => Err(error),
            None => Err(ApiError::Network("no scripted response".to_string())),
        }
    }
}

pub fn client_with(transport: &FakeTransport, credentials: Rc<dyn CredentialStore>) -> ApiClient {
    ApiClient::new("http://api.test/", Rc::new(transport.clone()), credentials)
}
