// ============================================================================
// WEB TRANSPORT - fetch del navegador vía gloo-net
// ============================================================================

use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use web_sys::{AbortController, FormData};

use crate::error::ApiError;
use crate::services::cancellation::CancelToken;
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport, Method, RequestBody};

/// Transporte real. Cada petición lleva su propio AbortController;
/// se aborta si vence el timeout o si se cancela el token de la vista.
#[derive(Clone, Debug)]
pub struct WebTransport {
    timeout_ms: u32,
}

impl WebTransport {
    pub fn new(timeout_seconds: u32) -> Self {
        Self {
            timeout_ms: timeout_seconds.saturating_mul(1000),
        }
    }

    fn builder(method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }

    fn build(request: HttpRequest, controller: &AbortController) -> Result<Request, ApiError> {
        let mut builder = Self::builder(request.method, &request.url)
            .abort_signal(Some(&controller.signal()));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(json) => builder
                .header("Content-Type", "application/json")
                .body(json),
            RequestBody::File { field, file } => {
                // Sin Content-Type: el navegador pone el boundary del multipart
                let form = FormData::new()
                    .map_err(|e| ApiError::Network(format!("FormData error: {:?}", e)))?;
                form.append_with_blob_and_filename(&field, &file, &file.name())
                    .map_err(|e| ApiError::Network(format!("FormData error: {:?}", e)))?;
                builder.body(form)
            }
        };
        built.map_err(|e| ApiError::Network(format!("Request build error: {}", e)))
    }
}

#[async_trait(?Send)]
impl HttpTransport for WebTransport {
    async fn send(&self, request: HttpRequest, cancel: &CancelToken) -> Result<HttpResponse, ApiError> {
        let controller = AbortController::new()
            .map_err(|e| ApiError::Network(format!("AbortController error: {:?}", e)))?;

        let request = Self::build(request, &controller)?;

        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("Request error: {}", e)))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("Read error: {}", e)))?;
            Ok::<_, ApiError>(HttpResponse { status, body })
        };
        let timeout = TimeoutFuture::new(self.timeout_ms);
        let cancelled = cancel.cancelled();
        pin_mut!(exchange, timeout, cancelled);

        // Respuesta, timeout o vista desmontada: lo que llegue primero
        match select(exchange, select(timeout, cancelled)).await {
            Either::Left((result, _)) => {
                if cancel.is_cancelled() {
                    return Err(ApiError::Cancelled);
                }
                result
            }
            Either::Right((Either::Left(_), _)) => {
                controller.abort();
                log::warn!("⏱️ Timeout tras {} ms", self.timeout_ms);
                Err(ApiError::Network("Request timed out".to_string()))
            }
            Either::Right((Either::Right(_), _)) => {
                controller.abort();
                log::debug!("🛑 Petición abortada (vista desmontada)");
                Err(ApiError::Cancelled)
            }
        }
    }
}
