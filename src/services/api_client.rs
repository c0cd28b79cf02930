// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Adjunta la credencial leída en el momento de cada llamada, decodifica las
// respuestas con tipos explícitos y traduce los fallos a `ApiError`.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{DataEnvelope, EntityId, EntityRef, ErrorBody, Page, Pagination};
use crate::services::cancellation::CancelToken;
use crate::services::endpoints::{DetailEndpoint, ListEndpoint};
use crate::services::http::{encode_query, ApiRequest, HttpRequest, HttpResponse, HttpTransport};
use crate::services::web_transport::WebTransport;
use crate::utils::storage::{CredentialStore, LocalStorageCredentials};

/// Cliente API compartido por todas las vistas (barato de clonar)
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    transport: Rc<dyn HttpTransport>,
    credentials: Rc<dyn CredentialStore>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && Rc::ptr_eq(&self.transport, &other.transport)
            && Rc::ptr_eq(&self.credentials, &other.credentials)
    }
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        transport: Rc<dyn HttpTransport>,
        credentials: Rc<dyn CredentialStore>,
    ) -> Self {
        Self {
            base_url: Rc::from(base_url.trim_end_matches('/')),
            transport,
            credentials,
        }
    }

    /// Cliente del navegador: gloo-net + localStorage
    pub fn browser() -> Self {
        Self::new(
            CONFIG.api_url(),
            Rc::new(WebTransport::new(CONFIG.network_timeout_seconds)),
            Rc::new(LocalStorageCredentials::new()),
        )
    }

    pub fn credentials(&self) -> &Rc<dyn CredentialStore> {
        &self.credentials
    }

    fn url(&self, request: &ApiRequest) -> String {
        if request.query.is_empty() {
            format!("{}{}", self.base_url, request.path)
        } else {
            format!("{}{}?{}", self.base_url, request.path, encode_query(&request.query))
        }
    }

    /// Envía la petición y devuelve la respuesta 2xx tal cual
    pub async fn send(&self, request: ApiRequest, cancel: &CancelToken) -> Result<HttpResponse, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        // La credencial se lee ahora, no cuando se montó la vista
        if let Some(token) = self.credentials.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let http_request = HttpRequest {
            method: request.method,
            url: self.url(&request),
            headers,
            body: request.body,
        };
        log::debug!("➡️ {} {}", http_request.method.as_str(), http_request.url);

        let result = self.transport.send(http_request, cancel).await;

        // Lo que llegue después de cancelar no se aplica nunca
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let response = result?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(&response))
        }
    }

    /// Petición con cuerpo JSON tipado
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        cancel: &CancelToken,
    ) -> Result<T, ApiError> {
        let response = self.send(request, cancel).await?;
        serde_json::from_str(&response.body).map_err(ApiError::from)
    }

    /// Petición cuya respuesta viene envuelta en `{ data }`
    pub async fn request_data<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        cancel: &CancelToken,
    ) -> Result<T, ApiError> {
        self.request::<DataEnvelope<T>>(request, cancel)
            .await
            .map(|envelope| envelope.data)
    }

    /// Petición cuyo cuerpo se ignora (DELETE, acciones)
    pub async fn execute(&self, request: ApiRequest, cancel: &CancelToken) -> Result<(), ApiError> {
        self.send(request, cancel).await.map(|_| ())
    }

    // ------------------------------------------------------------------------
    // CRUD genérico
    // ------------------------------------------------------------------------

    /// Listado paginado. `page = None` deja que el servidor elija (primera página).
    pub async fn list_page<T: DeserializeOwned>(
        &self,
        endpoint: &ListEndpoint,
        page: Option<u32>,
        cancel: &CancelToken,
    ) -> Result<Page<T>, ApiError> {
        let mut request = ApiRequest::get(endpoint.path);
        if let Some(page) = page {
            request = request.query("page", page);
        }
        let data: Value = self.request_data(request, cancel).await?;
        let page_data = decode_page::<T>(data, endpoint.key)?;

        if let Some(requested) = page {
            if page_data.pagination.current_page != requested {
                log::warn!(
                    "⚠️ {}: pedida página {} pero el servidor devolvió {}",
                    endpoint.path,
                    requested,
                    page_data.pagination.current_page
                );
            }
        }
        Ok(page_data)
    }

    pub async fn get_detail<T: DeserializeOwned>(
        &self,
        endpoint: &DetailEndpoint,
        id: EntityId,
        cancel: &CancelToken,
    ) -> Result<T, ApiError> {
        let data: Value = self
            .request_data(ApiRequest::get(endpoint.item_path(id)), cancel)
            .await?;
        take_key(data, endpoint.key)
    }

    pub async fn create<B: Serialize>(&self, endpoint: &DetailEndpoint, body: &B) -> Result<EntityRef, ApiError> {
        let request = ApiRequest::post(endpoint.path).json(body)?;
        self.request_data(request, &CancelToken::none()).await
    }

    pub async fn update<B: Serialize>(
        &self,
        endpoint: &DetailEndpoint,
        id: EntityId,
        body: &B,
    ) -> Result<EntityRef, ApiError> {
        let request = ApiRequest::put(endpoint.item_path(id)).json(body)?;
        self.request_data(request, &CancelToken::none()).await
    }

    pub async fn delete(&self, endpoint: &DetailEndpoint, id: EntityId) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(endpoint.item_path(id)), &CancelToken::none())
            .await
    }

    /// POST de acción (ship, cancel...). El cuerpo de la respuesta se ignora.
    pub async fn post_action<B: Serialize>(&self, path: String, body: Option<&B>) -> Result<(), ApiError> {
        let mut request = ApiRequest::post(path);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        self.execute(request, &CancelToken::none()).await
    }

    /// POST multipart con un fichero en el campo `file`
    pub async fn upload_file<T: DeserializeOwned>(&self, path: String, file: web_sys::File) -> Result<T, ApiError> {
        let request = ApiRequest::post(path).file("file", file);
        self.request_data(request, &CancelToken::none()).await
    }
}

/// `{ message }` si el cuerpo lo trae; si no, mensaje vacío (la vista pone el genérico)
fn error_from_response(response: &HttpResponse) -> ApiError {
    let body: ErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
    ApiError::Http {
        status: response.status,
        message: body.message,
    }
}

/// Extrae `data.<key>` con el tipo pedido
fn take_key<T: DeserializeOwned>(data: Value, key: &str) -> Result<T, ApiError> {
    let mut object = match data {
        Value::Object(object) => object,
        other => {
            return Err(ApiError::decode(format!(
                "expected object with '{}', got {}",
                key, other
            )))
        }
    };
    let value = object
        .remove(key)
        .ok_or_else(|| ApiError::decode(format!("missing '{}' in response data", key)))?;
    serde_json::from_value(value).map_err(ApiError::from)
}

/// `{ <key>: [...], pagination: {...} }` → Page<T> validada
fn decode_page<T: DeserializeOwned>(data: Value, key: &str) -> Result<Page<T>, ApiError> {
    let items: Vec<T> = take_key(data.clone(), key)?;
    let pagination: Pagination = take_key(data, "pagination")?;
    let page = Page { items, pagination };
    page.check()?;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductRow;
    use crate::services::cancellation::CancelScope;
    use crate::services::endpoints::{PRODUCT, PRODUCTS};
    use crate::services::http::Method;
    use crate::services::testing::{client_with, FakeTransport};
    use crate::utils::storage::MemoryCredentials;
    use futures::executor::block_on;
    use serde_json::json;

    fn mug_page() -> Value {
        json!({"data": {
            "products": [{"id": 9, "name": "Mug", "regularPrice": 12, "salePrice": null,
                          "isAvailable": true, "isPublic": true}],
            "pagination": {"currentPage": 2, "currentPageSize": 25, "totalItems": 30, "totalPages": 2}
        }})
    }

    #[test]
    fn list_page_sends_page_query_and_bearer() {
        let transport = FakeTransport::new();
        transport.respond(200, mug_page());
        let credentials = Rc::new(MemoryCredentials::with("tok-1"));
        let api = client_with(&transport, credentials);

        let page: Page<ProductRow> = block_on(api.list_page(&PRODUCTS, Some(2), &CancelToken::none())).unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Mug");
        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.total_pages, 2);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "http://api.test/api/v1/admin/products?page=2");
        assert_eq!(sent.header("Authorization"), Some("Bearer tok-1"));
    }

    #[test]
    fn credential_is_read_at_call_time() {
        let transport = FakeTransport::new();
        transport.respond(200, mug_page());
        transport.respond(200, mug_page());
        let credentials = Rc::new(MemoryCredentials::with("old"));
        let api = client_with(&transport, credentials.clone());

        let _ = block_on(api.list_page::<ProductRow>(&PRODUCTS, None, &CancelToken::none()));
        credentials.set("new").unwrap();
        let _ = block_on(api.list_page::<ProductRow>(&PRODUCTS, None, &CancelToken::none()));

        let requests = transport.requests();
        assert_eq!(requests[0].header("Authorization"), Some("Bearer old"));
        assert_eq!(requests[1].header("Authorization"), Some("Bearer new"));
        assert_eq!(requests[0].url, "http://api.test/api/v1/admin/products");
    }

    #[test]
    fn no_credential_means_no_authorization_header() {
        let transport = FakeTransport::new();
        transport.respond(200, json!({"data": {"product": {"id": 1}}}));
        let api = client_with(&transport, Rc::new(MemoryCredentials::default()));

        let _ = block_on(api.get_detail::<Value>(&PRODUCT, 1, &CancelToken::none()));
        assert_eq!(transport.last_request().unwrap().header("Authorization"), None);
    }

    #[test]
    fn http_error_carries_server_message() {
        let transport = FakeTransport::new();
        transport.respond(400, json!({"message": "Name is required"}));
        let api = client_with(&transport, Rc::new(MemoryCredentials::default()));

        let err = block_on(api.create(&PRODUCT, &json!({"name": ""}))).unwrap_err();
        assert_eq!(err, ApiError::http(400, "Name is required"));
    }

    #[test]
    fn http_error_without_json_body_has_no_message() {
        let transport = FakeTransport::new();
        transport.respond_text(502, "<html>Bad gateway</html>");
        let api = client_with(&transport, Rc::new(MemoryCredentials::default()));

        let err = block_on(api.delete(&PRODUCT, 3)).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                message: None
            }
        );
        assert_eq!(err.user_message(), crate::error::GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn unexpected_shape_is_a_decode_error() {
        let transport = FakeTransport::new();
        transport.respond(200, json!({"data": {"items": []}}));
        let api = client_with(&transport, Rc::new(MemoryCredentials::default()));

        let err = block_on(api.list_page::<ProductRow>(&PRODUCTS, None, &CancelToken::none())).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn oversized_page_is_a_decode_error() {
        let transport = FakeTransport::new();
        transport.respond(200, json!({"data": {
            "products": [
                {"id": 1, "name": "A", "regularPrice": 1, "isAvailable": true, "isPublic": true},
                {"id": 2, "name": "B", "regularPrice": 1, "isAvailable": true, "isPublic": true}
            ],
            "pagination": {"currentPage": 1, "currentPageSize": 1, "totalItems": 2, "totalPages": 2}
        }}));
        let api = client_with(&transport, Rc::new(MemoryCredentials::default()));

        let err = block_on(api.list_page::<ProductRow>(&PRODUCTS, None, &CancelToken::none())).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn cancelled_before_send_never_hits_the_network() {
        let transport = FakeTransport::new();
        let api = client_with(&transport, Rc::new(MemoryCredentials::default()));
        let scope = CancelScope::new();
        scope.cancel();

        let err = block_on(api.list_page::<ProductRow>(&PRODUCTS, None, &scope.token())).unwrap_err();
        assert_eq!(err, ApiError::Cancelled);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn cancelled_in_flight_discards_the_response() {
        let transport = FakeTransport::new();
        let scope = CancelScope::new();
        transport.respond(200, mug_page());
        transport.cancel_during_next(scope.clone());
        let api = client_with(&transport, Rc::new(MemoryCredentials::default()));

        let err = block_on(api.list_page::<ProductRow>(&PRODUCTS, None, &scope.token())).unwrap_err();
        assert_eq!(err, ApiError::Cancelled);
    }

    #[test]
    fn create_returns_new_entity_id() {
        let transport = FakeTransport::new();
        transport.respond(201, json!({"data": {"id": 42, "name": "Mug"}}));
        let api = client_with(&transport, Rc::new(MemoryCredentials::default()));

        let created = block_on(api.create(&PRODUCT, &json!({"name": "Mug"}))).unwrap();
        assert_eq!(created.id, 42);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.body.as_json(), Some(r#"{"name":"Mug"}"#));
    }
}
