// ============================================================================
// HTTP - Tipos de petición/respuesta y el trait de transporte
// ============================================================================

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ApiError;
use crate::services::cancellation::CancelToken;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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

#[derive(Clone, Debug)]
pub enum RequestBody {
    Empty,
    Json(String),
    /// multipart/form-data con un único fichero
    File { field: String, file: web_sys::File },
}

impl RequestBody {
    pub fn as_json(&self) -> Option<&str> {
        match self {
            RequestBody::Json(json) => Some(json),
            _ => None,
        }
    }
}

/// Lo que construyen los servicios: método + ruta relativa al API
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body)
            .map_err(|e| ApiError::decode(format!("Serialization error: {}", e)))?;
        self.body = RequestBody::Json(json);
        Ok(self)
    }

    pub fn file(mut self, field: &str, file: web_sys::File) -> Self {
        self.body = RequestBody::File {
            field: field.to_string(),
            file,
        };
        self
    }
}

/// Petición ya resuelta (URL absoluta + cabeceras)
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transporte HTTP. Falla solo con `Network` o `Cancelled`;
/// los códigos no-2xx se devuelven como respuesta normal.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest, cancel: &CancelToken) -> Result<HttpResponse, ApiError>;
}

/// Query string con cada clave y valor percent-encoded
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_percent_encoded() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("q".to_string(), "a b&c".to_string()),
            ("name".to_string(), "piñata".to_string()),
        ];
        assert_eq!(encode_query(&pairs), "page=2&q=a%20b%26c&name=pi%C3%B1ata");
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse { status: 204, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 302, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 400, body: String::new() }.is_success());
    }
}
