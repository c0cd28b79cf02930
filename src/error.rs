// ============================================================================
// API ERROR - Taxonomía de errores del cliente HTTP
// ============================================================================

use thiserror::Error;

/// Mensaje genérico cuando el servidor no da uno
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Sin respuesta (conectividad, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// El servidor rechazó la petición
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Http { status: u16, message: Option<String> },

    /// La petición fue cancelada por su dueño (nunca se muestra al usuario)
    #[error("Request cancelled")]
    Cancelled,

    /// La respuesta no tiene la forma esperada
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: Some(message.into()),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Texto para mostrar junto al formulario/modal que falló.
    /// Solo los errores HTTP traen un mensaje del servidor; el resto cae al genérico.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = ApiError::http(400, "Tracking number required");
        assert_eq!(err.user_message(), "Tracking number required");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn missing_or_blank_message_falls_back() {
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(ApiError::http(500, "  ").user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            ApiError::Network("offline".into()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::http(401, "Unauthorized");
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
        assert!(ApiError::Cancelled.is_cancelled());
    }
}
