use crate::error::ApiError;
use crate::models::{AuthResponse, SignInRequest};
use crate::services::api_client::ApiClient;
use crate::services::cancellation::CancelToken;
use crate::services::endpoints::{AUTH_ME, AUTH_SIGN_IN};
use crate::services::http::ApiRequest;

/// Sign-in con email y contraseña
pub async fn perform_sign_in(api: &ApiClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let request_body = SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let request = ApiRequest::post(AUTH_SIGN_IN).json(&request_body)?;
    api.request(request, &CancelToken::none()).await
}

/// Verifica la credencial guardada; la respuesta trae un token renovado
pub async fn fetch_identity(api: &ApiClient) -> Result<AuthResponse, ApiError> {
    api.request(ApiRequest::get(AUTH_ME), &CancelToken::none()).await
}
