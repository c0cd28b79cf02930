// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Devuelve valores, los hooks actualizan el estado.
// No toca Yew: se prueba con un transporte y un almacén en memoria.
// ============================================================================

use crate::error::ApiError;
use crate::models::{AuthResponse, Session};
use crate::services::auth_service::{fetch_identity, perform_sign_in};
use crate::services::ApiClient;

/// ViewModel de sesión - SOLO lógica de negocio
#[derive(Clone, PartialEq)]
pub struct SessionViewModel {
    api: ApiClient,
}

impl SessionViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Verifica la credencial guardada al arrancar.
    /// Cualquier fallo deja la app sin sesión; nunca es fatal.
    pub async fn restore(&self) -> Option<Session> {
        if self.api.credentials().get().is_none() {
            log::info!("ℹ️ Sin credencial guardada");
            return None;
        }

        log::info!("🔐 Verificando credencial guardada...");
        match fetch_identity(&self.api).await {
            Ok(response) => self.accept(response),
            Err(e) => {
                log::error!("❌ No se pudo restaurar la sesión: {}", e);
                // Credencial rechazada: no volver a probarla en el próximo arranque
                if matches!(e.status(), Some(401) | Some(403)) {
                    self.api.credentials().clear();
                }
                None
            }
        }
    }

    /// Sign-in. En error devuelve el mensaje listo para mostrar.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, String> {
        log::info!("🔐 Iniciando sesión como {}", email);
        let response = perform_sign_in(&self.api, email, password)
            .await
            .map_err(|e| {
                log::error!("❌ Sign-in fallido: {}", e);
                e.user_message()
            })?;

        self.accept(response)
            .ok_or_else(|| ApiError::decode("empty credential or identity").user_message())
    }

    /// Cierra la sesión localmente; no hay llamada al servidor
    pub fn sign_out(&self) {
        log::info!("👋 Logout - limpiando credencial");
        self.api.credentials().clear();
    }

    /// Persiste la credencial recibida y construye la sesión
    fn accept(&self, response: AuthResponse) -> Option<Session> {
        let session = Session::new(response.data, response.access_token)?;
        if let Err(e) = self.api.credentials().set(&session.credential) {
            log::error!("❌ {}", e);
        }
        log::info!("✅ Sesión activa: {}", session.email);
        Some(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_ERROR_MESSAGE;
    use crate::services::testing::{client_with, FakeTransport};
    use crate::utils::storage::{CredentialStore, MemoryCredentials, StorageError};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn setup(token: Option<&str>) -> (FakeTransport, Rc<MemoryCredentials>, SessionViewModel) {
        let transport = FakeTransport::new();
        let credentials = Rc::new(match token {
            Some(token) => MemoryCredentials::with(token),
            None => MemoryCredentials::default(),
        });
        let vm = SessionViewModel::new(client_with(&transport, credentials.clone()));
        (transport, credentials, vm)
    }

    #[test]
    fn restore_without_credential_skips_network() {
        let (transport, _, vm) = setup(None);
        assert_eq!(block_on(vm.restore()), None);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn restore_persists_refreshed_credential() {
        let (transport, credentials, vm) = setup(Some("old"));
        transport.respond(200, json!({"accessToken": "fresh", "data": {"id": 7, "email": "ops@shop.test"}}));

        let session = block_on(vm.restore()).unwrap();
        assert_eq!(session.id, 7);
        assert_eq!(session.email, "ops@shop.test");
        assert_eq!(credentials.get().as_deref(), Some("fresh"));

        let sent = transport.last_request().unwrap();
        assert!(sent.url.ends_with("/api/v1/admin/auth/me"));
        assert_eq!(sent.header("Authorization"), Some("Bearer old"));
    }

    #[test]
    fn restore_degrades_to_unauthenticated_on_network_error() {
        let (transport, credentials, vm) = setup(Some("old"));
        transport.fail(ApiError::Network("offline".into()));

        assert_eq!(block_on(vm.restore()), None);
        assert_eq!(credentials.get().as_deref(), Some("old"));
    }

    #[test]
    fn restore_drops_rejected_credential() {
        let (transport, credentials, vm) = setup(Some("expired"));
        transport.respond(401, json!({"message": "Unauthorized"}));

        assert_eq!(block_on(vm.restore()), None);
        assert_eq!(credentials.get(), None);
    }

    #[test]
    fn sign_in_sets_session_and_persists_credential() {
        let (transport, credentials, vm) = setup(None);
        transport.respond(200, json!({"accessToken": "tok", "data": {"id": 1, "email": "a@shop.test"}}));

        let session = block_on(vm.sign_in("a@shop.test", "secret")).unwrap();
        assert_eq!(session.credential, "tok");
        assert_eq!(credentials.get().as_deref(), Some("tok"));

        let sent = transport.last_request().unwrap();
        assert!(sent.url.ends_with("/api/v1/admin/auth/sign-in"));
        assert_eq!(
            sent.body.as_json(),
            Some(r#"{"email":"a@shop.test","password":"secret"}"#)
        );
    }

    #[test]
    fn sign_in_survives_a_storage_write_failure() {
        let transport = FakeTransport::new();
        let credentials = Rc::new(MemoryCredentials::read_only());
        let vm = SessionViewModel::new(client_with(&transport, credentials.clone()));
        transport.respond(200, json!({"accessToken": "tok", "data": {"id": 1, "email": "a@shop.test"}}));

        assert_eq!(credentials.set("tok"), Err(StorageError::Write { key: "token" }));
        let session = block_on(vm.sign_in("a@shop.test", "secret")).unwrap();
        assert_eq!(session.credential, "tok");
        assert_eq!(credentials.get(), None);
    }

    #[test]
    fn sign_in_failure_surfaces_server_message() {
        let (transport, credentials, vm) = setup(None);
        transport.respond(401, json!({"message": "Invalid email or password"}));

        let err = block_on(vm.sign_in("a@shop.test", "wrong")).unwrap_err();
        assert_eq!(err, "Invalid email or password");
        assert_eq!(credentials.get(), None);
    }

    #[test]
    fn sign_in_failure_without_message_uses_fallback() {
        let (transport, _, vm) = setup(None);
        transport.fail(ApiError::Network("offline".into()));

        let err = block_on(vm.sign_in("a@shop.test", "pw")).unwrap_err();
        assert_eq!(err, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn sign_in_with_empty_token_is_rejected() {
        let (transport, credentials, vm) = setup(None);
        transport.respond(200, json!({"accessToken": "", "data": {"id": 1, "email": "a@shop.test"}}));

        assert!(block_on(vm.sign_in("a@shop.test", "pw")).is_err());
        assert_eq!(credentials.get(), None);
    }

    #[test]
    fn sign_out_clears_credential_without_network() {
        let (transport, credentials, vm) = setup(Some("tok"));
        vm.sign_out();
        assert_eq!(credentials.get(), None);
        assert!(transport.requests().is_empty());
    }
}
