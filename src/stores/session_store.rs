// ============================================================================
// SESSION STORE - Estado de la sesión del administrador
// ============================================================================
// Estructura plana compatible con use_state; el viewmodel calcula los
// valores y el hook los aplica.
// ============================================================================

use crate::models::Session;

/// Fase de arranque: mientras se verifica la credencial guardada no se enruta
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupPhase {
    Restoring,
    Ready,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore {
    pub session: Option<Session>,
    pub phase: StartupPhase,
    pub signing_in: bool,
    pub sign_in_error: Option<String>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            session: None,
            phase: StartupPhase::Restoring,
            signing_in: false,
            sign_in_error: None,
        }
    }
}

impl SessionStore {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.email.as_str())
    }

    pub fn restored(session: Option<Session>) -> Self {
        Self {
            session,
            phase: StartupPhase::Ready,
            ..Self::default()
        }
    }

    pub fn signed_out() -> Self {
        Self::restored(None)
    }
}
