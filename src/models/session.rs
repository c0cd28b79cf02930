use serde::{Deserialize, Serialize};
use super::{EntityId, Identity};

/// Identidad autenticada + credencial bearer.
/// Solo se construye a partir de una identidad validada por el servidor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: EntityId,
    pub email: String,
    pub credential: String,
}

impl Session {
    /// Devuelve None si falta la credencial o el email
    pub fn new(identity: Identity, credential: impl Into<String>) -> Option<Self> {
        let credential = credential.into();
        if credential.trim().is_empty() || identity.email.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: identity.id,
            email: identity.email,
            credential,
        })
    }
}
