use serde::{Deserialize, Serialize};
use super::EntityId;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Identity {
    pub id: EntityId,
    pub email: String,
}

/// Respuesta de sign-in y de /auth/me: `{ accessToken, data: { id, email } }`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub data: Identity,
}
