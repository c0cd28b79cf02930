use serde::{Deserialize, Serialize};
use super::EntityId;

/// Usuario de la tienda (solo lectura + borrado desde el back office)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub email: String,
}
