use serde::Deserialize;
use super::EntityId;

/// `{ data: T }` - forma común de todas las respuestas del API admin
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Cuerpo de error `{ message }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Lo mínimo que necesitamos de una entidad creada/actualizada: su id para navegar
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityRef {
    pub id: EntityId,
}
