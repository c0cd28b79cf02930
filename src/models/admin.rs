use serde::{Deserialize, Serialize};
use super::{EntityForm, EntityId};

/// Administrador: referencia a un usuario existente
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: EntityId,
    #[serde(rename = "UserId")]
    pub user_id: EntityId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdminInput {
    #[serde(rename = "UserId")]
    pub user_id: Option<EntityId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminForm {
    pub user_id: String,
}

impl EntityForm for AdminForm {
    type Detail = Admin;
    type Input = AdminInput;

    fn from_detail(admin: &Admin) -> Self {
        Self {
            user_id: admin.user_id.to_string(),
        }
    }

    fn to_input(&self) -> AdminInput {
        AdminInput {
            user_id: self.user_id.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_uses_capitalized_user_id_key() {
        let admin: Admin = serde_json::from_str(r#"{"id": 3, "UserId": 7}"#).unwrap();
        assert_eq!(admin.user_id, 7);
        let body = serde_json::to_value(AdminForm { user_id: " 7 ".into() }.to_input()).unwrap();
        assert_eq!(body, serde_json::json!({"UserId": 7}));
    }
}
