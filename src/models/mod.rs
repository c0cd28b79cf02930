use serde::Serialize;

pub mod envelope;
pub mod pagination;
pub mod session;
pub mod auth;
pub mod product;
pub mod order;
pub mod discount_code;
pub mod user;
pub mod admin;

pub use envelope::{DataEnvelope, EntityRef, ErrorBody};
pub use pagination::{Page, Pagination};
pub use session::Session;
pub use auth::{AuthResponse, Identity, SignInRequest};
pub use product::{GalleryImage, GalleryUpdate, ProductDetail, ProductForm, ProductInput, ProductRow};
pub use order::{OrderDetail, OrderForm, OrderRow, OrderStatus, OrderUpdate, ShipRequest};
pub use discount_code::{DiscountCode, DiscountCodeForm, DiscountCodeInput};
pub use user::User;
pub use admin::{Admin, AdminForm, AdminInput};

/// Identificador numérico de las entidades del API
pub type EntityId = u64;

/// Formulario editable de una entidad: se rellena desde el detalle
/// y produce el payload de creación/edición
pub trait EntityForm: Clone + Default + PartialEq + 'static {
    type Detail;
    type Input: Serialize;

    fn from_detail(detail: &Self::Detail) -> Self;
    fn to_input(&self) -> Self::Input;
}

/// Convierte un campo de texto en número; vacío o inválido → None (el servidor decide)
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Representación de un número para rellenar un input sin ".0" sobrante
pub fn number_to_input(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_number_handles_blank_and_garbage() {
        assert_eq!(coerce_number(" 12.50 "), Some(12.5));
        assert_eq!(coerce_number("40"), Some(40.0));
        assert_eq!(coerce_number(""), None);
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("NaN"), None);
    }

    #[test]
    fn number_to_input_drops_trailing_zero() {
        assert_eq!(number_to_input(Some(15.0)), "15");
        assert_eq!(number_to_input(Some(9.99)), "9.99");
        assert_eq!(number_to_input(None), "");
    }
}
