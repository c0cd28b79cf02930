// ============================================================================
// ENDPOINTS - Rutas del API admin y claves de las respuestas
// ============================================================================

use crate::models::EntityId;

pub const API_PREFIX: &str = "/api/v1/admin";

pub const AUTH_SIGN_IN: &str = "/api/v1/admin/auth/sign-in";
pub const AUTH_ME: &str = "/api/v1/admin/auth/me";

/// Listado paginado: `{ data: { <key>: [...], pagination } }`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListEndpoint {
    pub path: &'static str,
    pub key: &'static str,
}

/// Recurso individual: `{ data: { <key>: {...} } }` en GET, `{ data: {...} }` en POST/PUT
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailEndpoint {
    pub path: &'static str,
    pub key: &'static str,
}

impl DetailEndpoint {
    pub fn item_path(&self, id: EntityId) -> String {
        format!("{}/{}", self.path, id)
    }
}

pub const PRODUCTS: ListEndpoint = ListEndpoint { path: "/api/v1/admin/products", key: "products" };
pub const PRODUCT: DetailEndpoint = DetailEndpoint { path: "/api/v1/admin/products", key: "product" };

pub const DISCOUNT_CODES: ListEndpoint = ListEndpoint { path: "/api/v1/admin/discount-codes", key: "discountCodes" };
pub const DISCOUNT_CODE: DetailEndpoint = DetailEndpoint { path: "/api/v1/admin/discount-codes", key: "discountCode" };

pub const ORDERS_ALL: ListEndpoint = ListEndpoint { path: "/api/v1/admin/orders", key: "orders" };
pub const ORDERS_SHIPPED: ListEndpoint = ListEndpoint { path: "/api/v1/admin/orders/shipped", key: "orders" };
pub const ORDERS_TO_SHIP: ListEndpoint = ListEndpoint { path: "/api/v1/admin/orders/to-ship", key: "orders" };
pub const ORDER: DetailEndpoint = DetailEndpoint { path: "/api/v1/admin/orders", key: "order" };

pub const USERS: ListEndpoint = ListEndpoint { path: "/api/v1/admin/users", key: "users" };
pub const USER: DetailEndpoint = DetailEndpoint { path: "/api/v1/admin/users", key: "user" };

pub const ADMINS: ListEndpoint = ListEndpoint { path: "/api/v1/admin/admins", key: "admins" };
pub const ADMIN: DetailEndpoint = DetailEndpoint { path: "/api/v1/admin/admins", key: "admin" };

pub fn order_ship(id: EntityId) -> String {
    format!("{}/orders/ship/{}", API_PREFIX, id)
}

pub fn order_cancel(id: EntityId) -> String {
    format!("{}/orders/cancel/{}", API_PREFIX, id)
}

pub fn product_change_image(id: EntityId) -> String {
    format!("{}/products/{}/change-image", API_PREFIX, id)
}

pub fn product_add_gallery_image(id: EntityId) -> String {
    format!("{}/products/{}/add-gallery-image", API_PREFIX, id)
}

pub fn product_delete_gallery_image(id: EntityId, image_id: EntityId) -> String {
    format!("{}/products/{}/delete-gallery-image/{}", API_PREFIX, id, image_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_paths_match_api_contract() {
        assert_eq!(order_ship(4), "/api/v1/admin/orders/ship/4");
        assert_eq!(order_cancel(4), "/api/v1/admin/orders/cancel/4");
        assert_eq!(
            product_delete_gallery_image(9, 2),
            "/api/v1/admin/products/9/delete-gallery-image/2"
        );
        assert_eq!(PRODUCT.item_path(9), "/api/v1/admin/products/9");
    }
}
