// ============================================================================
// ROUTES - Mapa de rutas y control de acceso por sesión
// ============================================================================
// Sin sesión solo existe "/" (sign in); con sesión "/" deja de existir y
// cualquier ruta desconocida lleva a /products.
// ============================================================================

use crate::models::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Products,
    ProductAdd,
    ProductDetails(EntityId),
    ProductEdit(EntityId),
    DiscountCodes,
    DiscountCodeAdd,
    DiscountCodeDetails(EntityId),
    DiscountCodeEdit(EntityId),
    OrdersAll,
    OrdersShipped,
    OrdersToShip,
    OrderDetails(EntityId),
    OrderEdit(EntityId),
    Users,
    UserDetails(EntityId),
    Admins,
    AdminAdd,
    AdminDetails(EntityId),
    AdminEdit(EntityId),
}

/// Destino por defecto de una sesión autenticada
pub const LANDING: Route = Route::Products;

impl Route {
    /// Ruta exacta; `None` si no coincide con ninguna
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::SignIn,

            ["products"] => Route::Products,
            ["products", "add"] => Route::ProductAdd,
            ["products", id] => Route::ProductDetails(parse_id(id)?),
            ["products", id, "edit"] => Route::ProductEdit(parse_id(id)?),

            ["discount-codes"] => Route::DiscountCodes,
            ["discount-codes", "add"] => Route::DiscountCodeAdd,
            ["discount-codes", id] => Route::DiscountCodeDetails(parse_id(id)?),
            ["discount-codes", id, "edit"] => Route::DiscountCodeEdit(parse_id(id)?),

            ["orders", "all"] => Route::OrdersAll,
            ["orders", "shipped"] => Route::OrdersShipped,
            ["orders", "to-ship"] => Route::OrdersToShip,
            ["orders", id] => Route::OrderDetails(parse_id(id)?),
            ["orders", id, "edit"] => Route::OrderEdit(parse_id(id)?),

            ["users"] => Route::Users,
            ["users", id] => Route::UserDetails(parse_id(id)?),

            ["admins"] => Route::Admins,
            ["admins", "add"] => Route::AdminAdd,
            ["admins", id] => Route::AdminDetails(parse_id(id)?),
            ["admins", id, "edit"] => Route::AdminEdit(parse_id(id)?),

            _ => return None,
        };
        Some(route)
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::SignIn => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::ProductAdd => "/products/add".to_string(),
            Route::ProductDetails(id) => format!("/products/{}", id),
            Route::ProductEdit(id) => format!("/products/{}/edit", id),
            Route::DiscountCodes => "/discount-codes".to_string(),
            Route::DiscountCodeAdd => "/discount-codes/add".to_string(),
            Route::DiscountCodeDetails(id) => format!("/discount-codes/{}", id),
            Route::DiscountCodeEdit(id) => format!("/discount-codes/{}/edit", id),
            Route::OrdersAll => "/orders/all".to_string(),
            Route::OrdersShipped => "/orders/shipped".to_string(),
            Route::OrdersToShip => "/orders/to-ship".to_string(),
            Route::OrderDetails(id) => format!("/orders/{}", id),
            Route::OrderEdit(id) => format!("/orders/{}/edit", id),
            Route::Users => "/users".to_string(),
            Route::UserDetails(id) => format!("/users/{}", id),
            Route::Admins => "/admins".to_string(),
            Route::AdminAdd => "/admins/add".to_string(),
            Route::AdminDetails(id) => format!("/admins/{}", id),
            Route::AdminEdit(id) => format!("/admins/{}/edit", id),
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Route::SignIn)
    }
}

fn parse_id(raw: &str) -> Option<EntityId> {
    raw.parse().ok()
}

/// Resultado del control de acceso para una ruta
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render(Route),
    /// Reemplazar la URL actual por esta ruta
    Redirect(Route),
}

impl GateDecision {
    pub fn route(&self) -> Route {
        match self {
            GateDecision::Render(route) | GateDecision::Redirect(route) => *route,
        }
    }
}

/// Decide qué se renderiza para `path` según haya sesión o no
pub fn gate(path: &str, authenticated: bool) -> GateDecision {
    let route = Route::parse(path);
    match (authenticated, route) {
        (false, Some(Route::SignIn)) => GateDecision::Render(Route::SignIn),
        (false, _) => GateDecision::Redirect(Route::SignIn),
        (true, Some(route)) if !route.is_public() => GateDecision::Render(route),
        (true, _) => GateDecision::Redirect(LANDING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefers_literal_segments_over_ids() {
        assert_eq!(Route::parse("/products/add"), Some(Route::ProductAdd));
        assert_eq!(Route::parse("/products/9"), Some(Route::ProductDetails(9)));
        assert_eq!(Route::parse("/products/9/edit"), Some(Route::ProductEdit(9)));
        assert_eq!(Route::parse("/orders/to-ship"), Some(Route::OrdersToShip));
        assert_eq!(Route::parse("/orders/4/"), Some(Route::OrderDetails(4)));
        assert_eq!(Route::parse("/users/3?tab=x"), Some(Route::UserDetails(3)));
    }

    #[test]
    fn unknown_or_malformed_paths_do_not_match() {
        assert_eq!(Route::parse("/products/abc"), None);
        assert_eq!(Route::parse("/users/add"), None);
        assert_eq!(Route::parse("/orders"), None);
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn every_route_round_trips_through_its_path() {
        let routes = [
            Route::SignIn,
            Route::ProductEdit(1),
            Route::DiscountCodeDetails(2),
            Route::OrdersShipped,
            Route::OrderEdit(3),
            Route::UserDetails(4),
            Route::AdminAdd,
            Route::AdminEdit(5),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn anonymous_visitors_only_reach_sign_in() {
        assert_eq!(gate("/", false), GateDecision::Render(Route::SignIn));
        assert_eq!(gate("/orders/all", false), GateDecision::Redirect(Route::SignIn));
        assert_eq!(gate("/nowhere", false), GateDecision::Redirect(Route::SignIn));
    }

    #[test]
    fn signed_in_admins_never_see_sign_in() {
        assert_eq!(gate("/", true), GateDecision::Redirect(Route::Products));
        assert_eq!(gate("/nowhere", true), GateDecision::Redirect(Route::Products));
        assert_eq!(
            gate("/orders/4/edit", true),
            GateDecision::Render(Route::OrderEdit(4))
        );
    }
}
