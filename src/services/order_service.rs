use crate::error::ApiError;
use crate::models::{EntityId, ShipRequest};
use crate::services::api_client::ApiClient;
use crate::services::endpoints;

/// Marca el pedido como enviado con transportista y número de seguimiento
pub async fn ship_order(api: &ApiClient, order_id: EntityId, request: &ShipRequest) -> Result<(), ApiError> {
    log::info!("🚚 Enviando pedido {} con {}", order_id, request.carrier);
    api.post_action(endpoints::order_ship(order_id), Some(request)).await
}

pub async fn cancel_order(api: &ApiClient, order_id: EntityId) -> Result<(), ApiError> {
    log::info!("🛑 Cancelando pedido {}", order_id);
    api.post_action::<()>(endpoints::order_cancel(order_id), None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{client_with, FakeTransport};
    use crate::utils::storage::MemoryCredentials;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn ship_posts_carrier_and_tracking_number() {
        let transport = FakeTransport::new();
        transport.respond(200, json!({"data": {"id": 4}}));
        let api = client_with(&transport, Rc::new(MemoryCredentials::with("tok")));

        let request = ShipRequest {
            carrier: "fmx".into(),
            tracking_number: "FMX123".into(),
        };
        block_on(ship_order(&api, 4, &request)).unwrap();

        let sent = transport.last_request().unwrap();
        assert!(sent.url.ends_with("/api/v1/admin/orders/ship/4"));
        assert_eq!(
            sent.body.as_json(),
            Some(r#"{"carrier":"fmx","trackingNumber":"FMX123"}"#)
        );
    }

    #[test]
    fn cancel_posts_without_body() {
        let transport = FakeTransport::new();
        transport.respond_text(204, "");
        let api = client_with(&transport, Rc::new(MemoryCredentials::with("tok")));

        block_on(cancel_order(&api, 4)).unwrap();
        let sent = transport.last_request().unwrap();
        assert!(sent.url.ends_with("/api/v1/admin/orders/cancel/4"));
        assert_eq!(sent.body.as_json(), None);
    }
}
