// Acciones propias del producto: imagen principal y galería

use crate::error::ApiError;
use crate::models::{EntityId, GalleryImage, GalleryUpdate};
use crate::services::api_client::ApiClient;
use crate::services::cancellation::CancelToken;
use crate::services::endpoints;
use crate::services::http::ApiRequest;

pub async fn change_image(api: &ApiClient, product_id: EntityId, file: web_sys::File) -> Result<(), ApiError> {
    log::info!("🖼️ Cambiando imagen del producto {}", product_id);
    api.upload_file::<serde_json::Value>(endpoints::product_change_image(product_id), file)
        .await
        .map(|_| ())
}

/// Devuelve la galería completa tal como queda en el servidor
pub async fn add_gallery_image(
    api: &ApiClient,
    product_id: EntityId,
    file: web_sys::File,
) -> Result<Vec<GalleryImage>, ApiError> {
    log::info!("🖼️ Añadiendo imagen a la galería del producto {}", product_id);
    api.upload_file::<GalleryUpdate>(endpoints::product_add_gallery_image(product_id), file)
        .await
        .map(|update| update.gallery_images)
}

pub async fn delete_gallery_image(
    api: &ApiClient,
    product_id: EntityId,
    image_id: EntityId,
) -> Result<Vec<GalleryImage>, ApiError> {
    log::info!("🗑️ Borrando imagen {} de la galería del producto {}", image_id, product_id);
    let request = ApiRequest::post(endpoints::product_delete_gallery_image(product_id, image_id));
    api.request_data::<GalleryUpdate>(request, &CancelToken::none())
        .await
        .map(|update| update.gallery_images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::Method;
    use crate::services::testing::{client_with, FakeTransport};
    use crate::utils::storage::MemoryCredentials;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn delete_gallery_image_returns_server_gallery() {
        let transport = FakeTransport::new();
        transport.respond(200, json!({"data": {"id": 9, "GalleryImages": [
            {"id": 1, "imageFileName": "a.png"},
            {"id": 3, "imageFileName": "c.png"}
        ]}}));
        let api = client_with(&transport, Rc::new(MemoryCredentials::with("tok")));

        let gallery = block_on(delete_gallery_image(&api, 9, 2)).unwrap();
        assert_eq!(gallery.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 3]);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert!(sent.url.ends_with("/api/v1/admin/products/9/delete-gallery-image/2"));
    }

    #[test]
    fn delete_gallery_image_failure_keeps_message() {
        let transport = FakeTransport::new();
        transport.respond(404, json!({"message": "Image not found"}));
        let api = client_with(&transport, Rc::new(MemoryCredentials::default()));

        let err = block_on(delete_gallery_image(&api, 9, 2)).unwrap_err();
        assert_eq!(err.user_message(), "Image not found");
    }
}
