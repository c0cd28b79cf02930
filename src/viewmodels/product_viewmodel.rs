// ============================================================================
// PRODUCT VIEWMODEL - Imagen principal y galería
// ============================================================================

use crate::models::{EntityId, ProductDetail};
use crate::services::product_service;
use crate::services::CancelToken;
use crate::state::{ActionKind, DetailController, ReactiveState};
use crate::viewmodels::resource_viewmodel::DetailViewModel;

pub type ProductDetailState = ReactiveState<DetailController<ProductDetail>>;

/// Cambia la imagen principal y vuelve a pedir el producto
pub async fn change_image(
    vm: &DetailViewModel,
    detail: &ProductDetailState,
    file: web_sys::File,
    cancel: &CancelToken,
) -> bool {
    let upload = product_service::change_image(vm.api(), vm.id(), file);
    vm.perform_and_reload(detail, ActionKind::ChangeImage, upload, cancel)
        .await
}

/// La respuesta trae la galería completa: se sustituye tal cual
pub async fn add_gallery_image(vm: &DetailViewModel, detail: &ProductDetailState, file: web_sys::File) -> bool {
    let upload = product_service::add_gallery_image(vm.api(), vm.id(), file);
    match vm.perform(detail, ActionKind::AddGalleryImage, upload).await {
        Some(gallery) => {
            detail.update(|detail| detail.update(|product| product.gallery_images = gallery));
            true
        }
        None => false,
    }
}

pub async fn delete_gallery_image(vm: &DetailViewModel, detail: &ProductDetailState, image_id: EntityId) -> bool {
    let call = product_service::delete_gallery_image(vm.api(), vm.id(), image_id);
    match vm
        .perform(detail, ActionKind::DeleteGalleryImage(image_id), call)
        .await
    {
        Some(gallery) => {
            detail.update(|detail| detail.update(|product| product.gallery_images = gallery));
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::endpoints::PRODUCT;
    use crate::services::testing::{client_with, FakeTransport};
    use crate::utils::storage::MemoryCredentials;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn loaded_product(transport: &FakeTransport) -> (DetailViewModel, ProductDetailState) {
        transport.respond(200, json!({"data": {"product": {
            "id": 9, "name": "Mug", "regularPrice": 12, "isAvailable": true, "isPublic": true,
            "GalleryImages": [
                {"id": 1, "imageFileName": "a.png"},
                {"id": 2, "imageFileName": "b.png"},
                {"id": 3, "imageFileName": "c.png"}
            ]
        }}}));
        let api = client_with(transport, Rc::new(MemoryCredentials::with("tok")));
        let vm = DetailViewModel::new(api, PRODUCT, 9);
        let detail = ReactiveState::new(DetailController::new());
        block_on(vm.load(&detail, &CancelToken::none()));
        (vm, detail)
    }

    #[test]
    fn deleted_image_gallery_matches_server_array() {
        let transport = FakeTransport::new();
        let (vm, detail) = loaded_product(&transport);
        // El servidor devuelve una galería que no es "local menos la borrada"
        transport.respond(200, json!({"data": {"GalleryImages": [
            {"id": 3, "imageFileName": "c.png"},
            {"id": 4, "imageFileName": "d.png"}
        ]}}));

        assert!(block_on(delete_gallery_image(&vm, &detail, 2)));

        let detail = detail.borrow();
        let ids: Vec<_> = detail
            .data()
            .map(|p| p.gallery_images.iter().map(|g| g.id).collect())
            .unwrap_or_default();
        assert_eq!(ids, vec![3, 4]);
        assert!(!detail.is_deleting_gallery_image());
        // Sin re-fetch: GET inicial + POST
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn failed_gallery_delete_keeps_gallery() {
        let transport = FakeTransport::new();
        let (vm, detail) = loaded_product(&transport);
        transport.respond(404, json!({"message": "Image not found"}));

        assert!(!block_on(delete_gallery_image(&vm, &detail, 2)));

        let detail = detail.borrow();
        assert_eq!(detail.data().map(|p| p.gallery_images.len()), Some(3));
        assert_eq!(
            detail.action_error(ActionKind::DeleteGalleryImage(2)),
            Some("Image not found")
        );
    }
}
