// ============================================================================
// DETAIL STATE - Controlador de una vista de detalle con acciones
// ============================================================================
// Las acciones (delete, ship, cancel, imágenes) bloquean su disparador
// mientras están en curso. Un fallo se muestra junto a la acción y deja
// los datos como estaban.
// ============================================================================

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ApiError;
use crate::models::EntityId;
use crate::state::view_state::{Applied, FetchTicket, Sequencer, ViewState};

/// Acción disparable desde una vista de detalle
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActionKind {
    Delete,
    Ship,
    Cancel,
    ChangeImage,
    AddGalleryImage,
    DeleteGalleryImage(EntityId),
}

impl ActionKind {
    fn is_gallery_delete(&self) -> bool {
        matches!(self, ActionKind::DeleteGalleryImage(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailController<T> {
    /// `None` dentro de Ready = la carga falló y la vista quedó vacía
    pub state: ViewState<Option<T>>,
    sequencer: Sequencer,
    pending: BTreeSet<ActionKind>,
    action_errors: BTreeMap<ActionKind, String>,
    notice: Option<String>,
}

impl<T> Default for DetailController<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Loading,
            sequencer: Sequencer::default(),
            pending: BTreeSet::new(),
            action_errors: BTreeMap::new(),
            notice: None,
        }
    }
}

impl<T> DetailController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data().and_then(Option::as_ref)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Carga inicial o re-fetch tras una acción (los datos siguen visibles)
    pub fn begin_load(&mut self) -> FetchTicket {
        self.state.into_refreshing();
        self.sequencer.issue(None)
    }

    pub fn apply(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> Applied {
        if !self.sequencer.is_latest(&ticket) {
            log::debug!("⏭️ Detalle descartado (hay un fetch más reciente)");
            return Applied::Superseded;
        }

        match result {
            Ok(data) => {
                self.notice = None;
                self.action_errors.clear();
                self.state = ViewState::Ready(Some(data));
                Applied::Updated
            }
            Err(ApiError::Cancelled) => Applied::Cancelled,
            Err(e) => {
                log::error!("❌ Error cargando el detalle: {}", e);
                self.notice = Some(e.user_message());
                if self.state.is_loading() {
                    self.state = ViewState::Ready(None);
                } else {
                    self.state.settle();
                }
                Applied::Degraded
            }
        }
    }

    // ------------------------------------------------------------------------
    // Acciones
    // ------------------------------------------------------------------------

    pub fn is_pending(&self, kind: ActionKind) -> bool {
        self.pending.contains(&kind)
    }

    /// Alguna imagen de la galería se está borrando
    pub fn is_deleting_gallery_image(&self) -> bool {
        self.pending.iter().any(ActionKind::is_gallery_delete)
    }

    /// Marca la acción como en curso. `false` si ya lo estaba (doble click).
    pub fn begin_action(&mut self, kind: ActionKind) -> bool {
        if !self.pending.insert(kind) {
            log::warn!("⚠️ {:?} ya está en curso", kind);
            return false;
        }
        self.action_errors.remove(&kind);
        true
    }

    pub fn finish_action(&mut self, kind: ActionKind) {
        self.pending.remove(&kind);
        self.action_errors.remove(&kind);
        self.settle_if_clear();
    }

    pub fn fail_action(&mut self, kind: ActionKind, error: &ApiError) {
        self.pending.remove(&kind);
        if error.is_cancelled() {
            return;
        }
        log::error!("❌ {:?} falló: {}", kind, error);
        let message = error.user_message();
        self.action_errors.insert(kind, message.clone());
        self.state.fail(message);
    }

    pub fn action_error(&self, kind: ActionKind) -> Option<&str> {
        self.action_errors.get(&kind).map(String::as_str)
    }

    /// Al cerrar el modal el error desaparece; sin errores la vista vuelve a Ready
    pub fn dismiss_error(&mut self, kind: ActionKind) {
        self.action_errors.remove(&kind);
        self.settle_if_clear();
    }

    /// Cerrar el modal de galería descarta los errores de todas sus imágenes
    pub fn dismiss_gallery_errors(&mut self) {
        self.action_errors.retain(|kind, _| !kind.is_gallery_delete());
        self.settle_if_clear();
    }

    fn settle_if_clear(&mut self) {
        if self.action_errors.is_empty() && self.state.error_message().is_some() {
            self.state.settle();
        }
    }

    /// Sustituye parte de los datos por el valor devuelto por el servidor
    pub fn update(&mut self, patch: impl FnOnce(&mut T)) {
        if let Some(Some(data)) = self.state.data_mut() {
            patch(data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Order {
        status: &'static str,
        gallery: Vec<u64>,
    }

    fn loaded(order: Order) -> DetailController<Order> {
        let mut detail = DetailController::new();
        let ticket = detail.begin_load();
        detail.apply(ticket, Ok(order));
        detail
    }

    fn order(status: &'static str) -> Order {
        Order {
            status,
            gallery: vec![1, 2, 3],
        }
    }

    #[test]
    fn failed_initial_load_renders_empty() {
        let mut detail: DetailController<Order> = DetailController::new();
        let ticket = detail.begin_load();
        detail.apply(ticket, Err(ApiError::http(404, "Order not found")));

        assert_eq!(detail.state, ViewState::Ready(None));
        assert_eq!(detail.data(), None);
        assert_eq!(detail.notice(), Some("Order not found"));
    }

    #[test]
    fn ship_failure_keeps_status_and_shows_message() {
        let mut detail = loaded(order("preparing_for_shipment"));

        assert!(detail.begin_action(ActionKind::Ship));
        assert!(detail.is_pending(ActionKind::Ship));
        detail.fail_action(ActionKind::Ship, &ApiError::http(400, "Tracking number required"));

        assert!(!detail.is_pending(ActionKind::Ship));
        assert_eq!(detail.action_error(ActionKind::Ship), Some("Tracking number required"));
        assert_eq!(detail.data().map(|o| o.status), Some("preparing_for_shipment"));
        assert_eq!(detail.state.error_message(), Some("Tracking number required"));
    }

    #[test]
    fn refetch_after_error_returns_to_ready() {
        let mut detail = loaded(order("preparing_for_shipment"));
        detail.begin_action(ActionKind::Ship);
        detail.fail_action(ActionKind::Ship, &ApiError::http(400, "Tracking number required"));

        let ticket = detail.begin_load();
        assert!(detail.state.is_fetching());
        detail.apply(ticket, Ok(order("shipped")));

        assert_eq!(detail.state, ViewState::Ready(Some(order("shipped"))));
        assert_eq!(detail.action_error(ActionKind::Ship), None);
    }

    #[test]
    fn duplicate_trigger_is_refused_while_pending() {
        let mut detail = loaded(order("preparing_for_shipment"));
        assert!(detail.begin_action(ActionKind::Cancel));
        assert!(!detail.begin_action(ActionKind::Cancel));
        detail.finish_action(ActionKind::Cancel);
        assert!(detail.begin_action(ActionKind::Cancel));
    }

    #[test]
    fn gallery_is_replaced_wholesale() {
        let mut detail = loaded(order("shipped"));
        let kind = ActionKind::DeleteGalleryImage(2);
        detail.begin_action(kind);
        assert!(detail.is_deleting_gallery_image());

        // El servidor devuelve su propia lista, no la local menos el borrado
        detail.update(|o| o.gallery = vec![1, 3, 7]);
        detail.finish_action(kind);

        assert_eq!(detail.data().map(|o| o.gallery.clone()), Some(vec![1, 3, 7]));
        assert!(!detail.is_deleting_gallery_image());
    }

    #[test]
    fn gallery_errors_are_kept_per_image() {
        let mut detail = loaded(order("shipped"));
        detail.begin_action(ActionKind::DeleteGalleryImage(2));
        detail.fail_action(ActionKind::DeleteGalleryImage(2), &ApiError::http(404, "Image not found"));

        assert_eq!(
            detail.action_error(ActionKind::DeleteGalleryImage(2)),
            Some("Image not found")
        );
        assert_eq!(detail.action_error(ActionKind::DeleteGalleryImage(9)), None);

        detail.dismiss_gallery_errors();
        assert_eq!(detail.action_error(ActionKind::DeleteGalleryImage(2)), None);
        assert_eq!(detail.state, ViewState::Ready(Some(order("shipped"))));
    }

    #[test]
    fn sibling_delete_success_keeps_failed_image_error() {
        let mut detail = loaded(order("shipped"));
        assert!(detail.begin_action(ActionKind::DeleteGalleryImage(2)));
        assert!(detail.begin_action(ActionKind::DeleteGalleryImage(3)));

        detail.fail_action(ActionKind::DeleteGalleryImage(2), &ApiError::http(500, "Image in use"));
        detail.finish_action(ActionKind::DeleteGalleryImage(3));

        assert_eq!(
            detail.action_error(ActionKind::DeleteGalleryImage(2)),
            Some("Image in use")
        );
        assert_eq!(detail.state.error_message(), Some("Image in use"));
        assert!(!detail.is_deleting_gallery_image());
    }

    #[test]
    fn retrying_an_image_clears_only_its_error() {
        let mut detail = loaded(order("shipped"));
        detail.begin_action(ActionKind::DeleteGalleryImage(2));
        detail.fail_action(ActionKind::DeleteGalleryImage(2), &ApiError::http(500, "Image in use"));
        detail.begin_action(ActionKind::DeleteGalleryImage(3));
        detail.fail_action(ActionKind::DeleteGalleryImage(3), &ApiError::http(404, "Image not found"));

        detail.begin_action(ActionKind::DeleteGalleryImage(2));
        detail.finish_action(ActionKind::DeleteGalleryImage(2));

        assert_eq!(detail.action_error(ActionKind::DeleteGalleryImage(2)), None);
        assert_eq!(
            detail.action_error(ActionKind::DeleteGalleryImage(3)),
            Some("Image not found")
        );
        assert!(detail.state.error_message().is_some());
    }

    #[test]
    fn cancelled_action_is_not_an_error() {
        let mut detail = loaded(order("shipped"));
        detail.begin_action(ActionKind::Delete);
        detail.fail_action(ActionKind::Delete, &ApiError::Cancelled);
        assert_eq!(detail.action_error(ActionKind::Delete), None);
        assert_eq!(detail.state, ViewState::Ready(Some(order("shipped"))));
    }
}
