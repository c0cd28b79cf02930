// ============================================================================
// LIST STATE - Controlador de una vista de listado paginado
// ============================================================================

use crate::error::ApiError;
use crate::models::Page;
use crate::state::view_state::{Applied, FetchTicket, Sequencer, ViewState};

#[derive(Clone, Debug, PartialEq)]
pub struct ListController<T> {
    pub state: ViewState<Page<T>>,
    /// Valor del control de paginación (puede ir por delante de los datos)
    page: u32,
    /// Página de los datos que se están mostrando
    shown_page: u32,
    sequencer: Sequencer,
    /// Aviso no bloqueante tras un fetch fallido
    notice: Option<String>,
}

impl<T> Default for ListController<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Loading,
            page: 1,
            shown_page: 1,
            sequencer: Sequencer::default(),
            notice: None,
        }
    }
}

impl<T> ListController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.state
            .data()
            .map(|page| page.pagination.total_pages)
            .unwrap_or(0)
    }

    pub fn items(&self) -> &[T] {
        self.state
            .data()
            .map(|page| page.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Carga al montar la vista
    pub fn begin_initial(&mut self) -> FetchTicket {
        self.state = ViewState::Loading;
        self.sequencer.issue(None)
    }

    /// Cambio de página: los datos actuales siguen visibles mientras tanto
    pub fn begin_page(&mut self, page: u32) -> FetchTicket {
        let page = page.max(1);
        self.page = page;
        self.state.into_refreshing();
        self.sequencer.issue(Some(page))
    }

    /// Entrega el resultado de un fetch emitido con `ticket`
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<Page<T>, ApiError>) -> Applied {
        if !self.sequencer.is_latest(&ticket) {
            log::debug!("⏭️ Resultado de la página {:?} descartado (hay uno más reciente)", ticket.page);
            return Applied::Superseded;
        }

        match result {
            Ok(data) => {
                let current = data.pagination.current_page.max(1);
                self.page = current;
                self.shown_page = current;
                self.notice = None;
                self.state = ViewState::Ready(data);
                Applied::Updated
            }
            Err(ApiError::Cancelled) => Applied::Cancelled,
            Err(e) => {
                log::error!("❌ Error cargando el listado: {}", e);
                self.notice = Some(e.user_message());
                match ticket.page {
                    // Cambio de página fallido: el control vuelve atrás y los datos no cambian
                    Some(_) if self.state.data().is_some() => {
                        self.page = self.shown_page;
                        self.state.settle();
                    }
                    _ => {
                        self.page = 1;
                        self.shown_page = 1;
                        self.state = ViewState::Ready(Page::empty());
                    }
                }
                Applied::Degraded
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pagination;

    fn page(names: &[&str], current: u32, total_pages: u32, total_items: u64) -> Page<String> {
        Page {
            items: names.iter().map(|n| n.to_string()).collect(),
            pagination: Pagination {
                current_page: current,
                current_page_size: 25,
                total_items,
                total_pages,
            },
        }
    }

    #[test]
    fn initial_load_becomes_ready() {
        let mut list = ListController::new();
        assert!(list.state.is_loading());

        let ticket = list.begin_initial();
        assert_eq!(list.apply(ticket, Ok(page(&["Tee"], 1, 2, 30))), Applied::Updated);
        assert_eq!(list.items(), ["Tee".to_string()]);
        assert_eq!(list.page(), 1);
        assert_eq!(list.total_pages(), 2);
    }

    #[test]
    fn second_page_shows_mug() {
        let mut list = ListController::new();
        let ticket = list.begin_initial();
        list.apply(ticket, Ok(page(&["Tee"], 1, 2, 30)));

        let ticket = list.begin_page(2);
        assert!(matches!(list.state, ViewState::Refreshing(_)));
        assert_eq!(list.items(), ["Tee".to_string()]);

        list.apply(ticket, Ok(page(&["Mug"], 2, 2, 30)));
        assert_eq!(list.items(), ["Mug".to_string()]);
        assert_eq!(list.page(), 2);
        assert_eq!(list.total_pages(), 2);
    }

    #[test]
    fn initial_failure_degrades_to_empty_with_notice() {
        let mut list: ListController<String> = ListController::new();
        let ticket = list.begin_initial();
        let outcome = list.apply(ticket, Err(ApiError::http(500, "Database unavailable")));

        assert_eq!(outcome, Applied::Degraded);
        assert_eq!(list.state, ViewState::Ready(Page::empty()));
        assert_eq!(list.notice(), Some("Database unavailable"));
    }

    #[test]
    fn failed_page_change_reverts_control_and_keeps_data() {
        let mut list = ListController::new();
        let ticket = list.begin_initial();
        list.apply(ticket, Ok(page(&["Tee"], 1, 2, 30)));

        let ticket = list.begin_page(2);
        assert_eq!(list.page(), 2);
        list.apply(ticket, Err(ApiError::Network("offline".into())));

        assert_eq!(list.page(), 1);
        assert_eq!(list.state, ViewState::Ready(page(&["Tee"], 1, 2, 30)));
    }

    #[test]
    fn retrying_failed_page_matches_first_success() {
        let mut list = ListController::new();
        let ticket = list.begin_initial();
        list.apply(ticket, Ok(page(&["Tee"], 1, 2, 30)));

        let ticket = list.begin_page(2);
        list.apply(ticket, Err(ApiError::Network("offline".into())));
        let ticket = list.begin_page(2);
        list.apply(ticket, Ok(page(&["Mug"], 2, 2, 30)));

        let mut direct = ListController::new();
        let ticket = direct.begin_initial();
        direct.apply(ticket, Ok(page(&["Tee"], 1, 2, 30)));
        let ticket = direct.begin_page(2);
        direct.apply(ticket, Ok(page(&["Mug"], 2, 2, 30)));

        assert_eq!(list.state, direct.state);
        assert_eq!(list.page(), direct.page());
        assert_eq!(list.notice(), None);
    }

    #[test]
    fn out_of_order_results_keep_latest_page() {
        let mut list = ListController::new();
        let ticket = list.begin_initial();
        list.apply(ticket, Ok(page(&["Tee"], 1, 3, 60)));

        let slow = list.begin_page(2);
        let fast = list.begin_page(3);
        assert_eq!(list.apply(fast, Ok(page(&["Cap"], 3, 3, 60))), Applied::Updated);
        assert_eq!(list.apply(slow, Ok(page(&["Mug"], 2, 3, 60))), Applied::Superseded);

        assert_eq!(list.items(), ["Cap".to_string()]);
        assert_eq!(list.page(), 3);
    }

    #[test]
    fn cancelled_result_is_ignored() {
        let mut list: ListController<String> = ListController::new();
        let ticket = list.begin_initial();
        assert_eq!(list.apply(ticket, Err(ApiError::Cancelled)), Applied::Cancelled);
        assert!(list.state.is_loading());
        assert_eq!(list.notice(), None);
    }
}
