// ============================================================================
// ORDER VIEWMODEL - Ship / Cancel con re-fetch del pedido
// ============================================================================

use crate::models::{OrderDetail, ShipRequest};
use crate::services::order_service;
use crate::services::CancelToken;
use crate::state::{ActionKind, DetailController, ReactiveState};
use crate::viewmodels::resource_viewmodel::DetailViewModel;

pub type OrderDetailState = ReactiveState<DetailController<OrderDetail>>;

/// `true` → el modal se cierra; en error sigue abierto con el mensaje
pub async fn ship(vm: &DetailViewModel, detail: &OrderDetailState, request: ShipRequest, cancel: &CancelToken) -> bool {
    let call = order_service::ship_order(vm.api(), vm.id(), &request);
    vm.perform_and_reload(detail, ActionKind::Ship, call, cancel).await
}

pub async fn cancel(vm: &DetailViewModel, detail: &OrderDetailState, cancel: &CancelToken) -> bool {
    let call = order_service::cancel_order(vm.api(), vm.id());
    vm.perform_and_reload(detail, ActionKind::Cancel, call, cancel).await
}
