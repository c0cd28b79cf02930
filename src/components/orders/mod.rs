pub mod order_details;
pub mod order_form;
pub mod order_list;

pub use order_details::OrderDetails;
pub use order_form::OrderFormView;
pub use order_list::{OrderFilter, OrderList};

use yew::prelude::*;

use crate::models::order::CARRIERS;
use crate::models::OrderStatus;

/// Tag de estado del pedido
pub fn status_tag(status: OrderStatus) -> Html {
    html! { <span class={classes!("tag", status.tag_class())}>{ status.label() }</span> }
}

/// Opciones del select de transportista
pub fn carrier_options() -> Vec<(AttrValue, AttrValue)> {
    CARRIERS
        .iter()
        .map(|(value, name)| (AttrValue::Static(*value), AttrValue::Static(*name)))
        .collect()
}
