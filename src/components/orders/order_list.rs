use yew::prelude::*;

use crate::components::orders::status_tag;
use crate::components::shared::{resource_table, PageHeader, TableRow};
use crate::hooks::{use_navigator, use_resource_list};
use crate::models::{EntityId, OrderRow, OrderStatus};
use crate::routes::Route;
use crate::services::endpoints::{ListEndpoint, ORDERS_ALL, ORDERS_SHIPPED, ORDERS_TO_SHIP};
use crate::utils::{format_currency, format_date};

/// Las tres tablas de pedidos comparten vista
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderFilter {
    All,
    Shipped,
    ToShip,
}

impl OrderFilter {
    fn endpoint(self) -> ListEndpoint {
        match self {
            Self::All => ORDERS_ALL,
            Self::Shipped => ORDERS_SHIPPED,
            Self::ToShip => ORDERS_TO_SHIP,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::All => "All Orders",
            Self::Shipped => "Shipped Orders",
            Self::ToShip => "Orders To Ship",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct OrderListProps {
    pub filter: OrderFilter,
}

const COLUMNS: [&str; 6] = ["ID", "Name", "Product", "Total", "Status", "Placed at"];

#[function_component(OrderList)]
pub fn order_list(props: &OrderListProps) -> Html {
    let handle = use_resource_list::<OrderRow>(props.filter.endpoint());
    let navigate = use_navigator();

    let on_row_click = Callback::from(move |id: EntityId| navigate.emit(Route::OrderDetails(id)));
    let to_row = |order: &OrderRow| TableRow {
        id: order.id,
        cells: vec![
            html! { { order.id } },
            html! { { order.name.clone() } },
            html! { { order.product_name.clone().unwrap_or_default() } },
            html! { { format_currency(Some(order.total)) } },
            status_tag(OrderStatus::parse(&order.status)),
            html! { { format_date(order.order_placed_at.as_deref()) } },
        ],
    };

    let list = handle.list.borrow();
    html! {
        <>
            <PageHeader title={props.filter.title()} />
            { resource_table(&list, COLUMNS.to_vec(), to_row, on_row_click, handle.change_page.clone()) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_filter_reads_its_own_collection() {
        assert_eq!(OrderFilter::All.endpoint().path, "/api/v1/admin/orders");
        assert_eq!(OrderFilter::Shipped.endpoint().path, "/api/v1/admin/orders/shipped");
        assert_eq!(OrderFilter::ToShip.endpoint().path, "/api/v1/admin/orders/to-ship");
        assert_eq!(OrderFilter::ToShip.endpoint().key, "orders");
    }
}
