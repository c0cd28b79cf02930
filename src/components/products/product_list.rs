use yew::prelude::*;

use crate::components::shared::{resource_table, BoolTag, PageHeader, RowEditButton, TableRow};
use crate::hooks::{use_navigator, use_resource_list};
use crate::models::{EntityId, ProductRow};
use crate::routes::Route;
use crate::services::endpoints::PRODUCTS;
use crate::utils::format_currency;

const COLUMNS: [&str; 7] = ["ID", "Name", "Regular price", "Sale price", "Available", "Public", ""];

#[function_component(ProductList)]
pub fn product_list() -> Html {
    let handle = use_resource_list::<ProductRow>(PRODUCTS);
    let navigate = use_navigator();

    let on_add = {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(Route::ProductAdd);
        })
    };
    let on_row_click = {
        let navigate = navigate.clone();
        Callback::from(move |id: EntityId| navigate.emit(Route::ProductDetails(id)))
    };

    let to_row = |product: &ProductRow| {
        let id = product.id;
        let on_edit = {
            let navigate = navigate.clone();
            Callback::from(move |_: ()| navigate.emit(Route::ProductEdit(id)))
        };
        TableRow {
            id,
            cells: vec![
                html! { { id } },
                html! { { product.name.clone() } },
                html! { { format_currency(Some(product.regular_price)) } },
                html! { { format_currency(product.sale_price) } },
                html! { <BoolTag value={product.is_available} /> },
                html! { <BoolTag value={product.is_public} /> },
                html! { <RowEditButton on_click={on_edit} /> },
            ],
        }
    };

    let list = handle.list.borrow();
    html! {
        <>
            <PageHeader title="Products">
                <button type="button" class="button is-link" onclick={on_add}>{ "Add new" }</button>
            </PageHeader>
            { resource_table(&list, COLUMNS.to_vec(), to_row, on_row_click, handle.change_page.clone()) }
        </>
    }
}
