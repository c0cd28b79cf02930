use yew::prelude::*;

use crate::components::shared::{resource_table, BoolTag, PageHeader, RowEditButton, TableRow};
use crate::hooks::{use_navigator, use_resource_list};
use crate::models::{DiscountCode, EntityId};
use crate::routes::Route;
use crate::services::endpoints::DISCOUNT_CODES;

const COLUMNS: [&str; 5] = ["ID", "Code", "Discount", "Active", ""];

#[function_component(DiscountCodeList)]
pub fn discount_code_list() -> Html {
    let handle = use_resource_list::<DiscountCode>(DISCOUNT_CODES);
    let navigate = use_navigator();

    let on_add = {
        let navigate = navigate.clone();
        Callback::from(move |_e: MouseEvent| navigate.emit(Route::DiscountCodeAdd))
    };
    let on_row_click = {
        let navigate = navigate.clone();
        Callback::from(move |id: EntityId| navigate.emit(Route::DiscountCodeDetails(id)))
    };
    let to_row = |discount_code: &DiscountCode| {
        let id = discount_code.id;
        let on_edit = {
            let navigate = navigate.clone();
            Callback::from(move |_: ()| navigate.emit(Route::DiscountCodeEdit(id)))
        };
        TableRow {
            id,
            cells: vec![
                html! { { id } },
                html! { <code>{ discount_code.code.clone() }</code> },
                html! { { format!("{}%", discount_code.discount_percentage) } },
                html! { <BoolTag value={discount_code.is_active} /> },
                html! { <RowEditButton on_click={on_edit} /> },
            ],
        }
    };

    let list = handle.list.borrow();
    html! {
        <>
            <PageHeader title="Discount Codes">
                <button type="button" class="button is-link" onclick={on_add}>{ "Add new" }</button>
            </PageHeader>
            { resource_table(&list, COLUMNS.to_vec(), to_row, on_row_click, handle.change_page.clone()) }
        </>
    }
}
