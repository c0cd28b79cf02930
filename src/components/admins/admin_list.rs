use yew::prelude::*;

use crate::components::shared::{resource_table, PageHeader, RowEditButton, TableRow};
use crate::hooks::{use_navigator, use_resource_list};
use crate::models::{Admin, EntityId};
use crate::routes::Route;
use crate::services::endpoints::ADMINS;

#[function_component(AdminList)]
pub fn admin_list() -> Html {
    let handle = use_resource_list::<Admin>(ADMINS);
    let navigate = use_navigator();

    let on_add = {
        let navigate = navigate.clone();
        Callback::from(move |_e: MouseEvent| navigate.emit(Route::AdminAdd))
    };
    let on_row_click = {
        let navigate = navigate.clone();
        Callback::from(move |id: EntityId| navigate.emit(Route::AdminDetails(id)))
    };
    let to_row = |admin: &Admin| {
        let id = admin.id;
        let on_edit = {
            let navigate = navigate.clone();
            Callback::from(move |_: ()| navigate.emit(Route::AdminEdit(id)))
        };
        TableRow {
            id,
            cells: vec![
                html! { { id } },
                html! { { admin.user_id } },
                html! { <RowEditButton on_click={on_edit} /> },
            ],
        }
    };

    let list = handle.list.borrow();
    html! {
        <>
            <PageHeader title="Admins">
                <button type="button" class="button is-link" onclick={on_add}>{ "Add new" }</button>
            </PageHeader>
            { resource_table(&list, vec!["ID", "User ID", ""], to_row, on_row_click, handle.change_page.clone()) }
        </>
    }
}
