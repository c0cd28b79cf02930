use yew::prelude::*;

use crate::components::shared::{resource_table, PageHeader, TableRow};
use crate::hooks::{use_navigator, use_resource_list};
use crate::models::{EntityId, User};
use crate::routes::Route;
use crate::services::endpoints::USERS;

#[function_component(UserList)]
pub fn user_list() -> Html {
    let handle = use_resource_list::<User>(USERS);
    let navigate = use_navigator();

    let on_row_click = Callback::from(move |id: EntityId| navigate.emit(Route::UserDetails(id)));
    let to_row = |user: &User| TableRow {
        id: user.id,
        cells: vec![html! { { user.id } }, html! { { user.email.clone() } }],
    };

    let list = handle.list.borrow();
    html! {
        <>
            <PageHeader title="Users" />
            { resource_table(&list, vec!["ID", "Email"], to_row, on_row_click, handle.change_page.clone()) }
        </>
    }
}
