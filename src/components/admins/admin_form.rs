use yew::prelude::*;

use crate::components::shared::{on_submit, FormFooter, Notice, PageHeader, Spinner, TextField};
use crate::hooks::{use_entity_form, use_navigator, UseEntityFormHandle};
use crate::models::{AdminForm, EntityId};
use crate::routes::Route;
use crate::services::endpoints::ADMIN;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminFormProps {
    #[prop_or_default]
    pub target: Option<EntityId>,
}

#[function_component(AdminFormView)]
pub fn admin_form_view(props: &AdminFormProps) -> Html {
    let navigate = use_navigator();
    let on_saved = {
        let navigate = navigate.clone();
        Callback::from(move |id: EntityId| navigate.emit(Route::AdminDetails(id)))
    };
    let UseEntityFormHandle { form, detail, submit } =
        use_entity_form::<AdminForm>(ADMIN, props.target, on_saved);

    let back_to = match props.target {
        Some(id) => Route::AdminDetails(id),
        None => Route::Admins,
    };
    let on_cancel = Callback::from(move |_: ()| navigate.emit(back_to));
    let on_user_id = {
        let form = form.clone();
        Callback::from(move |value: String| form.update(|form| form.edit(|fields| fields.user_id = value)))
    };

    let title = if props.target.is_some() { "Edit Admin" } else { "Add Admin" };

    if props.target.is_some() {
        let detail = detail.borrow();
        if detail.state.is_loading() {
            return html! { <Spinner /> };
        }
        if detail.data().is_none() {
            return html! {
                <>
                    <PageHeader {title} on_back={on_cancel} />
                    <Notice message={detail.notice().map(str::to_string)} />
                </>
            };
        }
    }

    let state = form.borrow();
    let locked = state.is_submitting();

    html! {
        <>
            <PageHeader {title} on_back={on_cancel.clone()} />
            <form onsubmit={on_submit(&submit)}>
                <TextField
                    label="User ID"
                    input_type="number"
                    value={state.fields.user_id.clone()}
                    disabled={locked}
                    on_input={on_user_id}
                />
                <FormFooter submitting={locked} error={state.error().map(str::to_string)} {on_cancel} />
            </form>
        </>
    }
}
