use yew::prelude::*;

use crate::components::shared::{
    on_submit, CheckboxField, FormFooter, Notice, PageHeader, Spinner, TextField,
};
use crate::hooks::{use_entity_form, use_navigator, UseEntityFormHandle};
use crate::models::{DiscountCodeForm, EntityId};
use crate::routes::Route;
use crate::services::endpoints::DISCOUNT_CODE;

#[derive(Properties, PartialEq, Clone)]
pub struct DiscountCodeFormProps {
    #[prop_or_default]
    pub target: Option<EntityId>,
}

#[function_component(DiscountCodeFormView)]
pub fn discount_code_form_view(props: &DiscountCodeFormProps) -> Html {
    let navigate = use_navigator();
    let on_saved = {
        let navigate = navigate.clone();
        Callback::from(move |id: EntityId| navigate.emit(Route::DiscountCodeDetails(id)))
    };
    let UseEntityFormHandle { form, detail, submit } =
        use_entity_form::<DiscountCodeForm>(DISCOUNT_CODE, props.target, on_saved);

    let back_to = match props.target {
        Some(id) => Route::DiscountCodeDetails(id),
        None => Route::DiscountCodes,
    };
    let on_cancel = Callback::from(move |_: ()| navigate.emit(back_to));

    // El código se normaliza en cada pulsación
    let on_code = {
        let form = form.clone();
        Callback::from(move |raw: String| form.update(|form| form.edit(|fields| fields.set_code(&raw))))
    };
    let on_percentage = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.update(|form| form.edit(|fields| fields.discount_percentage = value))
        })
    };
    let on_active = {
        let form = form.clone();
        Callback::from(move |value: bool| form.update(|form| form.edit(|fields| fields.is_active = value)))
    };

    let title = if props.target.is_some() { "Edit Discount Code" } else { "Add Discount Code" };

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
                <TextField label="Code" value={state.fields.code.clone()} disabled={locked} on_input={on_code} />
                <TextField
                    label="Discount percentage"
                    input_type="number"
                    value={state.fields.discount_percentage.clone()}
                    disabled={locked}
                    on_input={on_percentage}
                />
                <CheckboxField label="Active" checked={state.fields.is_active} disabled={locked} on_toggle={on_active} />
                <FormFooter submitting={locked} error={state.error().map(str::to_string)} {on_cancel} />
            </form>
        </>
    }
}
