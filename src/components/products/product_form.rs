use yew::prelude::*;

use crate::components::shared::{
    on_submit, CheckboxField, FormFooter, Notice, PageHeader, Spinner, TextField,
};
use crate::hooks::{use_entity_form, use_navigator, UseEntityFormHandle};
use crate::models::{EntityId, ProductForm};
use crate::routes::Route;
use crate::services::endpoints::PRODUCT;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductFormProps {
    /// `None` = alta, `Some(id)` = edición
    #[prop_or_default]
    pub target: Option<EntityId>,
}

#[function_component(ProductFormView)]
pub fn product_form_view(props: &ProductFormProps) -> Html {
    let navigate = use_navigator();
    let on_saved = {
        let navigate = navigate.clone();
        Callback::from(move |id: EntityId| navigate.emit(Route::ProductDetails(id)))
    };
    let UseEntityFormHandle { form, detail, submit } =
        use_entity_form::<ProductForm>(PRODUCT, props.target, on_saved);

    let back_to = match props.target {
        Some(id) => Route::ProductDetails(id),
        None => Route::Products,
    };
    let on_cancel = Callback::from(move |_: ()| navigate.emit(back_to));

    let set_text = |apply: fn(&mut ProductForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| form.update(|form| form.edit(|fields| apply(fields, value))))
    };
    let set_flag = |apply: fn(&mut ProductForm, bool)| {
        let form = form.clone();
        Callback::from(move |value: bool| form.update(|form| form.edit(|fields| apply(fields, value))))
    };

    let title = if props.target.is_some() { "Edit Product" } else { "Add Product" };

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
    let fields = &state.fields;
    let locked = state.is_submitting();

    html! {
        <>
            <PageHeader {title} on_back={on_cancel.clone()} />
            <form onsubmit={on_submit(&submit)}>
                <TextField
                    label="Name"
                    value={fields.name.clone()}
                    disabled={locked}
                    on_input={set_text(|f, v| f.name = v)}
                />
                <div class="columns">
                    <div class="column">
                        <TextField
                            label="Regular price"
                            input_type="number"
                            value={fields.regular_price.clone()}
                            disabled={locked}
                            on_input={set_text(|f, v| f.regular_price = v)}
                        />
                    </div>
                    <div class="column">
                        <TextField
                            label="Sale price"
                            input_type="number"
                            value={fields.sale_price.clone()}
                            disabled={locked}
                            on_input={set_text(|f, v| f.sale_price = v)}
                        />
                    </div>
                </div>
                <TextField
                    label="Short description"
                    multiline=true
                    value={fields.short_description.clone()}
                    disabled={locked}
                    on_input={set_text(|f, v| f.short_description = v)}
                />
                <TextField
                    label="Long description"
                    multiline=true
                    value={fields.long_description.clone()}
                    disabled={locked}
                    on_input={set_text(|f, v| f.long_description = v)}
                />
                <CheckboxField
                    label="Available"
                    checked={fields.is_available}
                    disabled={locked}
                    on_toggle={set_flag(|f, v| f.is_available = v)}
                />
                <CheckboxField
                    label="Public"
                    checked={fields.is_public}
                    disabled={locked}
                    on_toggle={set_flag(|f, v| f.is_public = v)}
                />
                <FormFooter
                    submitting={locked}
                    error={state.error().map(str::to_string)}
                    {on_cancel}
                />
            </form>
        </>
    }
}
