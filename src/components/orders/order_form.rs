use yew::prelude::*;

use crate::components::orders::carrier_options;
use crate::components::shared::{
    on_submit, FormFooter, Notice, PageHeader, SelectField, Spinner, TextField,
};
use crate::hooks::{use_entity_form, use_navigator, UseEntityFormHandle};
use crate::models::{EntityId, OrderForm, OrderStatus};
use crate::routes::Route;
use crate::services::endpoints::ORDER;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderFormProps {
    pub id: EntityId,
}

/// Los pedidos solo se editan (estado, transportista, tracking)
#[function_component(OrderFormView)]
pub fn order_form_view(props: &OrderFormProps) -> Html {
    let navigate = use_navigator();
    let on_saved = {
        let navigate = navigate.clone();
        Callback::from(move |id: EntityId| navigate.emit(Route::OrderDetails(id)))
    };
    let UseEntityFormHandle { form, detail, submit } =
        use_entity_form::<OrderForm>(ORDER, Some(props.id), on_saved);

    let id = props.id;
    let on_cancel = Callback::from(move |_: ()| navigate.emit(Route::OrderDetails(id)));

    let set_text = |apply: fn(&mut OrderForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| form.update(|form| form.edit(|fields| apply(fields, value))))
    };

    {
        let detail = detail.borrow();
        if detail.state.is_loading() {
            return html! { <Spinner /> };
        }
        if detail.data().is_none() {
            return html! {
                <>
                    <PageHeader title="Edit Order" on_back={on_cancel} />
                    <Notice message={detail.notice().map(str::to_string)} />
                </>
            };
        }
    }

    let state = form.borrow();
    let fields = &state.fields;
    let locked = state.is_submitting();
    let statuses: Vec<(AttrValue, AttrValue)> = OrderStatus::EDITABLE
        .iter()
        .map(|status| (AttrValue::Static(status.as_str()), AttrValue::Static(status.label())))
        .collect();

    html! {
        <>
            <PageHeader title="Edit Order" on_back={on_cancel.clone()} />
            <form onsubmit={on_submit(&submit)}>
                <SelectField
                    label="Status"
                    value={fields.status.clone()}
                    options={statuses}
                    disabled={locked}
                    on_change={set_text(|f, v| f.status = v)}
                />
                <SelectField
                    label="Carrier"
                    value={fields.carrier.clone()}
                    options={carrier_options()}
                    placeholder={AttrValue::Static("Select a carrier")}
                    disabled={locked}
                    on_change={set_text(|f, v| f.carrier = v)}
                />
                <TextField
                    label="Tracking number"
                    value={fields.tracking_number.clone()}
                    disabled={locked}
                    on_input={set_text(|f, v| f.tracking_number = v)}
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
