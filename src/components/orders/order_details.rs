use yew::prelude::*;

use crate::components::orders::{carrier_options, status_tag};
use crate::components::shared::{
    ConfirmModal, DetailField, Notice, PageHeader, SelectField, Spinner, TextField,
};
use crate::hooks::{use_navigator, use_resource_detail, UseResourceDetailHandle};
use crate::models::order::carrier_name;
use crate::models::{EntityId, OrderDetail, OrderStatus, ShipRequest};
use crate::routes::Route;
use crate::services::endpoints::ORDER;
use crate::state::ActionKind;
use crate::utils::{format_currency, format_date};
use crate::viewmodels::order_viewmodel;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderDetailsProps {
    pub id: EntityId,
}

#[derive(Clone, Copy, PartialEq)]
enum Modal {
    Ship,
    Cancel,
}

#[function_component(OrderDetails)]
pub fn order_details(props: &OrderDetailsProps) -> Html {
    let UseResourceDetailHandle { detail, vm, scope } =
        use_resource_detail::<OrderDetail>(ORDER, props.id);
    let navigate = use_navigator();
    let modal = use_state(|| None::<Modal>);
    let carrier = use_state(String::new);
    let tracking_number = use_state(String::new);
    let id = props.id;

    let open = |which: Modal| {
        let modal = modal.clone();
        Callback::from(move |_e: MouseEvent| modal.set(Some(which)))
    };
    let close = |kind: ActionKind| {
        let (modal, detail) = (modal.clone(), detail.clone());
        Callback::from(move |_: ()| {
            detail.update(|detail| detail.dismiss_error(kind));
            modal.set(None);
        })
    };

    let on_back = {
        let navigate = navigate.clone();
        Callback::from(move |_: ()| navigate.emit(Route::OrdersAll))
    };
    let on_edit = Callback::from(move |_e: MouseEvent| navigate.emit(Route::OrderEdit(id)));

    let on_ship = {
        let (vm, detail, scope, modal) = (vm.clone(), detail.clone(), scope.clone(), modal.clone());
        let (carrier, tracking_number) = (carrier.clone(), tracking_number.clone());
        Callback::from(move |_: ()| {
            let request = ShipRequest {
                carrier: (*carrier).clone(),
                tracking_number: tracking_number.trim().to_string(),
            };
            let (vm, detail, token, modal) = (vm.clone(), detail.clone(), scope.token(), modal.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if order_viewmodel::ship(&vm, &detail, request, &token).await {
                    modal.set(None);
                }
            });
        })
    };

    let on_cancel_order = {
        let (vm, detail, scope, modal) = (vm.clone(), detail.clone(), scope.clone(), modal.clone());
        Callback::from(move |_: ()| {
            let (vm, detail, token, modal) = (vm.clone(), detail.clone(), scope.token(), modal.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if order_viewmodel::cancel(&vm, &detail, &token).await {
                    modal.set(None);
                }
            });
        })
    };

    let on_carrier = {
        let carrier = carrier.clone();
        Callback::from(move |value: String| carrier.set(value))
    };
    let on_tracking_number = {
        let tracking_number = tracking_number.clone();
        Callback::from(move |value: String| tracking_number.set(value))
    };

    let state = detail.borrow();
    if state.state.is_loading() {
        return html! { <Spinner /> };
    }

    let Some(order) = state.data() else {
        return html! {
            <>
                <PageHeader title="Order Details" on_back={on_back} />
                <Notice message={state.notice().map(str::to_string)} />
            </>
        };
    };

    let status = order.status();
    let active = *modal;
    let shipping = state.is_pending(ActionKind::Ship);
    let timeline = OrderStatus::TIMELINE.iter().map(|step| {
        let class = if *step == status { step.tag_class() } else { "is-light" };
        html! { <span class={classes!("tag", "is-medium", class)}>{ step.label() }</span> }
    });
    let address = [
        &order.address_line1,
        &order.address_line2,
        &order.city,
        &order.state,
        &order.postal_code,
        &order.country,
    ]
    .into_iter()
    .flatten()
    .filter(|line| !line.is_empty())
    .map(|line| html! { <p>{ line.clone() }</p> });

    html! {
        <>
            <PageHeader title="Order Details" on_back={on_back}>
                <button type="button" class="button is-link" onclick={on_edit}>{ "Edit" }</button>
                if status.can_ship() {
                    <button type="button" class="button is-success" onclick={open(Modal::Ship)}>{ "Ship" }</button>
                }
                if status.can_cancel() {
                    <button type="button" class="button is-danger" onclick={open(Modal::Cancel)}>{ "Cancel order" }</button>
                }
            </PageHeader>
            <Notice message={state.notice().map(str::to_string)} />

            <div class="tags block">{ for timeline }</div>

            <div class="columns">
                <div class="column">
                    <DetailField label="ID">{ order.id }</DetailField>
                    <DetailField label="Status">{ status_tag(status) }</DetailField>
                    <DetailField label="Name">{ order.name.clone() }</DetailField>
                    <DetailField label="Email">{ order.email.clone().unwrap_or_default() }</DetailField>
                    <DetailField label="Phone number">{ order.phone_number.clone().unwrap_or_default() }</DetailField>
                    <DetailField label="Address">{ for address }</DetailField>
                </div>
                <div class="column">
                    <DetailField label="Product">{ order.product_name.clone().unwrap_or_default() }</DetailField>
                    <DetailField label="Subtotal">{ format_currency(order.subtotal) }</DetailField>
                    <DetailField label="Discount">{ format_currency(order.discount) }</DetailField>
                    <DetailField label="Total">{ format_currency(Some(order.total)) }</DetailField>
                    if let Some(code) = order.discount_code.clone() {
                        <DetailField label="Discount code">
                            { format!("{} ({}%)", code, order.discount_percentage.unwrap_or_default()) }
                        </DetailField>
                    }
                    <DetailField label="Payment intent">{ order.stripe_payment_intent_id.clone().unwrap_or_default() }</DetailField>
                </div>
                <div class="column">
                    <DetailField label="Carrier">{ order.carrier.as_deref().map(carrier_name).unwrap_or_default() }</DetailField>
                    <DetailField label="Tracking number">{ order.tracking_number.clone().unwrap_or_default() }</DetailField>
                    <DetailField label="Placed at">{ format_date(order.order_placed_at.as_deref()) }</DetailField>
                    <DetailField label="Paid at">{ format_date(order.payment_completed_at.as_deref()) }</DetailField>
                    <DetailField label="Shipped at">{ format_date(order.shipped_at.as_deref()) }</DetailField>
                    <DetailField label="Canceled at">{ format_date(order.canceled_at.as_deref()) }</DetailField>
                </div>
            </div>

            <ConfirmModal
                active={active == Some(Modal::Ship)}
                title="Ship order"
                confirm_label="Ship"
                loading={shipping}
                error={state.action_error(ActionKind::Ship).map(str::to_string)}
                on_confirm={on_ship}
                on_close={close(ActionKind::Ship)}
            >
                <SelectField
                    label="Carrier"
                    value={(*carrier).clone()}
                    options={carrier_options()}
                    placeholder={AttrValue::Static("Select a carrier")}
                    disabled={shipping}
                    on_change={on_carrier}
                />
                <TextField
                    label="Tracking number"
                    value={(*tracking_number).clone()}
                    disabled={shipping}
                    on_input={on_tracking_number}
                />
            </ConfirmModal>
            <ConfirmModal
                active={active == Some(Modal::Cancel)}
                title="Cancel order"
                confirm_label="Cancel order"
                loading={state.is_pending(ActionKind::Cancel)}
                error={state.action_error(ActionKind::Cancel).map(str::to_string)}
                on_confirm={on_cancel_order}
                on_close={close(ActionKind::Cancel)}
            >
                <p>{ format!("Cancel order #{}?", order.id) }</p>
            </ConfirmModal>
        </>
    }
}
