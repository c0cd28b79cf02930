use yew::prelude::*;

use crate::components::shared::{BoolTag, ConfirmModal, DetailField, Notice, PageHeader, Spinner};
use crate::hooks::{use_navigator, use_resource_detail, UseResourceDetailHandle};
use crate::models::{DiscountCode, EntityId};
use crate::routes::Route;
use crate::services::endpoints::DISCOUNT_CODE;
use crate::state::ActionKind;

#[derive(Properties, PartialEq, Clone)]
pub struct DiscountCodeDetailsProps {
    pub id: EntityId,
}

#[function_component(DiscountCodeDetails)]
pub fn discount_code_details(props: &DiscountCodeDetailsProps) -> Html {
    let UseResourceDetailHandle { detail, vm, .. } =
        use_resource_detail::<DiscountCode>(DISCOUNT_CODE, props.id);
    let navigate = use_navigator();
    let confirming = use_state(|| false);
    let id = props.id;

    let on_back = {
        let navigate = navigate.clone();
        Callback::from(move |_: ()| navigate.emit(Route::DiscountCodes))
    };
    let on_edit = {
        let navigate = navigate.clone();
        Callback::from(move |_e: MouseEvent| navigate.emit(Route::DiscountCodeEdit(id)))
    };
    let on_ask_delete = {
        let confirming = confirming.clone();
        Callback::from(move |_e: MouseEvent| confirming.set(true))
    };
    let on_close = {
        let (confirming, detail) = (confirming.clone(), detail.clone());
        Callback::from(move |_: ()| {
            detail.update(|detail| detail.dismiss_error(ActionKind::Delete));
            confirming.set(false);
        })
    };
    let on_delete = {
        let detail = detail.clone();
        Callback::from(move |_: ()| {
            let (vm, detail, navigate) = (vm.clone(), detail.clone(), navigate.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if vm.delete(&detail).await {
                    navigate.emit(Route::DiscountCodes);
                }
            });
        })
    };

    let state = detail.borrow();
    if state.state.is_loading() {
        return html! { <Spinner /> };
    }

    html! {
        <>
            <PageHeader title="Discount Code Details" {on_back}>
                <button type="button" class="button is-link" onclick={on_edit}>{ "Edit" }</button>
                <button type="button" class="button is-danger" onclick={on_ask_delete}>{ "Delete" }</button>
            </PageHeader>
            <Notice message={state.notice().map(str::to_string)} />
            if let Some(discount_code) = state.data() {
                <DetailField label="ID">{ discount_code.id }</DetailField>
                <DetailField label="Code"><code>{ discount_code.code.clone() }</code></DetailField>
                <DetailField label="Discount">{ format!("{}%", discount_code.discount_percentage) }</DetailField>
                <DetailField label="Active"><BoolTag value={discount_code.is_active} /></DetailField>
            }
            <ConfirmModal
                active={*confirming}
                title="Delete discount code"
                confirm_label="Delete"
                loading={state.is_pending(ActionKind::Delete)}
                error={state.action_error(ActionKind::Delete).map(str::to_string)}
                on_confirm={on_delete}
                {on_close}
            >
                <p>{ "Delete this discount code? This cannot be undone." }</p>
            </ConfirmModal>
        </>
    }
}
