use yew::prelude::*;

use crate::components::shared::{ConfirmModal, DetailField, Notice, PageHeader, Spinner};
use crate::hooks::{use_navigator, use_resource_detail, UseResourceDetailHandle};
use crate::models::{EntityId, User};
use crate::routes::Route;
use crate::services::endpoints::USER;
use crate::state::ActionKind;

#[derive(Properties, PartialEq, Clone)]
pub struct UserDetailsProps {
    pub id: EntityId,
}

#[function_component(UserDetails)]
pub fn user_details(props: &UserDetailsProps) -> Html {
    let UseResourceDetailHandle { detail, vm, .. } = use_resource_detail::<User>(USER, props.id);
    let navigate = use_navigator();
    let confirming = use_state(|| false);

    let on_back = {
        let navigate = navigate.clone();
        Callback::from(move |_: ()| navigate.emit(Route::Users))
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
                    navigate.emit(Route::Users);
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
            <PageHeader title="User Details" {on_back}>
                <button type="button" class="button is-danger" onclick={on_ask_delete}>{ "Delete" }</button>
            </PageHeader>
            <Notice message={state.notice().map(str::to_string)} />
            if let Some(user) = state.data() {
                <DetailField label="ID">{ user.id }</DetailField>
                <DetailField label="Email">{ user.email.clone() }</DetailField>
            }
            <ConfirmModal
                active={*confirming}
                title="Delete user"
                confirm_label="Delete"
                loading={state.is_pending(ActionKind::Delete)}
                error={state.action_error(ActionKind::Delete).map(str::to_string)}
                on_confirm={on_delete}
                {on_close}
            >
                <p>{ "Delete this user? This cannot be undone." }</p>
            </ConfirmModal>
        </>
    }
}
