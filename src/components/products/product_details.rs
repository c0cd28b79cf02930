use yew::prelude::*;

use crate::components::shared::{
    BoolTag, ConfirmModal, DetailField, ErrorMessage, FileModal, Notice, PageHeader, Spinner,
};
use crate::hooks::{use_navigator, use_resource_detail, UseResourceDetailHandle};
use crate::models::{EntityId, ProductDetail};
use crate::routes::Route;
use crate::services::endpoints::PRODUCT;
use crate::state::ActionKind;
use crate::utils::{format_currency, format_date};
use crate::viewmodels::product_viewmodel;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductDetailsProps {
    pub id: EntityId,
}

/// Modal abierto en la vista (uno a la vez)
#[derive(Clone, Copy, PartialEq)]
enum Modal {
    ChangeImage,
    AddGalleryImage,
    EditGallery,
    Delete,
}

#[function_component(ProductDetails)]
pub fn product_details(props: &ProductDetailsProps) -> Html {
    let UseResourceDetailHandle { detail, vm, scope } =
        use_resource_detail::<ProductDetail>(PRODUCT, props.id);
    let navigate = use_navigator();
    let modal = use_state(|| None::<Modal>);
    let id = props.id;

    let open = |which: Modal| {
        let modal = modal.clone();
        Callback::from(move |_e: MouseEvent| modal.set(Some(which)))
    };
    // Cerrar descarta el error de la acción
    let close = |kind: ActionKind| {
        let (modal, detail) = (modal.clone(), detail.clone());
        Callback::from(move |_: ()| {
            detail.update(|detail| detail.dismiss_error(kind));
            modal.set(None);
        })
    };
    let close_gallery = {
        let (modal, detail) = (modal.clone(), detail.clone());
        Callback::from(move |_e: MouseEvent| {
            detail.update(|detail| detail.dismiss_gallery_errors());
            modal.set(None);
        })
    };

    let on_back = {
        let navigate = navigate.clone();
        Callback::from(move |_: ()| navigate.emit(Route::Products))
    };
    let on_edit = {
        let navigate = navigate.clone();
        Callback::from(move |_e: MouseEvent| navigate.emit(Route::ProductEdit(id)))
    };

    let on_change_image = {
        let (vm, detail, scope, modal) = (vm.clone(), detail.clone(), scope.clone(), modal.clone());
        Callback::from(move |file: web_sys::File| {
            let (vm, detail, token, modal) = (vm.clone(), detail.clone(), scope.token(), modal.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if product_viewmodel::change_image(&vm, &detail, file, &token).await {
                    modal.set(None);
                }
            });
        })
    };

    let on_add_gallery_image = {
        let (vm, detail, modal) = (vm.clone(), detail.clone(), modal.clone());
        Callback::from(move |file: web_sys::File| {
            let (vm, detail, modal) = (vm.clone(), detail.clone(), modal.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if product_viewmodel::add_gallery_image(&vm, &detail, file).await {
                    modal.set(None);
                }
            });
        })
    };

    let delete_gallery_image = |image_id: EntityId| {
        let (vm, detail) = (vm.clone(), detail.clone());
        Callback::from(move |_e: MouseEvent| {
            let (vm, detail) = (vm.clone(), detail.clone());
            wasm_bindgen_futures::spawn_local(async move {
                product_viewmodel::delete_gallery_image(&vm, &detail, image_id).await;
            });
        })
    };

    let on_delete = {
        let (vm, detail, navigate) = (vm.clone(), detail.clone(), navigate.clone());
        Callback::from(move |_: ()| {
            let (vm, detail, navigate) = (vm.clone(), detail.clone(), navigate.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if vm.delete(&detail).await {
                    navigate.emit(Route::Products);
                }
            });
        })
    };

    let state = detail.borrow();
    if state.state.is_loading() {
        return html! { <Spinner /> };
    }

    let header = html! {
        <PageHeader title="Product Details" on_back={on_back}>
            <button type="button" class="button is-link" onclick={on_edit}>{ "Edit" }</button>
            <button type="button" class="button is-danger" onclick={open(Modal::Delete)}>{ "Delete" }</button>
        </PageHeader>
    };

    let Some(product) = state.data() else {
        return html! {
            <>
                { header }
                <Notice message={state.notice().map(str::to_string)} />
            </>
        };
    };

    let active = *modal;
    let gallery = product.gallery_images.iter().map(|image| html! {
        <div class="column is-3" key={image.id.to_string()}>
            <figure class="image is-square">
                <img src={image.image_file_name.clone()} alt="" />
            </figure>
        </div>
    });
    let gallery_editor = product.gallery_images.iter().map(|image| {
        let kind = ActionKind::DeleteGalleryImage(image.id);
        let pending = state.is_pending(kind);
        html! {
            <div class="column is-4" key={image.id.to_string()}>
                <figure class="image is-square">
                    <img src={image.image_file_name.clone()} alt="" />
                </figure>
                <button
                    type="button"
                    class={classes!("button", "is-danger", "is-small", "is-fullwidth", pending.then_some("is-loading"))}
                    disabled={pending}
                    onclick={delete_gallery_image(image.id)}
                >
                    { "Delete" }
                </button>
                <ErrorMessage message={state.action_error(kind).map(str::to_string)} />
            </div>
        }
    });

    html! {
        <>
            { header }
            <Notice message={state.notice().map(str::to_string)} />

            <div class="columns">
                <div class="column">
                    <DetailField label="ID">{ product.id }</DetailField>
                    <DetailField label="Name">{ product.name.clone() }</DetailField>
                    <DetailField label="Regular price">{ format_currency(Some(product.regular_price)) }</DetailField>
                    <DetailField label="Sale price">{ format_currency(product.sale_price) }</DetailField>
                    <DetailField label="Available"><BoolTag value={product.is_available} /></DetailField>
                    <DetailField label="Public"><BoolTag value={product.is_public} /></DetailField>
                </div>
                <div class="column">
                    <DetailField label="Image">
                        if let Some(src) = product.image_file_name.clone() {
                            <figure class="image is-128x128 mb-2"><img {src} alt="" /></figure>
                        }
                        <button type="button" class="button is-small" onclick={open(Modal::ChangeImage)}>
                            { "Change image" }
                        </button>
                    </DetailField>
                </div>
            </div>

            <div class="card block">
                <header class="card-header">
                    <p class="card-header-title">{ "Product Gallery" }</p>
                    <button type="button" class="card-header-icon button is-white" onclick={open(Modal::EditGallery)}>
                        { "Edit" }
                    </button>
                </header>
                <div class="card-content">
                    <div class="columns is-multiline">
                        { for gallery }
                        <div class="column is-3">
                            <button type="button" class="button is-large is-fullwidth" onclick={open(Modal::AddGalleryImage)}>
                                { "+" }
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <DetailField label="Short description">
                <pre>{ product.short_description.clone().unwrap_or_default() }</pre>
            </DetailField>
            <DetailField label="Long description">
                <pre>{ product.long_description.clone().unwrap_or_default() }</pre>
            </DetailField>
            <DetailField label="Created at">{ format_date(product.created_at.as_deref()) }</DetailField>
            <DetailField label="Updated at">{ format_date(product.updated_at.as_deref()) }</DetailField>

            <FileModal
                active={active == Some(Modal::ChangeImage)}
                title="Change image"
                loading={state.is_pending(ActionKind::ChangeImage)}
                error={state.action_error(ActionKind::ChangeImage).map(str::to_string)}
                on_upload={on_change_image}
                on_close={close(ActionKind::ChangeImage)}
            />
            <FileModal
                active={active == Some(Modal::AddGalleryImage)}
                title="Add gallery image"
                loading={state.is_pending(ActionKind::AddGalleryImage)}
                error={state.action_error(ActionKind::AddGalleryImage).map(str::to_string)}
                on_upload={on_add_gallery_image}
                on_close={close(ActionKind::AddGalleryImage)}
            />
            <div class={classes!("modal", (active == Some(Modal::EditGallery)).then_some("is-active"))}>
                <div class="modal-background" onclick={close_gallery.clone()}></div>
                <div class="modal-card">
                    <header class="modal-card-head">
                        <p class="modal-card-title">{ "Edit gallery" }</p>
                    </header>
                    <section class="modal-card-body">
                        <div class="columns is-multiline">{ for gallery_editor }</div>
                    </section>
                    <footer class="modal-card-foot">
                        <button
                            type="button"
                            class="button"
                            disabled={state.is_deleting_gallery_image()}
                            onclick={close_gallery.clone()}
                        >
                            { "Close" }
                        </button>
                    </footer>
                </div>
            </div>
            <ConfirmModal
                active={active == Some(Modal::Delete)}
                title="Delete product"
                confirm_label="Delete"
                loading={state.is_pending(ActionKind::Delete)}
                error={state.action_error(ActionKind::Delete).map(str::to_string)}
                on_confirm={on_delete}
                on_close={close(ActionKind::Delete)}
            >
                <p>{ format!("Delete \"{}\"? This cannot be undone.", product.name) }</p>
            </ConfirmModal>
        </>
    }
}
