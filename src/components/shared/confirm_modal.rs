use yew::prelude::*;

use super::notice::ErrorMessage;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmModalProps {
    pub active: bool,
    pub title: AttrValue,
    pub confirm_label: AttrValue,
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Modal de confirmación (delete, cancel). El botón se bloquea mientras carga.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let close_click = {
        let cb = props.on_close.clone();
        let loading = props.loading;
        Callback::from(move |_e: MouseEvent| {
            if !loading {
                cb.emit(())
            }
        })
    };
    let confirm_click = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    let class = if props.active { "modal is-active" } else { "modal" };
    let button_class = if props.loading {
        "button is-danger is-loading"
    } else {
        "button is-danger"
    };

    html! {
        <div class={class}>
            <div class="modal-background" onclick={close_click.clone()}></div>
            <div class="modal-card">
                <header class="modal-card-head">
                    <p class="modal-card-title">{ props.title.clone() }</p>
                    <button class="delete" aria-label="close" onclick={close_click.clone()}></button>
                </header>
                <section class="modal-card-body">
                    { for props.children.iter() }
                    <ErrorMessage message={props.error.clone()} />
                </section>
                <footer class="modal-card-foot">
                    <button class={button_class} disabled={props.loading} onclick={confirm_click}>
                        { props.confirm_label.clone() }
                    </button>
                    <button class="button" disabled={props.loading} onclick={close_click}>{ "Cancel" }</button>
                </footer>
            </div>
        </div>
    }
}
