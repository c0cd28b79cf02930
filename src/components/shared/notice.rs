use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MessageProps {
    #[prop_or_default]
    pub message: Option<String>,
}

/// Aviso no bloqueante (fetch fallido: la vista sigue usable)
#[function_component(Notice)]
pub fn notice(props: &MessageProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="notification is-warning is-light">
                { format!("Could not load data: {}", message) }
            </div>
        },
        None => html! {},
    }
}

/// Error de servidor debajo de un formulario o dentro de un modal
#[function_component(ErrorMessage)]
pub fn error_message(props: &MessageProps) -> Html {
    match &props.message {
        Some(message) => html! { <p class="help is-danger">{ message.clone() }</p> },
        None => html! {},
    }
}
