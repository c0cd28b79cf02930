use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::shared::ErrorMessage;

#[derive(Properties, PartialEq, Clone)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    /// Textarea en lugar de input
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let control = if props.multiline {
        let oninput = {
            let cb = props.on_input.clone();
            Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                cb.emit(area.value());
            })
        };
        html! {
            <textarea class="textarea" value={props.value.clone()} disabled={props.disabled} {oninput} />
        }
    } else {
        let oninput = {
            let cb = props.on_input.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                cb.emit(input.value());
            })
        };
        html! {
            <input
                class="input"
                type={props.input_type.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
            />
        }
    };

    html! {
        <div class="field">
            <label class="label">{ props.label.clone() }</label>
            <div class="control">{ control }</div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CheckboxFieldProps {
    pub label: AttrValue,
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(CheckboxField)]
pub fn checkbox_field(props: &CheckboxFieldProps) -> Html {
    let onchange = {
        let cb = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.checked());
        })
    };
    html! {
        <div class="field">
            <label class="checkbox">
                <input type="checkbox" checked={props.checked} disabled={props.disabled} {onchange} />
                { " " }{ props.label.clone() }
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// (valor, etiqueta)
    pub options: Vec<(AttrValue, AttrValue)>,
    /// Opción vacía inicial
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };
    let placeholder = props.placeholder.clone().map(|text| html! {
        <option value="" selected={props.value.is_empty()}>{ text }</option>
    });
    let options = props.options.iter().map(|(value, label)| html! {
        <option value={value.clone()} selected={*value == props.value}>{ label.clone() }</option>
    });

    html! {
        <div class="field">
            <label class="label">{ props.label.clone() }</label>
            <div class="control">
                <div class="select is-fullwidth">
                    <select disabled={props.disabled} {onchange}>
                        { for placeholder }
                        { for options }
                    </select>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FormFooterProps {
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_cancel: Callback<()>,
}

/// Enviar (bloqueado mientras hay un envío) + cancelar + error del servidor
#[function_component(FormFooter)]
pub fn form_footer(props: &FormFooterProps) -> Html {
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    html! {
        <>
            <div class="field is-grouped">
                <div class="control">
                    <button
                        type="submit"
                        class={classes!("button", "is-link", props.submitting.then_some("is-loading"))}
                        disabled={props.submitting}
                    >
                        { "Save" }
                    </button>
                </div>
                <div class="control">
                    <button type="button" class="button is-light" onclick={on_cancel}>{ "Cancel" }</button>
                </div>
            </div>
            <ErrorMessage message={props.error.clone()} />
        </>
    }
}

/// `<form>` que no recarga la página
pub fn on_submit(submit: &Callback<()>) -> Callback<SubmitEvent> {
    let submit = submit.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        submit.emit(());
    })
}
