use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoolTagProps {
    pub value: bool,
}

/// true → verde, false → rojo
#[function_component(BoolTag)]
pub fn bool_tag(props: &BoolTagProps) -> Html {
    let class = if props.value {
        "tag is-success is-light"
    } else {
        "tag is-danger is-light"
    };
    html! { <span class={class}>{ props.value.to_string() }</span> }
}
