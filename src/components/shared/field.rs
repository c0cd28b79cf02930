use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DetailFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Etiqueta gris + valor, el bloque básico de las vistas de detalle
#[function_component(DetailField)]
pub fn detail_field(props: &DetailFieldProps) -> Html {
    html! {
        <div class="block">
            <p class="has-text-grey">{ props.label.clone() }</p>
            <div>{ for props.children.iter() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Botón "Back" opcional + título + botones a la derecha
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let back = props.on_back.clone().map(|cb| {
        let onclick = Callback::from(move |_e: MouseEvent| cb.emit(()));
        html! {
            <div class="block">
                <button type="button" class="button is-small" {onclick}>{ "Back" }</button>
            </div>
        }
    });

    html! {
        <>
            { for back }
            <div class="block is-flex is-justify-content-space-between is-align-items-center">
                <p class="is-size-3">{ props.title.clone() }</p>
                <div class="buttons">{ for props.children.iter() }</div>
            </div>
        </>
    }
}
