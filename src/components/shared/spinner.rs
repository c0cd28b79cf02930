use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner-wrapper">
            <div class="loader is-loading"></div>
        </div>
    }
}

/// Pantalla completa mientras se restaura la sesión
#[function_component(FullPageSpinner)]
pub fn full_page_spinner() -> Html {
    html! {
        <div class="full-page-spinner">
            <Spinner />
        </div>
    }
}
