// ============================================================================
// SESSION CONTEXT - Compartir sesión y navegación entre componentes
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_location::{use_location, UseLocationHandle};
use crate::hooks::use_session::{use_session, UseSessionHandle};
use crate::services::ApiClient;

/// Provider que envuelve la app: sesión + ubicación
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();
    let location_handle = use_location();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            <ContextProvider<UseLocationHandle> context={location_handle}>
                {props.children.clone()}
            </ContextProvider<UseLocationHandle>>
        </ContextProvider<UseSessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Cliente API compartido; fuera del provider se crea uno nuevo
#[hook]
pub fn use_api() -> ApiClient {
    use_context::<UseSessionHandle>()
        .map(|session| session.api)
        .unwrap_or_else(ApiClient::browser)
}
