// ============================================================================
// USE LOCATION HOOK - Ruta actual sobre la History API
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::routes::Route;

#[derive(Clone, PartialEq)]
pub struct UseLocationHandle {
    pub path: UseStateHandle<String>,
    /// pushState + re-render
    pub navigate: Callback<Route>,
    /// replaceState (redirecciones del control de acceso)
    pub replace: Callback<Route>,
}

#[hook]
pub fn use_location() -> UseLocationHandle {
    let path = use_state(current_path);

    // Atrás/adelante del navegador
    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                path.set(current_path());
            }) as Box<dyn FnMut(_)>);

            let window = web_sys::window();
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window
                        .remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    let navigate = {
        let path = path.clone();
        Callback::from(move |route: Route| {
            let target = route.to_path();
            log::info!("🧭 {}", target);
            write_history(&target, false);
            path.set(target);
        })
    };

    let replace = {
        let path = path.clone();
        Callback::from(move |route: Route| {
            let target = route.to_path();
            write_history(&target, true);
            path.set(target);
        })
    };

    UseLocationHandle {
        path,
        navigate,
        replace,
    }
}

/// Navegación desde cualquier componente bajo el provider
#[hook]
pub fn use_navigator() -> Callback<Route> {
    use_context::<UseLocationHandle>()
        .map(|location| location.navigate)
        .unwrap_or_else(|| {
            Callback::from(|route: Route| {
                log::warn!("⚠️ Sin contexto de navegación para {}", route.to_path());
            })
        })
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        log::warn!("⚠️ History API: {:?}", e);
    }
}
