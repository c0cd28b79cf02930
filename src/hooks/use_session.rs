// ============================================================================
// USE SESSION HOOK - Estado de sesión compartido por la app
// ============================================================================
// Restaura la sesión al montar; sign in / sign out vía SessionViewModel.
// ============================================================================

use yew::prelude::*;

use crate::services::ApiClient;
use crate::stores::SessionStore;
use crate::viewmodels::SessionViewModel;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<SessionStore>,
    pub api: ApiClient,
    pub sign_in: Callback<(String, String)>,
    pub sign_out: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let api = (*use_state(ApiClient::browser)).clone();
    let state = use_state(SessionStore::default);

    // Restore al arrancar
    {
        let state = state.clone();
        let vm = SessionViewModel::new(api.clone());
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let session = vm.restore().await;
                state.set(SessionStore::restored(session));
            });
            || ()
        });
    }

    let sign_in = {
        let state = state.clone();
        let vm = SessionViewModel::new(api.clone());
        Callback::from(move |(email, password): (String, String)| {
            if state.signing_in {
                return;
            }
            let mut pending = (*state).clone();
            pending.signing_in = true;
            pending.sign_in_error = None;
            state.set(pending);

            let state = state.clone();
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match vm.sign_in(&email, &password).await {
                    Ok(session) => state.set(SessionStore::restored(Some(session))),
                    Err(message) => state.set(SessionStore {
                        sign_in_error: Some(message),
                        ..SessionStore::signed_out()
                    }),
                }
            });
        })
    };

    let sign_out = {
        let state = state.clone();
        let vm = SessionViewModel::new(api.clone());
        Callback::from(move |_| {
            vm.sign_out();
            state.set(SessionStore::signed_out());
        })
    };

    UseSessionHandle {
        state,
        api,
        sign_in,
        sign_out,
    }
}
