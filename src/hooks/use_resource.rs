// ============================================================================
// USE RESOURCE HOOKS - Listado, detalle y formulario de una entidad
// ============================================================================
// Cada vista montada tiene su CancelScope: al desmontarse se cancela y
// ninguna respuesta tardía llega a escribir en su estado.
// ============================================================================

use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::hooks::session_context::use_api;
use crate::models::{EntityForm, EntityId};
use crate::services::endpoints::{DetailEndpoint, ListEndpoint};
use crate::services::CancelScope;
use crate::state::{DetailController, FormState, ListController, ReactiveState};
use crate::viewmodels::{DetailViewModel, FormViewModel, ListViewModel};

/// Estado reactivo local: cualquier `update` re-renderiza el componente
#[hook]
pub fn use_reactive<T, F>(init: F) -> ReactiveState<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let trigger = use_force_update();
    let state = use_state(move || {
        let state = ReactiveState::new(init());
        state.subscribe(move || trigger.force_update());
        state
    });
    (*state).clone()
}

/// Scope de cancelación ligado a la vida del componente
#[hook]
pub fn use_cancel_scope() -> CancelScope {
    let scope = (*use_state(CancelScope::new)).clone();
    {
        let scope = scope.clone();
        use_effect_with((), move |_| move || scope.cancel());
    }
    scope
}

// ----------------------------------------------------------------------------
// Listado
// ----------------------------------------------------------------------------

#[derive(Clone, PartialEq)]
pub struct UseResourceListHandle<T: 'static> {
    pub list: ReactiveState<ListController<T>>,
    pub change_page: Callback<u32>,
}

#[hook]
pub fn use_resource_list<T>(endpoint: ListEndpoint) -> UseResourceListHandle<T>
where
    T: DeserializeOwned + 'static,
{
    let api = use_api();
    let scope = use_cancel_scope();
    let list = use_reactive(ListController::<T>::new);
    let vm = ListViewModel::new(api, endpoint);

    // Fetch al montar
    {
        let (vm, list, scope) = (vm.clone(), list.clone(), scope.clone());
        use_effect_with(endpoint, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                vm.load(&list, None, &scope.token()).await;
            });
            || ()
        });
    }

    let change_page = {
        let list = list.clone();
        Callback::from(move |page: u32| {
            let (vm, list, token) = (vm.clone(), list.clone(), scope.token());
            wasm_bindgen_futures::spawn_local(async move {
                vm.load(&list, Some(page), &token).await;
            });
        })
    };

    UseResourceListHandle { list, change_page }
}

// ----------------------------------------------------------------------------
// Detalle
// ----------------------------------------------------------------------------

#[derive(Clone, PartialEq)]
pub struct UseResourceDetailHandle<T: 'static> {
    pub detail: ReactiveState<DetailController<T>>,
    pub vm: DetailViewModel,
    pub scope: CancelScope,
}

#[hook]
pub fn use_resource_detail<T>(endpoint: DetailEndpoint, id: EntityId) -> UseResourceDetailHandle<T>
where
    T: DeserializeOwned + 'static,
{
    let api = use_api();
    let scope = use_cancel_scope();
    let detail = use_reactive(DetailController::<T>::new);
    let vm = DetailViewModel::new(api, endpoint, id);

    {
        let (vm, detail, scope) = (vm.clone(), detail.clone(), scope.clone());
        use_effect_with(id, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                vm.load(&detail, &scope.token()).await;
            });
            || ()
        });
    }

    UseResourceDetailHandle { detail, vm, scope }
}

// ----------------------------------------------------------------------------
// Formulario (alta si `target` es None, edición si no)
// ----------------------------------------------------------------------------

#[derive(Clone, PartialEq)]
pub struct UseEntityFormHandle<F: EntityForm> {
    pub form: ReactiveState<FormState<F>>,
    /// Carga de la entidad a editar (no se usa en altas)
    pub detail: ReactiveState<DetailController<F::Detail>>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_entity_form<F>(
    endpoint: DetailEndpoint,
    target: Option<EntityId>,
    on_saved: Callback<EntityId>,
) -> UseEntityFormHandle<F>
where
    F: EntityForm,
    F::Detail: DeserializeOwned + 'static,
{
    let api = use_api();
    let scope = use_cancel_scope();
    let form = use_reactive(|| FormState::new(F::default()));
    let detail = use_reactive(DetailController::<F::Detail>::new);
    let vm = FormViewModel::new(api, endpoint);

    {
        let (vm, form, detail, scope) = (vm.clone(), form.clone(), detail.clone(), scope.clone());
        use_effect_with(target, move |target| {
            if let Some(id) = *target {
                wasm_bindgen_futures::spawn_local(async move {
                    vm.load_into(id, &detail, &form, &scope.token()).await;
                });
            }
            || ()
        });
    }

    let submit = {
        let form = form.clone();
        Callback::from(move |_| {
            let (vm, form, on_saved) = (vm.clone(), form.clone(), on_saved.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(id) = vm.submit(&form, target).await {
                    on_saved.emit(id);
                }
            });
        })
    };

    UseEntityFormHandle { form, detail, submit }
}
