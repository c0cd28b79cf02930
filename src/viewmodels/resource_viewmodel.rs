// ============================================================================
// RESOURCE VIEWMODEL - Fetch, paginación, mutaciones y acciones
// ============================================================================
// Mismo ciclo para todas las entidades: el viewmodel lanza la petición y
// entrega el resultado al controlador; el hook solo re-renderiza.
// ============================================================================

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{EntityForm, EntityId};
use crate::services::endpoints::{DetailEndpoint, ListEndpoint};
use crate::services::{ApiClient, CancelToken};
use crate::state::{ActionKind, Applied, DetailController, FormState, ListController, ReactiveState};

/// Listado paginado de una entidad
#[derive(Clone, PartialEq)]
pub struct ListViewModel {
    api: ApiClient,
    endpoint: ListEndpoint,
}

impl ListViewModel {
    pub fn new(api: ApiClient, endpoint: ListEndpoint) -> Self {
        Self { api, endpoint }
    }

    /// `page = None`: carga inicial; `Some(n)`: cambio de página
    pub async fn load<T: DeserializeOwned>(
        &self,
        list: &ReactiveState<ListController<T>>,
        page: Option<u32>,
        cancel: &CancelToken,
    ) -> Applied {
        let ticket = list.update(|list| match page {
            Some(page) => list.begin_page(page),
            None => list.begin_initial(),
        });
        log::info!("📋 GET {} (página {:?})", self.endpoint.path, ticket.page);

        let result = self.api.list_page(&self.endpoint, ticket.page, cancel).await;
        if let Ok(page) = &result {
            log::info!(
                "✅ {}: {} elementos, página {}/{}",
                self.endpoint.key,
                page.items.len(),
                page.pagination.current_page,
                page.pagination.total_pages
            );
        }
        list.update(|list| list.apply(ticket, result))
    }
}

/// Detalle de una entidad + sus acciones
#[derive(Clone, PartialEq)]
pub struct DetailViewModel {
    api: ApiClient,
    endpoint: DetailEndpoint,
    id: EntityId,
}

impl DetailViewModel {
    pub fn new(api: ApiClient, endpoint: DetailEndpoint, id: EntityId) -> Self {
        Self { api, endpoint, id }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Carga inicial y re-fetch tras una acción
    pub async fn load<T: DeserializeOwned>(
        &self,
        detail: &ReactiveState<DetailController<T>>,
        cancel: &CancelToken,
    ) -> Applied {
        let ticket = detail.update(|detail| detail.begin_load());
        log::info!("🔎 GET {}", self.endpoint.item_path(self.id));
        let result = self.api.get_detail::<T>(&self.endpoint, self.id, cancel).await;
        detail.update(|detail| detail.apply(ticket, result))
    }

    /// Ejecuta una acción con su disparador bloqueado.
    /// `None` si falló o si ya había una igual en curso.
    pub async fn perform<T, R, Fut>(
        &self,
        detail: &ReactiveState<DetailController<T>>,
        kind: ActionKind,
        action: Fut,
    ) -> Option<R>
    where
        Fut: Future<Output = Result<R, ApiError>>,
    {
        if !detail.update(|detail| detail.begin_action(kind)) {
            return None;
        }
        match action.await {
            Ok(value) => {
                log::info!("✅ {:?} completado", kind);
                detail.update(|detail| detail.finish_action(kind));
                Some(value)
            }
            Err(e) => {
                detail.update(|detail| detail.fail_action(kind, &e));
                None
            }
        }
    }

    /// Acción seguida de un re-fetch completo del detalle
    pub async fn perform_and_reload<T, R, Fut>(
        &self,
        detail: &ReactiveState<DetailController<T>>,
        kind: ActionKind,
        action: Fut,
        cancel: &CancelToken,
    ) -> bool
    where
        T: DeserializeOwned,
        Fut: Future<Output = Result<R, ApiError>>,
    {
        if self.perform(detail, kind, action).await.is_none() {
            return false;
        }
        self.load(detail, cancel).await;
        true
    }

    /// Borra la entidad. `true` → la vista navega al listado.
    pub async fn delete<T>(&self, detail: &ReactiveState<DetailController<T>>) -> bool {
        log::info!("🗑️ DELETE {}", self.endpoint.item_path(self.id));
        self.perform(detail, ActionKind::Delete, self.api.delete(&self.endpoint, self.id))
            .await
            .is_some()
    }
}

/// Alta y edición
#[derive(Clone, PartialEq)]
pub struct FormViewModel {
    api: ApiClient,
    endpoint: DetailEndpoint,
}

impl FormViewModel {
    pub fn new(api: ApiClient, endpoint: DetailEndpoint) -> Self {
        Self { api, endpoint }
    }

    /// Carga la entidad a editar y rellena el formulario con ella
    pub async fn load_into<F>(
        &self,
        id: EntityId,
        detail: &ReactiveState<DetailController<F::Detail>>,
        form: &ReactiveState<FormState<F>>,
        cancel: &CancelToken,
    ) -> Applied
    where
        F: EntityForm,
        F::Detail: DeserializeOwned,
    {
        let ticket = detail.update(|detail| detail.begin_load());
        let result = self.api.get_detail::<F::Detail>(&self.endpoint, id, cancel).await;
        if let Ok(data) = &result {
            let fields = F::from_detail(data);
            form.update(|form| *form = FormState::new(fields));
        }
        detail.update(|detail| detail.apply(ticket, result))
    }

    /// `target = None` crea, `Some(id)` actualiza.
    /// Devuelve el id de la entidad para navegar a su detalle.
    pub async fn submit<F: EntityForm>(
        &self,
        form: &ReactiveState<FormState<F>>,
        target: Option<EntityId>,
    ) -> Option<EntityId> {
        if !form.update(|form| form.begin_submit()) {
            return None;
        }
        let payload = form.read(|form| form.fields.to_input());

        let result = match target {
            Some(id) => {
                log::info!("💾 PUT {}", self.endpoint.item_path(id));
                self.api.update(&self.endpoint, id, &payload).await
            }
            None => {
                log::info!("💾 POST {}", self.endpoint.path);
                self.api.create(&self.endpoint, &payload).await
            }
        };

        match result {
            Ok(saved) => {
                log::info!("✅ Guardado {} {}", self.endpoint.key, saved.id);
                form.update(|form| form.finish_submit());
                Some(saved.id)
            }
            Err(e) => {
                form.update(|form| form.fail_submit(&e));
                None
            }
        }
    }
}
