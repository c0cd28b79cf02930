// ============================================================================
// VIEW STATE - Ciclo de vida de los datos de una vista
// ============================================================================
//   Loading → Ready(data) → Refreshing(stale) → Ready(new)
//   Ready → Error { stale, message } tras una mutación fallida
//   Error → Ready con el siguiente fetch correcto
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Refreshing(T),
    Error { stale: T, message: String },
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    /// Datos visibles (también los "stale" mientras se refresca o tras un error)
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready(data) | ViewState::Refreshing(data) => Some(data),
            ViewState::Error { stale, .. } => Some(stale),
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready(data) | ViewState::Refreshing(data) => Some(data),
            ViewState::Error { stale, .. } => Some(stale),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Hay una petición de lectura en curso
    pub fn is_fetching(&self) -> bool {
        matches!(self, ViewState::Loading | ViewState::Refreshing(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Saca los datos dejando `Loading` en su lugar
    pub fn take_data(&mut self) -> Option<T> {
        match std::mem::take(self) {
            ViewState::Loading => None,
            ViewState::Ready(data) | ViewState::Refreshing(data) => Some(data),
            ViewState::Error { stale, .. } => Some(stale),
        }
    }

    /// Ready/Error → Refreshing conservando los datos; Loading sigue en Loading
    pub fn into_refreshing(&mut self) {
        if let Some(data) = self.take_data() {
            *self = ViewState::Refreshing(data);
        }
    }

    /// Refreshing/Error → Ready conservando los datos
    pub fn settle(&mut self) {
        if let Some(data) = self.take_data() {
            *self = ViewState::Ready(data);
        }
    }

    /// Mutación fallida: los datos siguen visibles junto al mensaje
    pub fn fail(&mut self, message: String) {
        if let Some(stale) = self.take_data() {
            *self = ViewState::Error { stale, message };
        }
    }
}

/// Identifica un fetch emitido. Solo se aplica el resultado del último.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    /// Página pedida; `None` en la carga inicial
    pub page: Option<u32>,
}

/// Qué pasó con un resultado entregado al controlador
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// Datos nuevos en pantalla
    Updated,
    /// El fetch falló; la vista quedó degradada o revertida
    Degraded,
    /// Había un fetch más reciente; el resultado se descartó
    Superseded,
    /// La vista lo canceló; el resultado se descartó
    Cancelled,
}

/// Contador de secuencia compartido por list/detail
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequencer {
    latest: u64,
}

impl Sequencer {
    pub fn issue(&mut self, page: Option<u32>) -> FetchTicket {
        self.latest += 1;
        FetchTicket {
            seq: self.latest,
            page,
        }
    }

    pub fn is_latest(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.latest
    }
}
