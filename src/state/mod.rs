// ============================================================================
// STATE MODULE - Controladores de vista con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod view_state;
pub mod list_state;
pub mod detail_state;
pub mod form_state;

pub use reactivity::*;
pub use view_state::*;
pub use list_state::*;
pub use detail_state::*;
pub use form_state::*;
