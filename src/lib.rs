// ============================================================================
// BACK OFFICE ADMIN - Yew + MVVM
// ============================================================================
// - Components: vistas (sin lógica de red)
// - Hooks: conectan vistas con viewmodels y re-renderizan
// - ViewModels: orquestan fetch, paginación y acciones
// - State: controladores de vista (listado, detalle, formulario)
// - Services: SOLO comunicación API
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Punto de entrada: panic hook, logging y render de la app
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Back office arrancando (API: {})", CONFIG.api_url());

    yew::Renderer::<App>::new().render();
}
