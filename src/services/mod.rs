pub mod api_client;
pub mod auth_service;
pub mod cancellation;
pub mod endpoints;
pub mod http;
pub mod order_service;
pub mod product_service;
pub mod web_transport;

#[cfg(test)]
pub mod testing;

pub use api_client::ApiClient;
pub use cancellation::{CancelScope, CancelToken};
pub use http::{ApiRequest, HttpTransport, Method};
