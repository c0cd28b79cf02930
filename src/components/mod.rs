pub mod admins;
pub mod app;
pub mod discount_codes;
pub mod navbar;
pub mod orders;
pub mod products;
pub mod shared;
pub mod sign_in;
pub mod users;

pub use app::App;
