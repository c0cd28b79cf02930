pub mod session_viewmodel;
pub mod resource_viewmodel;
pub mod product_viewmodel;
pub mod order_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use resource_viewmodel::{DetailViewModel, FormViewModel, ListViewModel};
