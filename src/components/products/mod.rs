pub mod product_details;
pub mod product_form;
pub mod product_list;

pub use product_details::ProductDetails;
pub use product_form::ProductFormView;
pub use product_list::ProductList;
