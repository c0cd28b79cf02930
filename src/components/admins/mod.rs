pub mod admin_details;
pub mod admin_form;
pub mod admin_list;

pub use admin_details::AdminDetails;
pub use admin_form::AdminFormView;
pub use admin_list::AdminList;
