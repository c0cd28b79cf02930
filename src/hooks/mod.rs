pub mod session_context;
pub mod use_location;
pub mod use_resource;
pub mod use_session;

pub use session_context::{use_api, SessionContextProvider};
pub use use_location::{use_location, use_navigator, UseLocationHandle};
pub use use_resource::{
    use_cancel_scope, use_entity_form, use_reactive, use_resource_detail, use_resource_list,
    UseEntityFormHandle, UseResourceDetailHandle, UseResourceListHandle,
};
pub use use_session::{use_session, UseSessionHandle};
