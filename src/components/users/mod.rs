pub mod user_details;
pub mod user_list;

pub use user_details::UserDetails;
pub use user_list::UserList;
