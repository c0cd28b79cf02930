pub mod discount_code_details;
pub mod discount_code_form;
pub mod discount_code_list;

pub use discount_code_details::DiscountCodeDetails;
pub use discount_code_form::DiscountCodeFormView;
pub use discount_code_list::DiscountCodeList;
