pub mod confirm_modal;
pub mod data_table;
pub mod field;
pub mod file_modal;
pub mod form_field;
pub mod notice;
pub mod spinner;
pub mod tags;

pub use confirm_modal::ConfirmModal;
pub use data_table::{resource_table, DataTable, RowEditButton, TableRow};
pub use field::{DetailField, PageHeader};
pub use file_modal::FileModal;
pub use form_field::{on_submit, CheckboxField, FormFooter, SelectField, TextField};
pub use notice::{ErrorMessage, Notice};
pub use spinner::{FullPageSpinner, Spinner};
pub use tags::BoolTag;
