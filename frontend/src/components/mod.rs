pub mod amount_display;
pub mod budget_form;
pub mod budget_tracker;
pub mod date_picker;
pub mod error_message;
pub mod expense_detail;
pub mod expense_form;
pub mod expense_list;
pub mod expense_modal;
pub mod filter_by_category;
