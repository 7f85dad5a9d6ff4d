//! UI Components
//!
//! Reusable Leptos components for the expense tracker.

pub mod chart;
pub mod expense_form;
pub mod expense_table;
pub mod summary;
pub mod toast;

pub use chart::ExpenseChart;
pub use expense_form::ExpenseForm;
pub use expense_table::ExpenseTable;
pub use summary::Summary;
pub use toast::Toast;
