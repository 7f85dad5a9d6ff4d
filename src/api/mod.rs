//! API Layer
//!
//! HTTP client and wire types for the expense tracker endpoints.

pub mod client;

pub use client::{
    fetch_data, submit_expense, ApiFailure, CategoryTotal, DataSnapshot, Expense, NewExpense,
};
