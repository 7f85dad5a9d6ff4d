//! Expense Tracker
//!
//! Personal expense tracker client built with Leptos (WASM).
//!
//! # Features
//!
//! - Expense entry with category, date, and optional note
//! - Expense list with per-category pie chart and monthly total
//! - CSV export via the server's `/export` endpoint
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It talks to the expense server over three same-origin
//! endpoints: `GET /data`, `POST /add`, and `GET /export`. All totals are
//! computed server-side; the client only renders what the server supplies.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
