//! Toast Notification Component
//!
//! Shows the current transient message, if any. Visibility and timing
//! are owned by `GlobalState::notify`.

use leptos::*;

use crate::state::global::GlobalState;

/// Error notification background
const ERROR_COLOR: &str = "#EF4444";
/// Success notification background
const SUCCESS_COLOR: &str = "#10B981";

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 right-4 z-50">
            {move || {
                state.notice.get().map(|notice| {
                    let bg = if notice.is_error { ERROR_COLOR } else { SUCCESS_COLOR };
                    view! {
                        <div
                            class="text-white px-4 py-3 rounded-lg shadow-lg"
                            style=format!("background-color: {}", bg)
                        >
                            <span class="text-sm font-medium">{notice.message}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
