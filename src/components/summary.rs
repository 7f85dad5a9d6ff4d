//! Summary Component
//!
//! Monthly total card and the CSV export trigger.

use leptos::*;

use crate::components::expense_table::format_amount;
use crate::state::global::GlobalState;

/// Monthly total and export controls
#[component]
pub fn Summary() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Export rides on plain navigation; the server's content-disposition
    // turns it into a download. Completion cannot be observed, so the
    // notification only reports that the export started.
    let on_export = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/export");
        }
        state.notify("Exporting data...", false);
    };

    view! {
        <div class="flex items-center justify-between bg-white rounded-xl shadow p-6">
            <div>
                <div class="text-sm text-gray-500">"This Month"</div>
                <div class="text-3xl font-bold">
                    {move || format_amount(state.monthly_total.get())}
                </div>
            </div>

            <button
                on:click=on_export
                class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white
                       rounded-lg font-medium transition-colors"
            >
                "Export CSV"
            </button>
        </div>
    }
}
