//! Expense Form Component
//!
//! Form for recording a new expense. On a successful submit the fields
//! are cleared, the date resets to today, and a full data refresh runs.

use leptos::*;

use crate::api;
use crate::api::{ApiFailure, NewExpense};
use crate::state::global::GlobalState;

/// Categories offered in the form's select
const CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Utilities",
    "Health",
    "Other",
];

/// Today's date in the `YYYY-MM-DD` form expected by date inputs.
fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Expense entry form
#[component]
pub fn ExpenseForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (amount, set_amount) = create_signal(String::new());
    let (category, set_category) = create_signal(CATEGORIES[0].to_string());
    let (date, set_date) = create_signal(today_iso());
    let (note, set_note) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // The browser's native validation has already run; amounts that
        // still fail to parse are rejected without a request.
        let Ok(parsed_amount) = amount.get().parse::<f64>() else {
            state.notify("Error: Invalid amount", true);
            return;
        };

        let expense = NewExpense {
            amount: parsed_amount,
            category: category.get(),
            date: date.get(),
            note: note.get(),
        };

        set_submitting.set(true);

        spawn_local(async move {
            match api::submit_expense(&expense).await {
                Ok(()) => {
                    state.notify("Expense added successfully!", false);
                    set_amount.set(String::new());
                    set_category.set(CATEGORIES[0].to_string());
                    set_date.set(today_iso());
                    set_note.set(String::new());

                    state.refresh().await;
                }
                Err(ApiFailure::Application(message)) => {
                    state.notify(&format!("Error: {}", message), true);
                }
                Err(ApiFailure::Transport(detail)) => {
                    web_sys::console::error_1(&detail.into());
                    state.notify("Error: Could not connect to server", true);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-500 mb-2">"Amount"</label>
                <input
                    type="number"
                    step="0.01"
                    min="0.01"
                    required
                    placeholder="0.00"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                           focus:border-indigo-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-500 mb-2">"Category"</label>
                <select
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                    prop:value=move || category.get()
                    class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                           focus:border-indigo-500 focus:outline-none"
                >
                    {CATEGORIES.into_iter().map(|cat| view! {
                        <option value=cat>{cat}</option>
                    }).collect_view()}
                </select>
            </div>

            <div>
                <label class="block text-sm text-gray-500 mb-2">"Date"</label>
                <input
                    type="date"
                    required
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                    class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                           focus:border-indigo-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-500 mb-2">"Note (optional)"</label>
                <input
                    type="text"
                    placeholder="What was this for?"
                    prop:value=move || note.get()
                    on:input=move |ev| set_note.set(event_target_value(&ev))
                    class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                           focus:border-indigo-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-400
                       disabled:cursor-not-allowed text-white rounded-lg py-3 font-semibold
                       transition-colors"
            >
                {move || if submitting.get() { "Saving..." } else { "Add Expense" }}
            </button>
        </form>
    }
}
