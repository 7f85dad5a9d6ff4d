//! App Root Component
//!
//! Page layout, global state provider, and the initial data load.

use leptos::*;

use crate::components::{ExpenseChart, ExpenseForm, ExpenseTable, Summary, Toast};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch initial data on mount
    create_effect(move |_| {
        spawn_local(async move {
            state.refresh().await;
        });
    });

    view! {
        <div class="min-h-screen bg-gray-100 text-gray-900">
            <header class="bg-white shadow">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"💸"</span>
                        <h1 class="text-xl font-bold">"Expense Tracker"</h1>
                    </div>

                    {move || {
                        if state.loading.get() {
                            view! {
                                <span class="text-sm text-gray-400">"Loading..."</span>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>
            </header>

            <main class="container mx-auto px-4 py-8 space-y-8">
                <Summary />

                <div class="grid md:grid-cols-2 gap-8">
                    <section class="bg-white rounded-xl shadow p-6">
                        <h2 class="text-xl font-semibold mb-4">"Add Expense"</h2>
                        <ExpenseForm />
                    </section>

                    <section class="bg-white rounded-xl shadow p-6">
                        <h2 class="text-xl font-semibold mb-4">"Spending by Category"</h2>
                        <ExpenseChart />
                    </section>
                </div>

                <section class="bg-white rounded-xl shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Expenses"</h2>
                    <ExpenseTable />
                </section>
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
