//! Expense Table Component
//!
//! Renders the fetched expense list, newest first.

use chrono::NaiveDate;
use leptos::*;

use crate::state::global::GlobalState;

/// Table of all recorded expenses
#[component]
pub fn ExpenseTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-left">
                <thead>
                    <tr class="border-b border-gray-200 text-sm text-gray-500">
                        <th class="py-2 pr-4">"Date"</th>
                        <th class="py-2 pr-4">"Category"</th>
                        <th class="py-2 pr-4">"Amount"</th>
                        <th class="py-2">"Note"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let expenses = state.expenses.get();

                        if expenses.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="4" class="py-4 text-center text-gray-400">
                                        "No expenses found"
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            expenses.into_iter().map(|expense| {
                                let date = format_date(&expense.date);
                                let amount = format_amount(expense.amount);
                                let note = display_note(expense.note.as_deref());

                                view! {
                                    <tr class="border-b border-gray-100 last:border-0">
                                        <td class="py-2 pr-4">{date}</td>
                                        <td class="py-2 pr-4">{expense.category}</td>
                                        <td class="py-2 pr-4 font-medium">{amount}</td>
                                        <td class="py-2 text-gray-500">{note}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Render a `YYYY-MM-DD` date for display; unparseable input is shown
/// as received.
pub fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Currency-format an amount to two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Note column content: the note, or a dash when absent or empty.
pub fn display_note(note: Option<&str>) -> String {
    match note {
        Some(note) if !note.is_empty() => note.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_human_readable() {
        assert_eq!(format_date("2026-08-26"), "Aug 26, 2026");
        assert_eq!(format_date("2026-01-05"), "Jan 05, 2026");
    }

    #[test]
    fn bad_dates_pass_through_unchanged() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn amounts_get_two_decimals() {
        assert_eq!(format_amount(12.5), "₹12.50");
        assert_eq!(format_amount(0.999), "₹1.00");
        assert_eq!(format_amount(1000.0), "₹1000.00");
    }

    #[test]
    fn missing_or_empty_notes_show_a_dash() {
        assert_eq!(display_note(Some("groceries")), "groceries");
        assert_eq!(display_note(Some("")), "-");
        assert_eq!(display_note(None), "-");
    }
}
