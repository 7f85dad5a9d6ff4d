//! Global Application State
//!
//! Reactive state management using Leptos signals. Holds the current
//! server snapshot (expenses, category totals, monthly total), the
//! notification surface, and the data-refresh pipeline.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api;
use crate::api::{ApiFailure, CategoryTotal, Expense};

/// How long a notification stays visible, in milliseconds.
const NOTICE_DURATION_MS: u32 = 3_000;

/// A transient user-visible message.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Expenses from the last successful fetch, newest first
    pub expenses: RwSignal<Vec<Expense>>,
    /// Per-category totals for the pie chart
    pub categories: RwSignal<Vec<CategoryTotal>>,
    /// Total spent in the current month
    pub monthly_total: RwSignal<f64>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Currently displayed notification, if any
    pub notice: RwSignal<Option<Notice>>,
    /// Pending hide-timer for the notification. At most one is live;
    /// replacing it drops (and thereby cancels) the previous one, so an
    /// old timer can never hide a newer message.
    hide_timer: StoredValue<Option<Timeout>>,
    /// Sequence number of the most recently issued refresh. Responses to
    /// older refreshes are discarded rather than applied out of order.
    refresh_seq: StoredValue<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        expenses: create_rw_signal(Vec::new()),
        categories: create_rw_signal(Vec::new()),
        monthly_total: create_rw_signal(0.0),
        loading: create_rw_signal(false),
        notice: create_rw_signal(None),
        hide_timer: store_value(None),
        refresh_seq: store_value(0),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a notification and schedule it to hide after a fixed delay.
    ///
    /// Each call cancels any previously scheduled hide-timer before
    /// arming its own.
    pub fn notify(&self, message: &str, is_error: bool) {
        self.notice.set(Some(Notice {
            message: message.to_string(),
            is_error,
        }));

        let notice = self.notice;
        let slot = self.hide_timer;
        let timer = Timeout::new(NOTICE_DURATION_MS, move || {
            notice.set(None);
            slot.set_value(None);
        });
        self.hide_timer.set_value(Some(timer));
    }

    /// Fetch the current dataset and re-render list, chart, and total.
    ///
    /// On success all three signals are replaced unconditionally; on any
    /// failure none of them is touched and the user is notified instead.
    /// If another refresh was issued while this one was in flight, its
    /// result is discarded entirely.
    pub async fn refresh(&self) {
        let seq = self.next_refresh_seq();
        self.loading.set(true);

        let result = api::fetch_data().await;

        if !self.is_current_refresh(seq) {
            return;
        }
        self.loading.set(false);

        if let Err(ApiFailure::Transport(detail)) = &result {
            web_sys::console::error_1(&detail.as_str().into());
        }

        if let Some(notice) = self.apply_refresh_result(result) {
            self.notify(&notice.message, notice.is_error);
        }
    }

    /// Install a successful snapshot into the three render signals, or
    /// leave every data signal untouched and hand back the one notice to
    /// surface for the failure.
    fn apply_refresh_result(
        &self,
        result: Result<api::DataSnapshot, ApiFailure>,
    ) -> Option<Notice> {
        match result {
            Ok(snapshot) => {
                self.expenses.set(snapshot.expenses);
                self.categories.set(snapshot.categories);
                self.monthly_total.set(snapshot.monthly_total);
                None
            }
            Err(ApiFailure::Application(message)) => Some(Notice {
                message: format!("Error: {}", message),
                is_error: true,
            }),
            Err(ApiFailure::Transport(_)) => Some(Notice {
                message: "Error: Could not fetch data".to_string(),
                is_error: true,
            }),
        }
    }

    fn next_refresh_seq(&self) -> u64 {
        let seq = self.refresh_seq.with_value(|s| *s) + 1;
        self.refresh_seq.set_value(seq);
        seq
    }

    fn is_current_refresh(&self, seq: u64) -> bool {
        self.refresh_seq.with_value(|s| *s) == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DataSnapshot;

    fn test_state() -> GlobalState {
        GlobalState {
            expenses: create_rw_signal(Vec::new()),
            categories: create_rw_signal(Vec::new()),
            monthly_total: create_rw_signal(0.0),
            loading: create_rw_signal(false),
            notice: create_rw_signal(None),
            hide_timer: store_value(None),
            refresh_seq: store_value(0),
        }
    }

    fn seeded_state() -> GlobalState {
        let state = test_state();
        state.expenses.set(vec![Expense {
            amount: 12.5,
            category: "Food".to_string(),
            date: "2026-08-01".to_string(),
            note: None,
        }]);
        state.categories.set(vec![CategoryTotal {
            category: "Food".to_string(),
            total: 12.5,
        }]);
        state.monthly_total.set(12.5);
        state
    }

    #[test]
    fn successful_refresh_replaces_all_three_render_signals() {
        let runtime = create_runtime();
        let state = seeded_state();

        let notice = state.apply_refresh_result(Ok(DataSnapshot {
            expenses: Vec::new(),
            categories: Vec::new(),
            monthly_total: 0.0,
        }));

        assert_eq!(notice, None);
        assert!(state.expenses.get_untracked().is_empty());
        assert!(state.categories.get_untracked().is_empty());
        assert_eq!(state.monthly_total.get_untracked(), 0.0);

        runtime.dispose();
    }

    #[test]
    fn transport_failure_leaves_data_untouched_and_yields_one_generic_notice() {
        let runtime = create_runtime();
        let state = seeded_state();

        let notice = state
            .apply_refresh_result(Err(ApiFailure::Transport("Network error: refused".into())));

        assert_eq!(
            notice,
            Some(Notice {
                message: "Error: Could not fetch data".to_string(),
                is_error: true,
            })
        );
        assert_eq!(state.expenses.get_untracked().len(), 1);
        assert_eq!(state.categories.get_untracked().len(), 1);
        assert_eq!(state.monthly_total.get_untracked(), 12.5);

        runtime.dispose();
    }

    #[test]
    fn application_failure_surfaces_server_message_verbatim() {
        let runtime = create_runtime();
        let state = seeded_state();

        let notice =
            state.apply_refresh_result(Err(ApiFailure::Application("database locked".into())));

        assert_eq!(
            notice,
            Some(Notice {
                message: "Error: database locked".to_string(),
                is_error: true,
            })
        );
        assert_eq!(state.expenses.get_untracked().len(), 1);
        assert_eq!(state.monthly_total.get_untracked(), 12.5);

        runtime.dispose();
    }
}
