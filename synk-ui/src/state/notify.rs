//! Toast notifications
//!
//! Success and error messages shown by [`Toast`](crate::components::Toast),
//! each cleared by its own timer.

use gloo_timers::callback::Timeout;
use leptos::*;

const SUCCESS_MS: u32 = 3000;
const ERROR_MS: u32 = 5000;

#[derive(Clone, Copy)]
pub struct Notifications {
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl Notifications {
    fn new() -> Self {
        Self {
            success: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        show_for(self.success, message, SUCCESS_MS);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        show_for(self.error, message, ERROR_MS);
    }
}

fn show_for(signal: RwSignal<Option<String>>, message: &str, millis: u32) {
    let message = message.to_string();
    signal.set(Some(message.clone()));

    // a newer message keeps its full duration
    Timeout::new(millis, move || {
        if signal.get_untracked().as_deref() == Some(message.as_str()) {
            signal.set(None);
        }
    })
    .forget();
}

/// Provide notifications to the component tree
pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}
