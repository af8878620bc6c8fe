//! UI Notices
//!
//! Toast messages and the global loading flag, provided once at the app root.

use leptos::*;

/// App-wide notice state provided to all components
#[derive(Clone, Copy)]
pub struct Notices {
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
}

/// Provide notice state to the component tree
pub fn provide_notices() {
    provide_context(Notices {
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        loading: create_rw_signal(false),
    });
}

pub fn use_notices() -> Notices {
    use_context::<Notices>().expect("Notices not found")
}

impl Notices {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
