//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::notify::{Severity, ToastSlot};

/// Auto-dismiss delay for notifications, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 3000;

/// Exit animation duration before a dismissed toast is dropped.
pub const TOAST_EXIT_MS: u32 = 300;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The single notification slot.
    pub toast: RwSignal<ToastSlot>,
    /// Backend reachability, from the startup health probe.
    pub api_connected: RwSignal<bool>,
    /// Global loading state
    pub loading: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        toast: create_rw_signal(ToastSlot::new()),
        api_connected: create_rw_signal(false),
        loading: create_rw_signal(false),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a notification, replacing whatever occupies the slot. After
    /// [`TOAST_DISMISS_MS`] the toast animates out for [`TOAST_EXIT_MS`],
    /// then it is removed. Superseded toasts' timers match against the id
    /// inside the slot and leave the replacement alone.
    pub fn notify(&self, severity: Severity, message: &str) {
        let toast = self.toast;
        let id = toast
            .try_update(|slot| slot.show(severity, message))
            .unwrap_or(0);

        gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
            let leaving = toast
                .try_update(|slot| slot.begin_dismiss(id))
                .unwrap_or(false);
            if leaving {
                gloo_timers::callback::Timeout::new(TOAST_EXIT_MS, move || {
                    toast.update(|slot| slot.finish_dismiss(id));
                })
                .forget();
            }
        })
        .forget();
    }

    pub fn show_success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    pub fn show_error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    pub fn show_info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    pub fn show_warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }
}
