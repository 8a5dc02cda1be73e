//! Toast Notification Component
//!
//! Renders the single notification slot from global state. A leaving toast
//! plays its exit animation before the slot is cleared.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50">
            {move || {
                state.toast.with(|slot| slot.current().cloned()).map(|toast| {
                    let animation = if toast.leaving {
                        "animate-slide-out"
                    } else {
                        "animate-slide-in"
                    };
                    view! {
                        <div class=format!(
                            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg \
                             shadow-lg transform transition-all duration-300 ease-out {}",
                            toast.severity.bg_class(),
                            animation
                        )>
                            <span class="text-lg">{toast.severity.icon()}</span>
                            <span class="text-sm font-medium">{toast.text}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
