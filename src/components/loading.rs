//! Loading Component
//!
//! Loading spinners and overlay states.

use leptos::*;

/// Loading overlay for forms
#[component]
pub fn LoadingOverlay(
    #[prop(into)]
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="relative">
            {children()}

            {move || {
                if loading.get() {
                    view! {
                        <div class="absolute inset-0 bg-gray-900/50 flex items-center justify-center rounded-lg">
                            <div class="loading-spinner w-8 h-8" />
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Boot splash shown while the app initializes
#[component]
pub fn BootSplash() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 bg-gray-900 flex flex-col items-center justify-center space-y-4">
            <span class="text-5xl">"🩺"</span>
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-400 text-sm">"Loading DiaPredict..."</p>
        </div>
    }
}
