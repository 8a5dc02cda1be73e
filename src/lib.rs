//! DiaPredict frontend
//!
//! Browser-side presentation layer for a diabetes-risk prediction service:
//! a prediction form page and an analytics dashboard, both talking HTTP+JSON
//! to an external backend.
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. By default the crate builds as a host stub containing only
//! the pure form/dashboard logic (validation, wire types, chart registry,
//! report/export templates), so unit tests run without a wasm toolchain.
//! Enable the real app with `--features web` on a wasm32 target.

pub mod export;
pub mod fields;
pub mod model;
pub mod notify;
pub mod registry;
pub mod report;
pub mod timefmt;
pub mod validation;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod api;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod app;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod components;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod pages;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod state;

/// Mount the app to the document body.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn start() {
    // Set up panic hook for better error messages in WASM.
    console_error_panic_hook::set_once();

    leptos::mount_to_body(|| leptos::view! { <app::App /> });
}

/// Placeholder for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn start() {
    // No-op.
}
