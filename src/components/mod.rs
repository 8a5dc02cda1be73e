//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod charts;
pub mod counter;
pub mod field_input;
pub mod files;
pub mod loading;
pub mod nav;
pub mod toast;

pub use counter::AnimatedCounter;
pub use field_input::FieldInput;
pub use loading::LoadingOverlay;
pub use nav::Nav;
pub use toast::Toast;
