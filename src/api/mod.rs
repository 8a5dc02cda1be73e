//! Backend API
//!
//! HTTP client for the prediction service.

pub mod client;

pub use client::{check_health, fetch_dashboard, fetch_recent_predictions, fetch_samples, predict};
