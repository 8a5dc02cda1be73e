//! HTTP API Client
//!
//! Functions for communicating with the prediction backend's REST API.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::model::{
    ApiErrorBody, DashboardSnapshot, HealthResponse, PredictionResult, RecentPredictionsResponse,
    SampleDataResponse, SampleInput, TimelineEvent,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Client-side failure taxonomy: the server answered with an error body, or
/// we never got a usable answer at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend replied with a non-success status and a reason.
    Server(String),
    /// Network failure or an unparseable response.
    Transport,
}

impl ApiError {
    /// Message for the notification widget.
    pub fn message(&self) -> String {
        match self {
            ApiError::Server(reason) => reason.clone(),
            ApiError::Transport => {
                "Could not reach the prediction service. Check your connection.".to_string()
            }
        }
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("diapredict_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Extract the server's error reason from a non-2xx response.
async fn server_error(response: gloo_net::http::Response) -> ApiError {
    match response.json::<ApiErrorBody>().await {
        Ok(body) => ApiError::Server(body.error),
        Err(_) => ApiError::Server(format!("Request failed ({})", response.status())),
    }
}

/// Submit the feature mapping and get a prediction back
pub async fn predict(features: &HashMap<String, f64>) -> Result<PredictionResult, ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/predict", api_base))
        .json(features)
        .map_err(|_| ApiError::Transport)?
        .send()
        .await
        .map_err(|_| ApiError::Transport)?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    let result: PredictionResult = response.json().await.map_err(|_| ApiError::Transport)?;

    if result.status != "success" {
        return Err(ApiError::Server("Prediction failed".to_string()));
    }

    Ok(result)
}

/// Fetch the example input sets
pub async fn fetch_samples() -> Result<Vec<SampleInput>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/sample-data", api_base))
        .send()
        .await
        .map_err(|_| ApiError::Transport)?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    let result: SampleDataResponse = response.json().await.map_err(|_| ApiError::Transport)?;

    Ok(result.samples)
}

/// Fetch the full analytics snapshot
pub async fn fetch_dashboard() -> Result<DashboardSnapshot, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/analytics/dashboard", api_base))
        .send()
        .await
        .map_err(|_| ApiError::Transport)?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    response.json().await.map_err(|_| ApiError::Transport)
}

/// Fetch the most recent prediction events
pub async fn fetch_recent_predictions(limit: usize) -> Result<Vec<TimelineEvent>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/analytics/predictions?limit={}", api_base, limit))
        .send()
        .await
        .map_err(|_| ApiError::Transport)?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    let result: RecentPredictionsResponse =
        response.json().await.map_err(|_| ApiError::Transport)?;

    Ok(result.predictions)
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/health", api_base))
        .send()
        .await
        .map_err(|_| ApiError::Transport)?;

    if !response.ok() {
        return Err(ApiError::Server("Service is not healthy".to_string()));
    }

    response.json().await.map_err(|_| ApiError::Transport)
}
