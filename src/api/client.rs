//! HTTP client for the remote crop prediction service
//!
//! One request/response exchange per submission: the seven raw string
//! values are POSTed as JSON and the service answers with the
//! recommended crop. No retries; there is deliberately no client-side
//! timeout or cancellation, matching the service contract.

use crate::state::FormValues;
use serde::Deserialize;

/// Prediction endpoint, fixed at build time
pub const PREDICTION_ENDPOINT: &str = "https://cropcast-2.onrender.com";

/// Successful answer from the prediction service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictionResponse {
    pub predicted_crop: String,
}

/// Why a submission failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Non-success HTTP status, or a body that is not the expected JSON.
    /// The two are intentionally surfaced through the same generic message.
    #[error("Prediction failed")]
    Failed,

    /// Network failure before a response was received; carries the
    /// transport's own message
    #[error("{0}")]
    Transport(String),
}

/// Client for the crop prediction service
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictionClient {
    /// Create a client against the fixed production endpoint
    pub fn new() -> Self {
        Self::with_endpoint(PREDICTION_ENDPOINT)
    }

    /// Create a client against a specific endpoint (tests only)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submit the measurements and wait for the recommendation
    pub async fn predict(&self, values: &FormValues) -> Result<PredictionResponse, RequestError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(values)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "prediction service returned an error status");
            return Err(RequestError::Failed);
        }

        response
            .json::<PredictionResponse>()
            .await
            .map_err(|_| RequestError::Failed)
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new()
    }
}
