//! Trait abstraction for the prediction client to enable mocking in tests

use crate::state::FormValues;
use async_trait::async_trait;

use super::client::{PredictionClient, PredictionResponse, RequestError};

/// Trait for the prediction service exchange, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Submit the measurements and wait for the recommendation
    async fn predict(&self, values: &FormValues) -> Result<PredictionResponse, RequestError>;
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn predict(&self, values: &FormValues) -> Result<PredictionResponse, RequestError> {
        PredictionClient::predict(self, values).await
    }
}
