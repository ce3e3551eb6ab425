//! Client module for the crop prediction HTTP service

mod client;
mod traits;

pub use client::{PredictionClient, PredictionResponse, RequestError};
pub use traits::PredictionApi;

#[cfg(test)]
pub use traits::MockPredictionApi;
