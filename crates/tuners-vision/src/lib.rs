//! Vision module - vehicle image classification through Custom Vision

pub mod client;
pub mod prediction;

pub use client::{ClientConfig, CustomVisionClient, PREDICTION_KEY_HEADER};
pub use prediction::{parse_response, Prediction, PredictionResponse};

use async_trait::async_trait;
use tuners_types::{Classification, ImagePayload, Result};

/// Anything that can turn an image into labeled probabilities
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify one image. Results come back in the service's order.
    async fn classify(&self, payload: &ImagePayload) -> Result<Vec<Classification>>;
}
