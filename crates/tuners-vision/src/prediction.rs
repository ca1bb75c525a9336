//! Wire format of the Custom Vision prediction API

use serde::{Deserialize, Serialize};
use tuners_types::{Classification, Result};

/// Request body for URL-based classification
#[derive(Debug, Serialize)]
pub struct UrlRequest<'a> {
    #[serde(rename = "Url")]
    pub url: &'a str,
}

/// Region of the image a prediction applies to (object detection projects)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A single tag prediction
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub tag_name: String,
    pub probability: f64,
    #[serde(default)]
    pub tag_id: Option<String>,
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
}

impl From<Prediction> for Classification {
    fn from(p: Prediction) -> Self {
        Classification::new(p.tag_name, p.probability)
    }
}

/// Prediction response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub iteration: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    pub predictions: Vec<Prediction>,
}

impl PredictionResponse {
    pub fn into_classifications(self) -> Vec<Classification> {
        self.predictions.into_iter().map(Classification::from).collect()
    }
}

/// Parse a prediction response body into classifications, in response order
pub fn parse_response(body: &str) -> Result<Vec<Classification>> {
    let response: PredictionResponse = serde_json::from_str(body)?;
    Ok(response.into_classifications())
}
