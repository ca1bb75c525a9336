//! Prediction Service - core use case
//!
//! 1. Validate the chosen image (file or URL)
//! 2. Send exactly one classification request
//! 3. Select the results to show and attach cost estimates

use crate::config::Config;
use crate::input::load_payload;
use tuners_domain::service::build_report;
use tuners_types::{ImagePayload, ImageSource, ReportEntry, Result};
use tuners_vision::{Classifier, CustomVisionClient};

/// Runs predictions against a classifier
pub struct PredictionService<C> {
    classifier: C,
}

impl<C: Classifier> PredictionService<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classify one image and build the report. No retry on failure.
    pub async fn predict(&self, source: &ImageSource) -> Result<Vec<ReportEntry>> {
        let payload = load_payload(source)?;
        self.predict_payload(&payload).await
    }

    /// Same as [`predict`](Self::predict) for an already validated payload
    pub async fn predict_payload(&self, payload: &ImagePayload) -> Result<Vec<ReportEntry>> {
        tracing::debug!(payload = %payload.describe(), "Submitting image for classification");

        let classifications = match self.classifier.classify(payload).await {
            Ok(classifications) => classifications,
            Err(e) => {
                tracing::error!(error = %e, payload = %payload.describe(), "Prediction request failed");
                return Err(e);
            }
        };

        let report = build_report(&classifications);

        tracing::info!(
            returned = classifications.len(),
            shown = report.len(),
            "Prediction complete"
        );

        Ok(report)
    }
}

impl PredictionService<CustomVisionClient> {
    /// Build a service backed by the Custom Vision client
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = CustomVisionClient::new(config.client_config()?)?;
        Ok(Self::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tuners_types::{Classification, ConfigError, Error};

    /// Classifier returning canned results and counting calls
    struct FakeClassifier {
        response: Option<Vec<Classification>>,
        calls: AtomicUsize,
    }

    impl FakeClassifier {
        fn returning(results: Vec<Classification>) -> Self {
            Self {
                response: Some(results),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Classifier for FakeClassifier {
        async fn classify(&self, _payload: &ImagePayload) -> Result<Vec<Classification>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Some(results) => Ok(results.clone()),
                None => Err(Error::Api {
                    status: 503,
                    body: "Service Unavailable".to_string(),
                }),
            }
        }
    }

    fn url_source() -> ImageSource {
        ImageSource::Url("https://images.example.com/truck.jpg".to_string())
    }

    #[tokio::test]
    async fn test_predict_builds_report() {
        let service = PredictionService::new(FakeClassifier::returning(vec![
            Classification::new("Sedan", 0.80),
            Classification::new("Hatchback", 0.05),
            Classification::new("Truck", 0.90),
        ]));

        let report = service.predict(&url_source()).await.unwrap();

        assert_eq!(service.classifier().calls(), 1);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].category, "Truck");
        assert_eq!(report[0].cost.insurance_cost, "$1200/year");
        assert_eq!(report[1].category, "Sedan");
    }

    #[tokio::test]
    async fn test_predict_empty_predictions() {
        let service = PredictionService::new(FakeClassifier::returning(Vec::new()));
        let report = service.predict(&url_source()).await.unwrap();
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_api_failure_is_not_retried() {
        let service = PredictionService::new(FakeClassifier::failing());
        let result = service.predict(&url_source()).await;

        assert!(matches!(result, Err(Error::Api { status: 503, .. })));
        assert_eq!(service.classifier().calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_sends_nothing() {
        let service = PredictionService::new(FakeClassifier::returning(Vec::new()));

        let missing = ImageSource::File(PathBuf::from("/definitely/not/here.jpg"));
        assert!(matches!(service.predict(&missing).await, Err(Error::FileNotFound(_))));

        let bad_url = ImageSource::Url("mailto:someone@example.com".to_string());
        assert!(matches!(service.predict(&bad_url).await, Err(Error::InvalidUrl(_))));

        assert_eq!(service.classifier().calls(), 0);
    }

    #[test]
    fn test_from_config_requires_settings() {
        let result = PredictionService::from_config(&Config::default());
        assert!(matches!(result, Err(Error::Config(ConfigError::Missing(_)))));
    }
}
