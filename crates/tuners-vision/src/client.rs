//! HTTP client for the Custom Vision prediction endpoints

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Request};
use std::time::Duration;
use tuners_types::{Classification, ConfigError, Error, ImagePayload, Result};

use crate::prediction::{parse_response, UrlRequest};
use crate::Classifier;

/// Header carrying the prediction secret
pub const PREDICTION_KEY_HEADER: &str = "Prediction-Key";

const JSON_CONTENT_TYPE: &str = "application/json";
const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// Endpoint and credential settings for the client
///
/// Each endpoint is only needed for its own payload kind, so either may be
/// left unset.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Endpoint for URL-based classification
    pub endpoint_url: Option<String>,
    /// Endpoint for file-based classification
    pub endpoint_file: Option<String>,
    pub prediction_key: String,
    /// Whole-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(prediction_key: impl Into<String>) -> Self {
        Self {
            prediction_key: prediction_key.into(),
            ..Default::default()
        }
    }

    pub fn with_endpoint_url(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint.into());
        self
    }

    pub fn with_endpoint_file(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_file = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for a Custom Vision classification project
pub struct CustomVisionClient {
    client: Client,
    config: ClientConfig,
}

impl CustomVisionClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Build the POST request for a payload without sending it.
    /// Fails with `ConfigError::Missing` if the payload's endpoint is unset.
    pub fn build_request(&self, payload: &ImagePayload) -> Result<Request> {
        let builder = match payload {
            ImagePayload::Url(url) => {
                let target = endpoint(&self.config.endpoint_url, "endpoint_url")?;
                let body = serde_json::to_vec(&UrlRequest { url: url.as_str() })?;
                self.client
                    .post(target)
                    .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                    .body(body)
            }
            ImagePayload::Bytes(bytes) => self
                .client
                .post(endpoint(&self.config.endpoint_file, "endpoint_file")?)
                .header(CONTENT_TYPE, OCTET_STREAM_CONTENT_TYPE)
                .body(bytes.clone()),
        };

        Ok(builder
            .header(PREDICTION_KEY_HEADER, &self.config.prediction_key)
            .build()?)
    }
}

fn endpoint<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(Error::Config(ConfigError::Missing(name)))
}

#[async_trait]
impl Classifier for CustomVisionClient {
    async fn classify(&self, payload: &ImagePayload) -> Result<Vec<Classification>> {
        let request = self.build_request(payload)?;

        tracing::debug!(
            url = %request.url(),
            payload = %payload.describe(),
            "Sending classification request"
        );

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let classifications = parse_response(&body)?;

        tracing::debug!(
            status = status.as_u16(),
            count = classifications.len(),
            "Received classifications"
        );

        Ok(classifications)
    }
}
