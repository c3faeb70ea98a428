use crate::models::Prediction;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/google/vit-base-patch16-224";

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Failed to reach classifier: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Classifier returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Unexpected classifier response: {0}")]
    UnexpectedResponse(#[source] serde_json::Error),
}

/// Client for the remote image-classification model.
///
/// Built once at startup and shared between requests; the underlying
/// `reqwest::Client` keeps its own connection pool.
#[derive(Debug, Clone)]
pub struct Classifier {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl Classifier {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the raw image bytes to the model and returns the detected labels,
    /// lowercased and in the order the model ranked them.
    pub async fn classify(&self, image: Vec<u8>) -> Result<Vec<String>, ClassifyError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ClassifyError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let predictions: Vec<Prediction> =
            serde_json::from_slice(&body).map_err(ClassifyError::UnexpectedResponse)?;

        if let Some(top) = predictions.first() {
            tracing::debug!(label = %top.label, confidence = top.score, "top prediction");
        }

        Ok(predictions
            .into_iter()
            .map(|p| p.label.to_lowercase())
            .collect())
    }
}
