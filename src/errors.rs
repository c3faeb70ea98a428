use crate::classifier::ClassifyError;
use crate::models::ErrorBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The request body could not be read as multipart form data
    #[error("Form parse error: {0}")]
    FormParse(String),

    /// The form had no `file` part
    #[error("No file uploaded")]
    MissingFile,

    /// Spooling the upload to disk or reading it back failed
    #[error("Could not store upload: {0}")]
    Upload(String),

    #[error(transparent)]
    Classification(#[from] ClassifyError),
}

impl AnalyzeError {
    /// Message sent to the caller. Internal detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalyzeError::FormParse(_) => "Form parse error",
            AnalyzeError::MissingFile => "No file uploaded",
            AnalyzeError::Upload(_) => "Could not store upload",
            AnalyzeError::Classification(_) => "Hugging Face API error",
        }
    }
}

impl ResponseError for AnalyzeError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::MissingFile => StatusCode::BAD_REQUEST,
            AnalyzeError::FormParse(_)
            | AnalyzeError::Upload(_)
            | AnalyzeError::Classification(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AnalyzeError::MissingFile => tracing::debug!("Client error: {}", self),
            _ => tracing::error!("Analyze request failed: {}", self),
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.user_message().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: AnalyzeError) -> (StatusCode, ErrorBody) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn missing_file_is_a_client_error() {
        let (status, body) = body_of(AnalyzeError::MissingFile).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "No file uploaded");
    }

    #[actix_web::test]
    async fn internal_detail_is_not_leaked() {
        let (status, body) =
            body_of(AnalyzeError::FormParse("boundary not found".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Form parse error");

        let (status, body) = body_of(AnalyzeError::Upload("disk full".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Could not store upload");
    }
}
