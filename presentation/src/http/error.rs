//! API error envelope.
//!
//! Every failure leaves the API as `{error, message?}` JSON with the status
//! code carrying the taxonomy: 400 for caller mistakes, 502 when the
//! upstream inference API failed, 500 when the model answered but the
//! answer was unusable.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use lzdw_application::ports::extraction::ExtractionError;
use lzdw_application::ports::inference::InferenceError;
use lzdw_application::use_cases::generate_architecture::GenerateError;
use lzdw_domain::util::truncate_str;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Generate(GenerateError::EmptyQuestionnaire) => (
                StatusCode::BAD_REQUEST,
                "Questionnaire content is required".to_string(),
                None,
            ),
            ApiError::Generate(GenerateError::Inference(err)) => match err {
                InferenceError::Upstream { status, body } => (
                    StatusCode::BAD_GATEWAY,
                    format!("API request failed: {status}"),
                    Some(truncate_str(&body, 500).to_string()),
                ),
                InferenceError::Connection(detail) => (
                    StatusCode::BAD_GATEWAY,
                    "Failed to reach inference API".to_string(),
                    Some(detail),
                ),
                InferenceError::EmptyResponse => (
                    StatusCode::BAD_GATEWAY,
                    "No response from model".to_string(),
                    None,
                ),
            },
            ApiError::Generate(GenerateError::Normalize(err)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Model returned malformed JSON".to_string(),
                Some(err.to_string()),
            ),
            ApiError::Extraction(ExtractionError::EmptyDocument) => (
                StatusCode::BAD_REQUEST,
                "No file provided".to_string(),
                None,
            ),
            ApiError::Extraction(ExtractionError::InvalidDocument(detail)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse DOCX file".to_string(),
                Some(detail),
            ),
        };

        let body = match message {
            Some(message) => json!({ "error": error, "message": message }),
            None => json!({ "error": error }),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (
                ApiError::BadRequest("nope".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Generate(GenerateError::EmptyQuestionnaire),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Generate(GenerateError::Inference(InferenceError::Upstream {
                    status: 429,
                    body: "limited".into(),
                })),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::Extraction(ExtractionError::EmptyDocument),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Extraction(ExtractionError::InvalidDocument("bad zip".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
