//! Request handlers.
//!
//! Request/response bodies use snake_case field names throughout; the
//! browser client mirrors them.

use axum::{Json, extract::State};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use lzdw_application::use_cases::generate_architecture::GenerateInput;
use lzdw_domain::architecture::model::Architecture;
use lzdw_domain::graph::GraphView;

use super::error::{ApiError, ApiResult};
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub questionnaire_content: String,
    #[serde(default)]
    pub extra_notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub architecture: Architecture,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let mut input = GenerateInput::new(request.questionnaire_content);
    if let Some(notes) = request.extra_notes {
        input = input.with_extra_notes(notes);
    }
    let architecture = state.generate.execute(input).await?;
    Ok(Json(GenerateResponse { architecture }))
}

#[derive(Debug, Deserialize)]
pub struct ArchitectureRequest {
    pub architecture: Option<Architecture>,
}

impl ArchitectureRequest {
    fn architecture(self) -> ApiResult<Architecture> {
        self.architecture
            .ok_or_else(|| ApiError::BadRequest("Architecture data is required".to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct DiagramResponse {
    pub xml: String,
    pub file_name: String,
}

pub async fn diagram(
    State(state): State<AppState>,
    Json(request): Json<ArchitectureRequest>,
) -> ApiResult<Json<DiagramResponse>> {
    let architecture = request.architecture()?;
    let artifact = state.render_diagram.execute(&architecture);
    info!(file_name = %artifact.file_name, "Diagram requested");
    Ok(Json(DiagramResponse {
        xml: artifact.xml,
        file_name: artifact.file_name,
    }))
}

pub async fn graph(
    State(state): State<AppState>,
    Json(request): Json<ArchitectureRequest>,
) -> ApiResult<Json<GraphView>> {
    let architecture = request.architecture()?;
    Ok(Json(state.graph_view.execute(&architecture)))
}

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    /// Base64-encoded DOCX bytes.
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
    pub warnings: Vec<String>,
}

pub async fn extract_text(
    State(state): State<AppState>,
    Json(request): Json<ExtractTextRequest>,
) -> ApiResult<Json<ExtractTextResponse>> {
    let encoded = request
        .file
        .ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;
    let bytes = BASE64
        .decode(encoded.as_bytes())
        .map_err(|_| ApiError::BadRequest("File is not valid base64".to_string()))?;
    let extracted = state.extract_text.execute(&bytes)?;
    Ok(Json(ExtractTextResponse {
        text: extracted.text,
        warnings: extracted.warnings,
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
