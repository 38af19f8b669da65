//! Axum route handlers for resume upload and text parsing.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{FileKind, UploadedFile};
use crate::models::resume::ResumeRecord;
use crate::parsing::parse_resume_text;
use crate::state::AppState;

/// Multipart field carrying the resume file.
const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub upload_id: Uuid,
    pub file_name: String,
    pub file_kind: FileKind,
    pub record: ResumeRecord,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/upload
///
/// Validates the uploaded file, extracts its text and returns the parsed record.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let limit = state.config.max_upload_bytes;
    let file = read_file_field(multipart, limit).await?;
    let kind = file.validate(limit)?;

    let upload_id = Uuid::new_v4();
    info!(
        "Upload {upload_id}: '{}' ({:?}, {} bytes)",
        file.file_name,
        kind,
        file.data.len()
    );

    let text = state.extractor.extract(&file, kind).await?;
    let record = parse_resume_text(&text);

    info!(
        "Upload {upload_id}: parsed {} experience, {} education, {} skills",
        record.experience.len(),
        record.education.len(),
        record.skills.len()
    );

    Ok(Json(UploadResponse {
        upload_id,
        file_name: file.file_name,
        file_kind: kind,
        record,
    }))
}

/// POST /api/v1/resumes/parse
///
/// Parses already-extracted resume text. Never fails on content; empty text
/// yields an empty record.
pub async fn handle_parse_text(Json(request): Json<ParseTextRequest>) -> Json<ResumeRecord> {
    Json(parse_resume_text(&request.text))
}

async fn read_file_field(mut multipart: Multipart, limit: usize) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::FileTooLarge { limit }
        } else {
            AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
        }
    })? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::FileTooLarge { limit }
            } else {
                AppError::Validation(format!("Could not read uploaded file: {}", e.body_text()))
            }
        })?;

        return Ok(UploadedFile {
            file_name,
            content_type,
            data,
        });
    }

    Err(AppError::Validation(format!(
        "Multipart body has no '{FILE_FIELD}' field"
    )))
}
