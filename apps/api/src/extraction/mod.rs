//! File-to-text extraction — turns an uploaded resume file into plain text for the parser.
//!
//! Default: `FileTextExtractor` (pdf-extract for PDFs, lossy UTF-8 for text and Word files).
//! `AppState` holds an `Arc<dyn TextExtractor>` so tests and future backends can swap it.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Upload model
// ────────────────────────────────────────────────────────────────────────────

/// File types accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Text,
    Doc,
    Docx,
}

impl FileKind {
    /// Detects the kind from the file extension, falling back to the declared content type.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => return Some(FileKind::Pdf),
            Some("txt") | Some("text") | Some("md") => return Some(FileKind::Text),
            Some("doc") => return Some(FileKind::Doc),
            Some("docx") => return Some(FileKind::Docx),
            _ => {}
        }

        match content_type.map(|ct| ct.split(';').next().unwrap_or(ct).trim()) {
            Some("application/pdf") => Some(FileKind::Pdf),
            Some("text/plain") | Some("text/markdown") => Some(FileKind::Text),
            Some("application/msword") => Some(FileKind::Doc),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document") => {
                Some(FileKind::Docx)
            }
            _ => None,
        }
    }
}

/// A file received from the client, not yet validated.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    /// Checks type and size before any extraction work is done.
    pub fn validate(&self, max_bytes: usize) -> Result<FileKind, AppError> {
        let kind = FileKind::detect(&self.file_name, self.content_type.as_deref()).ok_or_else(
            || {
                AppError::UnsupportedFile(format!(
                    "'{}' is not a supported resume file. Upload a PDF, TXT or DOC file.",
                    self.file_name
                ))
            },
        )?;

        if self.data.len() > max_bytes {
            return Err(AppError::FileTooLarge { limit: max_bytes });
        }
        if self.data.is_empty() {
            return Err(AppError::Extraction(format!("'{}' is empty", self.file_name)));
        }
        Ok(kind)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Extracts plain text from a validated upload.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file: &UploadedFile, kind: FileKind) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// FileTextExtractor — default implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct FileTextExtractor;

#[async_trait]
impl TextExtractor for FileTextExtractor {
    async fn extract(&self, file: &UploadedFile, kind: FileKind) -> Result<String, AppError> {
        let text = match kind {
            FileKind::Pdf => {
                // pdf-extract is CPU-bound, synchronous, and can panic on malformed files.
                let data = file.data.clone();
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                    .await
                    .map_err(|e| {
                        warn!("pdf-extract aborted for '{}': {e}", file.file_name);
                        AppError::Extraction(format!(
                            "Could not read '{}' as a PDF",
                            file.file_name
                        ))
                    })?
                    .map_err(|e| {
                        warn!("pdf-extract failed for '{}': {e}", file.file_name);
                        AppError::Extraction(format!(
                            "Could not read '{}' as a PDF: {e}",
                            file.file_name
                        ))
                    })
                    .map(|text| join_pages(&text))?
            }
            FileKind::Text | FileKind::Doc | FileKind::Docx => decode_text(&file.data),
        };

        if text.trim().is_empty() {
            return Err(AppError::Extraction(match kind {
                FileKind::Pdf => format!(
                    "No text could be extracted from '{}'. It may be a scanned, image-only PDF.",
                    file.file_name
                ),
                _ => format!("No text could be extracted from '{}'", file.file_name),
            }));
        }

        debug!(
            "Extracted {} characters from '{}' ({:?})",
            text.chars().count(),
            file.file_name,
            kind
        );
        Ok(text)
    }
}

/// pdf-extract separates pages with form feeds; the parser wants plain newlines.
fn join_pages(text: &str) -> String {
    text.split('\u{c}')
        .map(str::trim_end)
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lossy UTF-8 decode with control characters (other than line breaks and tabs) removed.
fn decode_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data)
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .filter(|c| *c != char::REPLACEMENT_CHARACTER)
        .collect()
}
