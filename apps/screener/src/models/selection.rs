use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;

const PDF_CONTENT_TYPE: &str = "application/pdf";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A user-chosen document, held as opaque bytes.
///
/// The content is never inspected; only the file name and the inferred
/// content type travel with it into the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

impl FileSelection {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name);
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Reads a document from disk. The file name (without directories) is kept
    /// for the multipart part.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        Ok(Self::new(file_name, bytes))
    }

    /// Mirrors the `.pdf` filter of a file picker: a hint, never enforced.
    pub fn looks_like_pdf(&self) -> bool {
        self.content_type == PDF_CONTENT_TYPE
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    if file_name.to_lowercase().ends_with(".pdf") {
        PDF_CONTENT_TYPE
    } else {
        FALLBACK_CONTENT_TYPE
    }
}
