//! Resume document decoding: file path or base64 PDF → plain text.
//!
//! Format is chosen by file extension (case-insensitive) before anything is read.
//! PDF extraction runs on the blocking pool since `pdf-extract` is synchronous.

use std::path::Path;

use agentgraph::AgentError;
use async_trait::async_trait;
use base64::Engine;

/// Supported resume file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Txt,
}

impl DocumentFormat {
    /// Picks the format from the extension of `path`.
    ///
    /// `.docx` and anything else fail with `UnsupportedFormat`; `.docx` gets a conversion hint.
    pub fn from_path(path: &Path) -> Result<Self, AgentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("txt") => Ok(Self::Txt),
            Some("docx") => Err(AgentError::UnsupportedFormat(format!(
                "{}: DOCX is not supported, convert the resume to PDF or TXT",
                path.display()
            ))),
            _ => Err(AgentError::UnsupportedFormat(format!(
                "{}: supported formats are .pdf and .txt",
                path.display()
            ))),
        }
    }
}

/// Turns resume sources into text. Swappable so tests avoid real PDFs.
#[async_trait]
pub trait DocumentDecoder: Send + Sync {
    /// Reads and decodes a local `.pdf` or `.txt` file.
    async fn decode_file(&self, path: &Path) -> Result<String, AgentError>;

    /// Extracts text from an in-memory PDF.
    async fn decode_pdf_bytes(&self, bytes: Vec<u8>) -> Result<String, AgentError>;
}

/// Default decoder: `tokio::fs` for text files, `pdf-extract` for PDFs (feature `pdf`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentDecoder;

#[async_trait]
impl DocumentDecoder for FsDocumentDecoder {
    async fn decode_file(&self, path: &Path) -> Result<String, AgentError> {
        match DocumentFormat::from_path(path)? {
            DocumentFormat::Txt => {
                let text = tokio::fs::read_to_string(path).await.map_err(|e| {
                    AgentError::ExecutionFailed(format!("cannot read {}: {}", path.display(), e))
                })?;
                Ok(text.trim().to_string())
            }
            DocumentFormat::Pdf => {
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    AgentError::ExecutionFailed(format!("cannot read {}: {}", path.display(), e))
                })?;
                self.decode_pdf_bytes(bytes).await
            }
        }
    }

    async fn decode_pdf_bytes(&self, bytes: Vec<u8>) -> Result<String, AgentError> {
        extract_pdf(bytes).await
    }
}

#[cfg(feature = "pdf")]
async fn extract_pdf(bytes: Vec<u8>) -> Result<String, AgentError> {
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AgentError::ExecutionFailed(format!("PDF extraction aborted: {}", e)))?;
    let text = extracted
        .map_err(|e| AgentError::ExecutionFailed(format!("PDF extraction failed: {}", e)))?;
    tracing::debug!(chars = text.len(), "extracted PDF text");
    Ok(text.trim().to_string())
}

#[cfg(not(feature = "pdf"))]
async fn extract_pdf(_bytes: Vec<u8>) -> Result<String, AgentError> {
    Err(AgentError::UnsupportedFormat(
        "PDF support is disabled (build with feature `pdf`)".to_string(),
    ))
}

/// Decodes standard base64, ignoring embedded whitespace and line breaks.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, AgentError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AgentError::Validation(format!("resume_base64 is not valid base64: {}", e)))
}
