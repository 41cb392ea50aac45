//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::sync::Arc;
use std::time::Duration;

use rcpt_core::error::ExtractionError;
use rcpt_core::{Receipt, ReceiptExtractor, ReceiptParser};

/// Run extraction with the per-document deadline from the config.
///
/// The core itself never blocks or fails; the deadline guards against
/// pathological input at the orchestrator boundary. Expiry is a total
/// failure for the document: no partial fields are returned.
pub async fn extract_with_deadline(
    parser: Arc<ReceiptParser>,
    text: String,
    timeout_ms: u64,
) -> anyhow::Result<Receipt> {
    let task = tokio::task::spawn_blocking(move || parser.extract_from_text(&text));

    match tokio::time::timeout(Duration::from_millis(timeout_ms), task).await {
        Ok(Ok(receipt)) => Ok(receipt),
        Ok(Err(join_err)) => Err(anyhow::anyhow!("extraction task failed: {}", join_err)),
        Err(_) => Err(ExtractionError::Timeout(timeout_ms).into()),
    }
}

/// Read one OCR text document, rejecting empty files.
pub fn read_document(path: &std::path::Path) -> anyhow::Result<String> {
    let text = std::fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyDocument.into());
    }
    Ok(text)
}
