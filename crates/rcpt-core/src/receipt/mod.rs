//! Receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::ReceiptParser;

use crate::models::receipt::Receipt;

/// Trait for receipt extraction.
///
/// Extraction never fails for ordinary input: every undetected field
/// degrades to its documented default, so the output is always a complete
/// [`Receipt`]. Callers that need protection against pathological input
/// impose a deadline around this boundary and treat expiry as "no fields
/// extracted".
pub trait ReceiptExtractor {
    /// Extract structured receipt data from raw OCR text.
    fn extract_from_text(&self, text: &str) -> Receipt;
}
