//! Core library for receipt OCR-text processing.
//!
//! This crate provides:
//! - Heuristic field extraction from raw OCR text (merchant, bill number,
//!   date, totals, tax, discount, line items)
//! - Locale-tolerant numeric and date normalization
//! - Keyword-based expense categorization
//!
//! The pipeline is pure and stateless: it performs no I/O, never blocks,
//! and is safe to run concurrently across independent documents. OCR
//! engines, PDF rasterization, and persistence are external collaborators
//! that feed text in and take the assembled [`Receipt`] out.

pub mod error;
pub mod models;
pub mod receipt;

pub use error::{RcptError, Result};
pub use models::config::{BatchConfig, ExtractionConfig, RcptConfig};
pub use models::receipt::{Category, ExtractionMetadata, LineItem, Receipt};
pub use receipt::{ReceiptExtractor, ReceiptParser};
