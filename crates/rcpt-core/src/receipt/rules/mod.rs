//! Rule-based field extractors for receipt text.
//!
//! Every extractor here follows the same shape: scan the cleaned line
//! sequence in order, try an ordered list of pattern families per line,
//! and stop at the first line/pattern combination that matches. A miss is
//! never an error; it is reported as `None` and the orchestrator applies
//! the documented default.

pub mod amounts;
pub mod bill;
pub mod category;
pub mod dates;
pub mod items;
pub mod merchant;
pub mod patterns;

pub use amounts::{extract_discount, extract_tax, extract_total, normalize_amount};
pub use bill::extract_bill_no;
pub use category::categorize;
pub use dates::{extract_date, normalize_date, normalize_date_or};
pub use items::{extract_items, RawItem};
pub use merchant::extract_merchant;

/// Trait for single-field extractors over the receipt line sequence.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field, first match wins. `None` is a soft-miss.
    fn extract(&self, lines: &[&str]) -> Option<FieldMatch<Self::Output>>;
}

/// A detected field, before any default is applied.
///
/// The public [`crate::Receipt`] collapses "found" and "defaulted" into one
/// concrete value; this type is where the distinction still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Index of the source line within the cleaned sequence.
    pub line: usize,
    /// The text that was matched.
    pub source: String,
}

impl<T> FieldMatch<T> {
    pub fn new(value: T, line: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            line,
            source: source.into(),
        }
    }
}
