//! Receipt data models produced by the extraction pipeline.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A structured receipt assembled from raw OCR text.
///
/// Every field is populated after orchestration: undetected fields carry
/// their documented defaults rather than being absent. Note that zero is
/// both "true zero amount" and "not found" for the monetary fields; the
/// distinction survives only in [`ExtractionMetadata::warnings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Bill or invoice number, when a labeled token was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_no: Option<String>,

    /// Merchant name. Never empty; defaults to "Unknown Merchant".
    pub merchant: String,

    /// Receipt date and time. Defaults to the extraction instant.
    pub date_time: DateTime<Utc>,

    /// Purchased items in source line order.
    pub items: Vec<LineItem>,

    /// Total amount. Zero when undetected.
    pub total_amount: Decimal,

    /// Tax amount. Zero when undetected.
    pub tax: Decimal,

    /// Discount amount. Zero when undetected.
    pub discount: Decimal,

    /// Merchant location. Reserved; no current heuristic populates it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Expense category. Defaults to [`Category::Others`].
    pub category: Category,

    /// Extraction metadata.
    pub metadata: ExtractionMetadata,
}

/// A single purchased item on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description, trimmed of hyphen/space decoration.
    pub name: String,

    /// The price token exactly as matched in the source line.
    pub raw_amount: String,

    /// Normalized price, ready for storage mapping.
    pub amount: Decimal,
}

/// Fixed expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Grocery,
    Dining,
    Travel,
    Entertainment,
    Shopping,
    /// Catch-all bucket when no keyword rule matches.
    Others,
}

impl Category {
    /// Category name as stored and reported.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Grocery => "grocery",
            Category::Dining => "dining",
            Category::Travel => "travel",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Others => "others",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Others
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata describing how the extraction went.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Soft-miss warnings: fields that fell back to their defaults.
    pub warnings: Vec<String>,

    /// Processing time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        let json = serde_json::to_string(&Category::Dining).unwrap();
        assert_eq!(json, "\"dining\"");

        let cat: Category = serde_json::from_str("\"others\"").unwrap();
        assert_eq!(cat, Category::Others);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Grocery.to_string(), "grocery");
        assert_eq!(Category::Others.as_str(), "others");
    }
}
