//! Monetary amount extraction and normalization.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use super::patterns::{DISCOUNT_LABELED, TAX_LABELED, TOTAL_LABELED, TOTAL_TRAILING};
use super::{FieldExtractor, FieldMatch};

/// Labeled-amount extractor parameterized by its pattern families.
///
/// Captures the raw numeric+currency token; normalization is deferred to
/// [`normalize_amount`] so the source text survives into the result.
pub struct AmountExtractor {
    patterns: Vec<&'static Regex>,
}

impl AmountExtractor {
    /// Total amount: label-first family, then trailing-label family.
    pub fn total() -> Self {
        Self {
            patterns: vec![&*TOTAL_LABELED, &*TOTAL_TRAILING],
        }
    }

    /// Tax amount, keyed on "Tax"/"VAT".
    pub fn tax() -> Self {
        Self {
            patterns: vec![&*TAX_LABELED],
        }
    }

    /// Discount amount, keyed on "Discount"/"Disc.".
    pub fn discount() -> Self {
        Self {
            patterns: vec![&*DISCOUNT_LABELED],
        }
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = String;

    fn extract(&self, lines: &[&str]) -> Option<FieldMatch<String>> {
        for (idx, line) in lines.iter().enumerate() {
            for pattern in &self.patterns {
                if let Some(caps) = pattern.captures(line) {
                    let raw = caps[1].trim().to_string();
                    return Some(FieldMatch::new(raw, idx, &caps[0]));
                }
            }
        }
        None
    }
}

/// Extract the raw total-amount token, first match wins.
pub fn extract_total(lines: &[&str]) -> Option<FieldMatch<String>> {
    AmountExtractor::total().extract(lines)
}

/// Extract the raw tax token.
pub fn extract_tax(lines: &[&str]) -> Option<FieldMatch<String>> {
    AmountExtractor::tax().extract(lines)
}

/// Extract the raw discount token.
pub fn extract_discount(lines: &[&str]) -> Option<FieldMatch<String>> {
    AmountExtractor::discount().extract(lines)
}

/// Convert a free-form numeric/currency string into an exact decimal.
///
/// Tolerates currency symbols and thousands separators. When both a comma
/// and a period are present the commas are treated as thousands separators;
/// a lone comma is treated as the decimal point. Any input this rule cannot
/// resolve collapses silently to `0.00` — the function never fails.
pub fn normalize_amount(value: Option<&str>) -> Decimal {
    let zero = Decimal::new(0, 2);

    let Some(value) = value else {
        return zero;
    };

    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let normalized = if cleaned.contains(',') && cleaned.contains('.') {
        cleaned.replace(',', "")
    } else if cleaned.contains(',') {
        cleaned.replace(',', ".")
    } else {
        cleaned
    };

    Decimal::from_str(&normalized).unwrap_or(zero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_amount(None), dec("0.00"));
        assert_eq!(normalize_amount(Some("")), dec("0.00"));
        assert_eq!(normalize_amount(Some("   ")), dec("0.00"));
    }

    #[test]
    fn test_normalize_thousands() {
        assert_eq!(normalize_amount(Some("1,234.56")), dec("1234.56"));
        assert_eq!(normalize_amount(Some("$ 1,234.56")), dec("1234.56"));
    }

    #[test]
    fn test_normalize_comma_decimal() {
        assert_eq!(normalize_amount(Some("45,00")), dec("45.00"));
        assert_eq!(normalize_amount(Some("€12,5")), dec("12.5"));
    }

    #[test]
    fn test_normalize_european_grouping_falls_back() {
        // Comma and period both present means commas are stripped, which
        // leaves "1.234.56" unparseable. The documented result is 0.00,
        // not 1234.56.
        assert_eq!(normalize_amount(Some("1.234,56")), dec("0.00"));
    }

    #[test]
    fn test_normalize_currency_symbols() {
        assert_eq!(normalize_amount(Some("$12.50")), dec("12.50"));
        assert_eq!(normalize_amount(Some("£ 3.99")), dec("3.99"));
    }

    #[test]
    fn test_normalize_garbage() {
        assert_eq!(normalize_amount(Some("N/A")), dec("0.00"));
        assert_eq!(normalize_amount(Some("--")), dec("0.00"));
    }

    #[test]
    fn test_extract_total_label_first() {
        let lines = vec!["Corner Shop", "Milk 2.50", "TOTAL: $10.00"];
        let m = extract_total(&lines).unwrap();
        assert_eq!(m.value, "$10.00");
        assert_eq!(m.line, 2);
    }

    #[test]
    fn test_extract_total_trailing_label() {
        let lines = vec!["$ 25.00 Grand Total"];
        let m = extract_total(&lines).unwrap();
        assert_eq!(m.value, "$ 25.00");
    }

    #[test]
    fn test_extract_total_first_match_wins() {
        // The earlier line wins even though the later one is more specific.
        let lines = vec!["Amount 5.00", "Grand Total 99.99"];
        let m = extract_total(&lines).unwrap();
        assert_eq!(m.value, "5.00");
        assert_eq!(m.line, 0);
    }

    #[test]
    fn test_extract_tax_and_discount() {
        let lines = vec!["Bread 3.00", "VAT 0.45", "Disc. 1.00"];
        assert_eq!(extract_tax(&lines).unwrap().value, "0.45");
        assert_eq!(extract_discount(&lines).unwrap().value, "1.00");
    }

    #[test]
    fn test_extract_miss_is_none() {
        let lines = vec!["Corner Shop", "Milk 2.50"];
        assert!(extract_tax(&lines).is_none());
        assert!(extract_discount(&lines).is_none());
    }
}
