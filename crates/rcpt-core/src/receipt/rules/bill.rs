//! Bill / invoice number extraction.

use regex::Regex;

use super::patterns::{BILL_NO_BARE, BILL_NO_LABELED};
use super::{FieldExtractor, FieldMatch};

/// Bill-number extractor: "Bill"/"Invoice" with a "No."/"#" label first,
/// bare "Bill:"/"Invoice:" second.
pub struct BillNoExtractor;

impl FieldExtractor for BillNoExtractor {
    type Output = String;

    fn extract(&self, lines: &[&str]) -> Option<FieldMatch<String>> {
        let patterns: [&Regex; 2] = [&*BILL_NO_LABELED, &*BILL_NO_BARE];

        for (idx, line) in lines.iter().enumerate() {
            for pattern in patterns {
                if let Some(caps) = pattern.captures(line) {
                    return Some(FieldMatch::new(caps[1].to_string(), idx, &caps[0]));
                }
            }
        }
        None
    }
}

/// Extract the bill/invoice number, first match wins.
pub fn extract_bill_no(lines: &[&str]) -> Option<FieldMatch<String>> {
    BillNoExtractor.extract(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_variants() {
        let lines = vec!["Bill No: A-1729"];
        assert_eq!(extract_bill_no(&lines).unwrap().value, "A-1729");

        let lines = vec!["INVOICE #20240001 issued"];
        assert_eq!(extract_bill_no(&lines).unwrap().value, "20240001");

        let lines = vec!["Invoice No. 445"];
        assert_eq!(extract_bill_no(&lines).unwrap().value, "445");
    }

    #[test]
    fn test_bare_label_second_family() {
        let lines = vec!["Invoice: XQ-7"];
        assert_eq!(extract_bill_no(&lines).unwrap().value, "XQ-7");
    }

    #[test]
    fn test_first_match_wins_across_lines() {
        let lines = vec!["Bill #1", "Invoice No: 2"];
        let m = extract_bill_no(&lines).unwrap();
        assert_eq!(m.value, "1");
        assert_eq!(m.line, 0);
    }

    #[test]
    fn test_miss() {
        let lines = vec!["Corner Shop", "Milk 2.50"];
        assert!(extract_bill_no(&lines).is_none());
    }
}
