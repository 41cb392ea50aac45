//! Merchant name heuristic.

use super::patterns::MERCHANT_LINE;
use super::FieldMatch;

/// Pick the merchant name from the line sequence.
///
/// The first line consisting purely of alphabetic text (plus space, `&`,
/// `-`, `.`) wins; receipts almost always print the shop name near the top
/// before any digits appear. When no line qualifies, the first line is
/// used verbatim. Only a fully empty document is a miss.
pub fn extract_merchant(lines: &[&str]) -> Option<FieldMatch<String>> {
    for (idx, line) in lines.iter().enumerate() {
        if MERCHANT_LINE.is_match(line) {
            return Some(FieldMatch::new(line.to_string(), idx, *line));
        }
    }

    lines
        .first()
        .map(|line| FieldMatch::new(line.to_string(), 0, *line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic_line_wins() {
        let lines = vec!["#20391", "Corner Grocery Store", "15-03-2024"];
        let m = extract_merchant(&lines).unwrap();
        assert_eq!(m.value, "Corner Grocery Store");
        assert_eq!(m.line, 1);
    }

    #[test]
    fn test_decoration_characters_allowed() {
        let lines = vec!["Smith & Sons Co."];
        assert_eq!(extract_merchant(&lines).unwrap().value, "Smith & Sons Co.");
    }

    #[test]
    fn test_fallback_to_first_line() {
        let lines = vec!["Shop 24/7", "TOTAL 9.99"];
        let m = extract_merchant(&lines).unwrap();
        assert_eq!(m.value, "Shop 24/7");
        assert_eq!(m.line, 0);
    }

    #[test]
    fn test_empty_document_is_a_miss() {
        assert!(extract_merchant(&[]).is_none());
    }
}
