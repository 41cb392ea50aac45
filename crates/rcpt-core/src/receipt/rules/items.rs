//! Line-item extraction.

use tracing::debug;

use super::patterns::{FIELD_LABEL_WORD, ITEM_LINE};

/// A raw item match: description plus the price token as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub name: String,
    pub raw_amount: String,
    /// Index of the source line within the cleaned sequence.
    pub line: usize,
}

/// Scan every line for "description, whitespace, trailing price".
///
/// Lines containing a field label as a whole word (total, amount, tax,
/// discount, invoice, bill) are skipped entirely so label rows are never
/// double-counted as purchased items. Non-matching lines drop silently.
/// Output order equals source line order.
pub fn extract_items(lines: &[&str]) -> Vec<RawItem> {
    let mut items = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if FIELD_LABEL_WORD.is_match(line) {
            continue;
        }

        if let Some(caps) = ITEM_LINE.captures(line) {
            let name = caps["item"].trim_matches([' ', '-']).to_string();
            let raw_amount = caps["price"].trim().to_string();
            debug!("extracted item '{}' with price '{}'", name, raw_amount);
            items.push(RawItem {
                name,
                raw_amount,
                line: idx,
            });
        } else {
            debug!("no item match for line '{}'", line);
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_label_lines_excluded() {
        let lines = vec!["Milk 2.50", "TOTAL 10.00", "Bread 3.00"];
        let items = extract_items(&lines);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].raw_amount, "2.50");
        assert_eq!(items[1].name, "Bread");
        assert_eq!(items[1].raw_amount, "3.00");
    }

    #[test]
    fn test_source_order_preserved() {
        let lines = vec!["Zebra print 9.99", "Apples 1.20"];
        let items = extract_items(&lines);
        assert_eq!(items[0].name, "Zebra print");
        assert_eq!(items[1].name, "Apples");
        assert_eq!(items[1].line, 1);
    }

    #[test]
    fn test_all_label_words_excluded() {
        let lines = vec![
            "Tax 0.50",
            "Discount 1.00",
            "Amount due 10.00",
            "Invoice 42",
            "Bill 42",
        ];
        assert!(extract_items(&lines).is_empty());
    }

    #[test]
    fn test_hyphen_decoration_stripped() {
        let lines = vec!["- Orange juice  4.25"];
        let items = extract_items(&lines);
        assert_eq!(items[0].name, "Orange juice");
    }

    #[test]
    fn test_currency_prefixed_price() {
        let lines = vec!["Movie ticket $12.50"];
        let items = extract_items(&lines);
        assert_eq!(items[0].raw_amount, "$12.50");
    }

    #[test]
    fn test_non_matching_lines_dropped_silently() {
        let lines = vec!["Thank you for shopping", "Cashier: Dana"];
        assert!(extract_items(&lines).is_empty());
    }
}
