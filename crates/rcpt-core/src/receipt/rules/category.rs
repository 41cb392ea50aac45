//! Keyword-based expense categorization.

use crate::models::receipt::{Category, LineItem};

/// Category keyword table, tested in declaration order. Substring match
/// against the lowercased merchant name; first category with any hit wins.
const CATEGORY_KEYWORDS: [(Category, &[&str]); 5] = [
    (Category::Grocery, &["grocery", "supermarket", "market"]),
    (Category::Dining, &["restaurant", "cafe", "diner"]),
    (Category::Travel, &["uber", "lyft", "taxi", "flight"]),
    (Category::Entertainment, &["movie", "cinema", "theater"]),
    (Category::Shopping, &["store", "mall", "shopping"]),
];

/// Map a merchant name to an expense category.
///
/// The `items` parameter is accepted for a future item-vocabulary rule but
/// is not consulted by the current keyword match.
pub fn categorize(merchant: Option<&str>, _items: &[LineItem]) -> Category {
    if let Some(merchant) = merchant {
        let merchant_lower = merchant.to_lowercase();
        for (category, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|kw| merchant_lower.contains(kw)) {
                return category;
            }
        }
    }

    Category::Others
}
