//! Common regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Merchant heuristic: a line of purely alphabetic text (plus the
    // decoration characters merchants actually use), no digits.
    pub static ref MERCHANT_LINE: Regex = Regex::new(
        r"^[A-Za-z\s&\-.]+$"
    ).unwrap();

    // Bill / invoice number patterns, tried in order.
    pub static ref BILL_NO_LABELED: Regex = Regex::new(
        r"(?i)\b(?:Bill|Invoice)\s*(?:No\.?|#)[:\s]*([\w-]+)"
    ).unwrap();

    pub static ref BILL_NO_BARE: Regex = Regex::new(
        r"(?i)\b(?:Bill|Invoice)\s*[:#]\s*([\w-]+)"
    ).unwrap();

    // Date tokens. The scanner accepts `/` and `-` separators; the
    // normalizer only parses the dashed formats, so slashed tokens fall
    // back to "now".
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[/-](\d{1,2})[/-](\d{1,2})\b"
    ).unwrap();

    // Total amount: keyword first, then an optional currency symbol and a
    // grouped-digit number with optional two-decimal fraction.
    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)\b(?:TOTAL|Grand\s+Total|AMOUNT)\b[^\d$€£]*([$€£]?\s*\d{1,3}(?:[,\s]\d{3})*(?:\.\d{2})?)"
    ).unwrap();

    // Currency-prefixed number, optionally followed by a trailing total
    // keyword (layouts where the label comes after the figure).
    pub static ref TOTAL_TRAILING: Regex = Regex::new(
        r"(?i)([$€£]\s*\d{1,3}(?:[,\s]\d{3})*(?:\.\d{2}))\s*(?:TOTAL|Grand\s+Total)?"
    ).unwrap();

    // Tax and discount share the total's numeric-capture shape.
    pub static ref TAX_LABELED: Regex = Regex::new(
        r"(?i)\b(?:Tax|VAT)\b[^\d$€£]*([$€£]?\s*\d{1,3}(?:[,\s]\d{3})*(?:\.\d{2})?)"
    ).unwrap();

    pub static ref DISCOUNT_LABELED: Regex = Regex::new(
        r"(?i)\b(?:Discount|Disc\.?)\b[^\d$€£]*([$€£]?\s*\d{1,3}(?:[,\s]\d{3})*(?:\.\d{2})?)"
    ).unwrap();

    // Line items: descriptive text, whitespace, trailing price token.
    pub static ref ITEM_LINE: Regex = Regex::new(
        r"^(?P<item>.+?)\s+(?P<price>[$€£]?\s*\d+(?:[,\s]\d+)*(?:\.\d{1,2})?)\s*$"
    ).unwrap();

    // Whole-word labels that disqualify a line from item extraction.
    pub static ref FIELD_LABEL_WORD: Regex = Regex::new(
        r"(?i)\b(total|amount|tax|discount|invoice|bill)\b"
    ).unwrap();
}
