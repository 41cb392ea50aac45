//! Date extraction and normalization.

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use super::patterns::{DATE_DMY, DATE_YMD};
use super::{FieldExtractor, FieldMatch};

/// Formats tried by the normalizer, in priority order.
///
/// The order is ambiguity-prone for tokens like `03-04-2024` (parsed as
/// day 3, month 4) but is preserved for compatibility with the data
/// already produced by this pipeline.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%m-%d-%Y"];

/// Date token extractor. Captures the raw token; parsing happens in
/// [`normalize_date`].
pub struct DateExtractor;

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, lines: &[&str]) -> Option<FieldMatch<String>> {
        let patterns: [&Regex; 2] = [&*DATE_DMY, &*DATE_YMD];

        for (idx, line) in lines.iter().enumerate() {
            for pattern in patterns {
                if let Some(m) = pattern.find(line) {
                    return Some(FieldMatch::new(m.as_str().to_string(), idx, m.as_str()));
                }
            }
        }
        None
    }
}

/// Extract the first date-shaped token from the line sequence.
pub fn extract_date(lines: &[&str]) -> Option<FieldMatch<String>> {
    DateExtractor.extract(lines)
}

/// Convert a free-form date token into a timestamp, falling back to the
/// current UTC time when nothing parses. Never fails.
pub fn normalize_date(value: Option<&str>) -> DateTime<Utc> {
    normalize_date_or(value, Utc::now())
}

/// [`normalize_date`] with an injected fallback instant, so callers that
/// need determinism can pin the clock.
pub fn normalize_date_or(value: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    let Some(value) = value else {
        return fallback;
    };
    if value.is_empty() {
        return fallback;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc())
                .unwrap_or(fallback);
        }
    }

    fallback
}
