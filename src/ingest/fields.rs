//! Field fallback chains and value coercion over raw sheet rows.
//!
//! Source exports vary in column naming (`Likes` vs `reactions` vs `likes`),
//! so every canonical field resolves through an ordered chain: first present,
//! parseable value wins. Coercion never fails a row; anything unusable
//! collapses to the field's default.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

/// One raw sheet row: column name → cell value.
pub type RawRecord = Map<String, Value>;

/// Fallback chains for every canonical field. Order matters.
pub const CONTENT_FIELDS: &[&str] = &["text", "content"];
pub const AUTHOR_FIELDS: &[&str] = &["authorName", "author"];
pub const OCCUPATION_FIELDS: &[&str] = &["occupation"];
pub const PUBLISHED_AT_FIELDS: &[&str] = &["postedAtISO", "postedAt", "date"];
pub const LIKES_FIELDS: &[&str] = &["Likes", "reactions", "likes"];
pub const COMMENTS_FIELDS: &[&str] = &["Comments", "comments"];
pub const SHARES_FIELDS: &[&str] = &["Shares", "reposts", "shares"];
pub const URL_FIELDS: &[&str] = &["url", "postUrl"];
pub const IS_REPOST_FIELDS: &[&str] = &["isRepost"];
pub const AUTHOR_TYPE_FIELDS: &[&str] = &["authorType"];
pub const POST_TYPE_FIELDS: &[&str] = &["type", "postType"];

/// First non-empty string along the chain, or the default.
pub fn text_or(row: &RawRecord, chain: &[&str], default: &str) -> String {
    for name in chain {
        if let Some(Value::String(s)) = row.get(*name) {
            if !s.is_empty() {
                return s.clone();
            }
        }
    }
    default.to_string()
}

/// First parseable non-negative count along the chain, or 0.
///
/// Accepts JSON numbers (floats truncate) and strings with a leading
/// integer ("12 reactions" → 12).
pub fn count_or_zero(row: &RawRecord, chain: &[&str]) -> u64 {
    for name in chain {
        match row.get(*name) {
            Some(Value::Number(n)) => {
                if let Some(u) = n.as_u64() {
                    return u;
                }
                if let Some(i) = n.as_i64() {
                    return i.max(0) as u64;
                }
                if let Some(f) = n.as_f64() {
                    if f.is_finite() {
                        return f.max(0.0).trunc() as u64;
                    }
                }
            }
            Some(Value::String(s)) => {
                if let Some(u) = leading_integer(s) {
                    return u;
                }
            }
            _ => {}
        }
    }
    0
}

/// First boolean along the chain, or `default`. String cells compare
/// case-insensitively against "true"/"false".
pub fn bool_or(row: &RawRecord, chain: &[&str], default: bool) -> bool {
    for name in chain {
        match row.get(*name) {
            Some(Value::Bool(b)) => return *b,
            Some(Value::String(s)) => {
                if s.eq_ignore_ascii_case("true") {
                    return true;
                }
                if s.eq_ignore_ascii_case("false") {
                    return false;
                }
            }
            _ => {}
        }
    }
    default
}

/// First parseable timestamp along the chain, or the run's reference
/// instant. Accepts RFC 3339 and bare `YYYY-MM-DD` dates.
pub fn timestamp_or(row: &RawRecord, chain: &[&str], fallback: DateTime<Utc>) -> DateTime<Utc> {
    for name in chain {
        if let Some(Value::String(s)) = row.get(*name) {
            if let Some(ts) = parse_timestamp(s) {
                return ts;
            }
        }
    }
    fallback
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

fn leading_integer(s: &str) -> Option<u64> {
    let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> RawRecord {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn chain_takes_first_present_value() {
        let r = row(json!({ "reactions": 7, "likes": 99 }));
        assert_eq!(count_or_zero(&r, LIKES_FIELDS), 7);
    }

    #[test]
    fn unparseable_counts_default_to_zero() {
        let r = row(json!({ "Likes": "n/a", "Comments": null }));
        assert_eq!(count_or_zero(&r, LIKES_FIELDS), 0);
        assert_eq!(count_or_zero(&r, COMMENTS_FIELDS), 0);
    }

    #[test]
    fn string_counts_parse_leading_digits() {
        let r = row(json!({ "Likes": "12 reactions" }));
        assert_eq!(count_or_zero(&r, LIKES_FIELDS), 12);
    }

    #[test]
    fn negative_and_float_numbers_clamp_and_truncate() {
        let r = row(json!({ "Likes": -3 }));
        assert_eq!(count_or_zero(&r, LIKES_FIELDS), 0);
        let r = row(json!({ "Likes": 4.9 }));
        assert_eq!(count_or_zero(&r, LIKES_FIELDS), 4);
    }

    #[test]
    fn missing_text_uses_default() {
        let r = row(json!({}));
        assert_eq!(text_or(&r, AUTHOR_FIELDS, "Unknown"), "Unknown");
        assert_eq!(text_or(&r, CONTENT_FIELDS, ""), "");
    }

    #[test]
    fn timestamp_parses_rfc3339_and_bare_dates() {
        let fallback = Utc::now();
        let r = row(json!({ "postedAtISO": "2025-06-01T08:30:00Z" }));
        let ts = timestamp_or(&r, PUBLISHED_AT_FIELDS, fallback);
        assert_eq!(ts.to_rfc3339(), "2025-06-01T08:30:00+00:00");

        let r = row(json!({ "date": "2025-06-02" }));
        let ts = timestamp_or(&r, PUBLISHED_AT_FIELDS, fallback);
        assert_eq!(ts.date_naive().to_string(), "2025-06-02");
    }

    #[test]
    fn garbage_timestamp_falls_back_to_reference() {
        let fallback = DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let r = row(json!({ "postedAtISO": "sometime last week" }));
        assert_eq!(timestamp_or(&r, PUBLISHED_AT_FIELDS, fallback), fallback);
    }
}
