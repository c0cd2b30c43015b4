//! # Domain report generators
//!
//! Each submodule is a pure filter+reduce+format pipeline over the post
//! list, parameterized by the brand lexicon. None retain state across
//! invocations. Every rate over a filtered subset guards the empty case to
//! a defined default instead of propagating a not-a-number.

pub mod filters;
pub mod insights;
pub mod negative;
pub mod positive;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::keywords::KeywordCount;
use crate::post::Post;

/// Keyword leaderboard entry with its display color class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredKeyword {
    pub word: String,
    pub count: u64,
    pub color: String,
}

/// Percentage of `part` in `whole`, rounded; 0 when the subset is empty.
pub fn percent(part: usize, whole: usize) -> i64 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round() as i64
    }
}

/// Fraction of `part` in `whole`; 0.0 when the subset is empty.
pub fn share(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Rounded average engagement over a subset; 0 when empty.
pub fn avg_engagement(posts: &[&Post]) -> u64 {
    if posts.is_empty() {
        return 0;
    }
    let sum: u64 = posts.iter().map(|p| p.engagement).sum();
    (sum as f64 / posts.len() as f64).round() as u64
}

/// One decimal place, the precision the rating metrics carry.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// First `n` chars of `text` plus an ellipsis marker. Char-based so a
/// multi-byte boundary can never split.
pub fn excerpt(text: &str, n: usize) -> String {
    let head: String = text.chars().take(n).collect();
    format!("{head}...")
}

/// Relative-time string against the run's reference instant.
pub fn time_ago(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - ts).num_hours();
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("{hours} hrs ago");
    }
    format!("{} days ago", hours / 24)
}

/// Uppercase the first letter, leaderboard display style.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Attach cycling palette colors to a keyword table.
pub fn colorize(keywords: Vec<KeywordCount>, palette: &[&str]) -> Vec<ColoredKeyword> {
    keywords
        .into_iter()
        .enumerate()
        .map(|(i, k)| ColoredKeyword {
            word: capitalize(&k.word),
            count: k.count,
            color: palette[i % palette.len()].to_string(),
        })
        .collect()
}
