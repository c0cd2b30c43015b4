//! Keyword frequency tables.
//!
//! Tokenization is the same Unicode word-boundary split used everywhere in
//! this crate; leaderboards sort by count descending with first-occurrence
//! order as the tie break, so identical input always yields an identical
//! table.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Generic corpus keywords keep tokens of at least this many chars.
pub const GENERIC_MIN_CHARS: usize = 4;
/// Generic leaderboard length.
pub const GENERIC_TOP_N: usize = 30;

/// Grammar words dropped from every keyword table.
pub static GENERIC_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
        "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
        "would", "could", "should", "may", "might", "can", "this", "that", "these", "those",
        "a", "an", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

/// Lowercased word tokens of a text.
pub fn tokenize(text: &str) -> Vec<String> {
    static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\b\w+\b").expect("word regex"));
    RE_WORD
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Frequency table in first-occurrence order. `keep` decides which tokens
/// count at all.
fn frequency_table<F: Fn(&str) -> bool>(texts: &[&str], keep: F) -> Vec<(String, u64)> {
    let mut order: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<u64> = Vec::new();

    for text in texts {
        for tok in tokenize(text) {
            if !keep(&tok) {
                continue;
            }
            match index.get(&tok) {
                Some(&i) => counts[i] += 1,
                None => {
                    index.insert(tok.clone(), order.len());
                    order.push(tok);
                    counts.push(1);
                }
            }
        }
    }

    order.into_iter().zip(counts).collect()
}

fn top_n(mut table: Vec<(String, u64)>, n: usize) -> Vec<KeywordCount> {
    // stable: ties keep first-occurrence order
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
        .into_iter()
        .take(n)
        .map(|(word, count)| KeywordCount { word, count })
        .collect()
}

/// Corpus-level keywords: ≥4 chars, generic stop list, top 30.
pub fn generic_keywords(texts: &[&str]) -> Vec<KeywordCount> {
    let table = frequency_table(texts, |tok| {
        tok.chars().count() >= GENERIC_MIN_CHARS && !GENERIC_STOP_WORDS.contains(tok)
    });
    top_n(table, GENERIC_TOP_N)
}

/// Leaderboard with a layered stop list and a higher length floor; pure
/// digit runs never qualify. Used by the positive keyword report.
pub fn top_words(
    texts: &[&str],
    min_chars: usize,
    extra_stops: &HashSet<String>,
    top: usize,
) -> Vec<KeywordCount> {
    let table = frequency_table(texts, |tok| {
        tok.chars().count() >= min_chars
            && !GENERIC_STOP_WORDS.contains(tok)
            && !extra_stops.contains(tok)
            && !tok.chars().all(|c| c.is_ascii_digit())
    });
    top_n(table, top)
}

/// Counts restricted to a fixed vocabulary. Used by the negative keyword
/// report, which only surfaces known complaint words.
pub fn vocabulary_counts(texts: &[&str], vocabulary: &[String], top: usize) -> Vec<KeywordCount> {
    let vocab: HashSet<&str> = vocabulary.iter().map(|s| s.as_str()).collect();
    let table = frequency_table(texts, |tok| vocab.contains(tok));
    top_n(table, top)
}
