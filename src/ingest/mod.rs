// src/ingest/mod.rs
//! The Ingestor: raw heterogeneous sheet rows → ordered canonical posts.
//!
//! One input row always yields exactly one `Post`; ids are 1-based input
//! order. Per-field problems recover locally via the fallback chains in
//! [`fields`] and never drop a row.

pub mod fields;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::post::Post;
use crate::sentiment::SentimentClassifier;
use fields::RawRecord;

/// Reach heuristic: likes × 10.
pub const REACH_PER_LIKE: u64 = 10;
/// Clicks heuristic: floor(likes / 10).
pub const LIKES_PER_CLICK: u64 = 10;

/// Normalize free text: decode HTML entities, collapse whitespace, trim.
pub fn normalize_content(s: &str) -> String {
    let out = html_escape::decode_html_entities(s).to_string();

    static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));
    RE_WS.replace_all(&out, " ").trim().to_string()
}

/// Extract `#token` hashtags, deduplicated in first-occurrence order,
/// without the leading `#`.
pub fn parse_hashtags(content: &str) -> Vec<String> {
    static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").expect("hashtag regex"));
    let mut out: Vec<String> = Vec::new();
    for caps in RE_TAG.captures_iter(content) {
        let tag = caps[1].to_string();
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// Build one canonical post from one raw row.
pub fn ingest_row(
    id: u64,
    row: &RawRecord,
    classifier: &SentimentClassifier,
    run_at: DateTime<Utc>,
) -> Post {
    let content = normalize_content(&fields::text_or(row, fields::CONTENT_FIELDS, ""));
    let likes = fields::count_or_zero(row, fields::LIKES_FIELDS);
    let comments = fields::count_or_zero(row, fields::COMMENTS_FIELDS);
    let shares = fields::count_or_zero(row, fields::SHARES_FIELDS);
    let engagement = likes + comments + shares;
    let sentiment = classifier.classify(&content, likes, comments, shares);
    let hashtags = parse_hashtags(&content);

    Post {
        id,
        author: fields::text_or(row, fields::AUTHOR_FIELDS, "Unknown"),
        occupation: fields::text_or(row, fields::OCCUPATION_FIELDS, ""),
        published_at: fields::timestamp_or(row, fields::PUBLISHED_AT_FIELDS, run_at),
        likes,
        comments,
        shares,
        engagement,
        sentiment,
        hashtags,
        reach: likes * REACH_PER_LIKE,
        clicks_estimate: likes / LIKES_PER_CLICK,
        source_url: fields::text_or(row, fields::URL_FIELDS, ""),
        is_repost: fields::bool_or(row, fields::IS_REPOST_FIELDS, false),
        author_type: fields::text_or(row, fields::AUTHOR_TYPE_FIELDS, "Person"),
        post_type: fields::text_or(row, fields::POST_TYPE_FIELDS, "text"),
        content,
    }
}

/// Ingest the whole export in input order.
pub fn ingest_posts(
    rows: &[RawRecord],
    classifier: &SentimentClassifier,
    run_at: DateTime<Utc>,
) -> Vec<Post> {
    let posts: Vec<Post> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| ingest_row(i as u64 + 1, row, classifier, run_at))
        .collect();
    tracing::info!(rows = rows.len(), posts = posts.len(), "ingest complete");
    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::SentimentLexicon;
    use serde_json::json;

    fn classifier() -> SentimentClassifier {
        SentimentClassifier::new(SentimentLexicon::default_seed())
    }

    fn record(v: serde_json::Value) -> RawRecord {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn normalize_collapses_entities_and_whitespace() {
        let s = "  Great&nbsp;&nbsp;ride   with\nShoffr  ";
        assert_eq!(normalize_content(s), "Great ride with Shoffr");
    }

    #[test]
    fn hashtags_dedup_in_first_occurrence_order() {
        let tags = parse_hashtags("#EV launch #Bangalore and again #EV");
        assert_eq!(tags, vec!["EV".to_string(), "Bangalore".to_string()]);
    }

    #[test]
    fn one_row_one_post_with_sequential_ids() {
        let now = Utc::now();
        let rows = vec![
            record(json!({ "text": "first" })),
            record(json!({})),
            record(json!({ "text": "third", "Likes": 5 })),
        ];
        let posts = ingest_posts(&rows, &classifier(), now);
        assert_eq!(posts.len(), 3);
        assert_eq!(
            posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        // a fully empty row still yields a defaulted post
        assert_eq!(posts[1].content, "");
        assert_eq!(posts[1].author, "Unknown");
        assert_eq!(posts[1].published_at, now);
    }

    #[test]
    fn derived_fields_follow_heuristics() {
        let rows = vec![record(json!({ "Likes": 25, "Comments": 3, "Shares": 2 }))];
        let posts = ingest_posts(&rows, &classifier(), Utc::now());
        let p = &posts[0];
        assert_eq!(p.engagement, 30);
        assert_eq!(p.engagement, p.likes + p.comments + p.shares);
        assert_eq!(p.reach, 250);
        assert_eq!(p.clicks_estimate, 2);
    }
}
