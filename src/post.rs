//! Canonical post record and sentiment label.
//!
//! A `Post` is created once by the ingestor and never mutated afterwards;
//! every aggregation downstream is a pure read over the post list.

use serde::{Deserialize, Serialize};

/// Classifier-assigned label. Serialized lowercase to match the artifact
/// contract ("positive" / "negative" / "neutral").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Stable label used as a map key in the analytics artifact.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// One canonical social-media entry after ingestion normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// 1-based sequence number in source row order.
    pub id: u64,
    pub content: String,
    pub author: String,
    pub occupation: String,
    /// RFC 3339; defaults to the run's reference instant when the source
    /// row carries no parseable timestamp.
    pub published_at: chrono::DateTime<chrono::Utc>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    /// Always `likes + comments + shares`.
    pub engagement: u64,
    pub sentiment: Sentiment,
    /// Deduplicated, first-occurrence order, without the leading `#`.
    pub hashtags: Vec<String>,
    /// Estimated reach: likes × 10.
    pub reach: u64,
    /// Estimated clicks: floor(likes × 0.1).
    pub clicks_estimate: u64,
    pub source_url: String,
    pub is_repost: bool,
    pub author_type: String,
    pub post_type: String,
}

impl Post {
    /// Comments-to-likes ratio; 0.0 when there are no likes (the
    /// controversy sort filters on `likes > 0`, so this stays finite).
    pub fn comment_ratio(&self) -> f64 {
        if self.likes > 0 {
            self.comments as f64 / self.likes as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(Sentiment::Negative.label(), "negative");
    }

    #[test]
    fn comment_ratio_zero_without_likes() {
        let p = Post {
            id: 1,
            content: String::new(),
            author: "Unknown".into(),
            occupation: String::new(),
            published_at: chrono::Utc::now(),
            likes: 0,
            comments: 7,
            shares: 0,
            engagement: 7,
            sentiment: Sentiment::Neutral,
            hashtags: vec![],
            reach: 0,
            clicks_estimate: 0,
            source_url: String::new(),
            is_repost: false,
            author_type: "Person".into(),
            post_type: "text".into(),
        };
        assert_eq!(p.comment_ratio(), 0.0);
    }
}
