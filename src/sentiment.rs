//! # Sentiment Classifier
//!
//! Maps `(content, likes, comments, shares)` → exactly one label in
//! {positive, negative, neutral}. Pure and deterministic: no randomness,
//! no external state, no I/O.
//!
//! Rule order (first match short-circuits):
//! 1. Hiring/recruiting phrase → neutral.
//! 2. Direct-complaint phrase → negative.
//! 3. Strong-positive phrase → positive.
//! 4. Weighted lexicon scores adjusted by an engagement bonus; ties and
//!    business-dominated texts fall to neutral.
//!
//! Matching is lowercase substring containment, and each lexicon entry
//! counts at most once per text.

use crate::lexicon::SentimentLexicon;
use crate::post::Sentiment;

/// Lexicon weights.
pub const STRONG_WEIGHT: i64 = 3;
pub const MODERATE_WEIGHT: i64 = 1;

/// Engagement bonus tiers. Totals above the high mark read as positive
/// reception; very low totals read as a negative signal.
pub const HIGH_ENGAGEMENT_MIN: u64 = 100;
pub const HIGH_ENGAGEMENT_BONUS: i64 = 2;
pub const MID_ENGAGEMENT_MIN: u64 = 50;
pub const MID_ENGAGEMENT_BONUS: i64 = 1;
pub const LOW_ENGAGEMENT_MAX: u64 = 10;
pub const LOW_ENGAGEMENT_PENALTY: i64 = -1;

/// Comment-heavy posts relative to likes read as controversy.
pub const CONTROVERSY_RATIO: f64 = 0.1;
pub const CONTROVERSY_MIN_COMMENTS: u64 = 5;
pub const CONTROVERSY_PENALTY: i64 = -1;

/// Per-text score components, exposed for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub positive_score: i64,
    pub negative_score: i64,
    pub business_score: i64,
    pub engagement_bonus: i64,
    pub final_positive: i64,
    pub final_negative: i64,
}

#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    lexicon: SentimentLexicon,
}

impl SentimentClassifier {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Classify one post's text and engagement counters.
    pub fn classify(&self, content: &str, likes: u64, comments: u64, shares: u64) -> Sentiment {
        let lower = content.to_lowercase();

        // Unconditional overrides, in priority order.
        if contains_any(&lower, &self.lexicon.hiring_phrases) {
            return Sentiment::Neutral;
        }
        if contains_any(&lower, &self.lexicon.complaint_phrases) {
            return Sentiment::Negative;
        }
        if contains_any(&lower, &self.lexicon.strong_positive_phrases) {
            return Sentiment::Positive;
        }

        let b = self.score(&lower, likes, comments, shares);

        if b.final_positive > b.final_negative && b.final_positive > b.business_score {
            Sentiment::Positive
        } else if b.final_negative > b.final_positive && b.final_negative > b.business_score {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Score components for an already-lowercased text. Overrides are not
    /// applied here; `classify` handles them first.
    pub fn score(&self, lower: &str, likes: u64, comments: u64, shares: u64) -> ScoreBreakdown {
        let strong_positive = count_hits(lower, &self.lexicon.strong_positive);
        let moderate_positive = count_hits(lower, &self.lexicon.moderate_positive);
        let strong_negative = count_hits(lower, &self.lexicon.strong_negative);
        let moderate_negative = count_hits(lower, &self.lexicon.moderate_negative);
        let business = count_hits(lower, &self.lexicon.business);

        let positive_score = strong_positive * STRONG_WEIGHT + moderate_positive * MODERATE_WEIGHT;
        let negative_score = strong_negative * STRONG_WEIGHT + moderate_negative * MODERATE_WEIGHT;
        let business_score = business * MODERATE_WEIGHT;

        let engagement_bonus = engagement_bonus(likes, comments, shares);

        ScoreBreakdown {
            positive_score,
            negative_score,
            business_score,
            engagement_bonus,
            final_positive: positive_score + engagement_bonus,
            final_negative: negative_score - engagement_bonus,
        }
    }
}

/// Engagement-based adjustment, added to the positive score and subtracted
/// from the negative score.
pub fn engagement_bonus(likes: u64, comments: u64, shares: u64) -> i64 {
    let total = likes + comments + shares;
    let mut bonus = if total > HIGH_ENGAGEMENT_MIN {
        HIGH_ENGAGEMENT_BONUS
    } else if total > MID_ENGAGEMENT_MIN {
        MID_ENGAGEMENT_BONUS
    } else if total < LOW_ENGAGEMENT_MAX {
        LOW_ENGAGEMENT_PENALTY
    } else {
        0
    };

    // likes == 0 keeps the ratio at 0; no label change from division.
    let comment_ratio = if likes > 0 {
        comments as f64 / likes as f64
    } else {
        0.0
    };
    if comment_ratio > CONTROVERSY_RATIO && comments > CONTROVERSY_MIN_COMMENTS {
        bonus += CONTROVERSY_PENALTY;
    }

    bonus
}

fn contains_any(lower: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| lower.contains(p.as_str()))
}

/// Number of distinct lexicon entries present in the text (each entry
/// counts once, however often it occurs).
fn count_hits(lower: &str, words: &[String]) -> i64 {
    words.iter().filter(|w| lower.contains(w.as_str())).count() as i64
}
