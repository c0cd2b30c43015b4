//! # Aggregator
//!
//! Pure functions over the immutable post list. Everything here is
//! recomputed wholesale on each run; nothing is incremental. Averages on an
//! empty corpus are defined as 0.0 so a not-a-number never reaches an
//! artifact.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::keywords::{self, KeywordCount};
use crate::post::Post;
use crate::trends::{compute_trends, TrendPoint, TrendScaling};

/// Engagement performance buckets.
pub const HIGH_ENGAGEMENT_FLOOR: u64 = 100; // strictly above
pub const MEDIUM_ENGAGEMENT_MIN: u64 = 20; // inclusive band to 100

/// Leaderboard truncations.
pub const TOP_POSTS_N: usize = 10;
pub const CONTROVERSIAL_POSTS_N: usize = 5;
pub const TOP_AUTHORS_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPerformance {
    pub author: String,
    pub posts: u64,
    pub total_engagement: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_shares: u64,
    /// round(total engagement / posts)
    pub avg_engagement: u64,
}

/// Corpus-level statistics, derived in full on every run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateAnalytics {
    pub total_posts: u64,
    pub total_engagement: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_shares: u64,
    pub avg_engagement: f64,
    pub avg_likes: f64,
    pub avg_comments: f64,
    pub avg_shares: f64,
    /// Only labels that occur at least once are present.
    pub sentiment_counts: BTreeMap<String, u64>,
    pub high_engagement_posts: u64,
    pub medium_engagement_posts: u64,
    pub low_engagement_posts: u64,
    pub top_posts: Vec<Post>,
    pub controversial_posts: Vec<Post>,
    pub keywords: Vec<KeywordCount>,
    pub trends: Vec<TrendPoint>,
    pub author_performance: Vec<AuthorPerformance>,
}

pub fn compute_analytics(posts: &[Post], scaling: &TrendScaling) -> AggregateAnalytics {
    let total_posts = posts.len() as u64;
    let total_engagement: u64 = posts.iter().map(|p| p.engagement).sum();
    let total_likes: u64 = posts.iter().map(|p| p.likes).sum();
    let total_comments: u64 = posts.iter().map(|p| p.comments).sum();
    let total_shares: u64 = posts.iter().map(|p| p.shares).sum();

    let avg = |total: u64| {
        if total_posts == 0 {
            0.0
        } else {
            total as f64 / total_posts as f64
        }
    };

    let mut sentiment_counts: BTreeMap<String, u64> = BTreeMap::new();
    for p in posts {
        *sentiment_counts
            .entry(p.sentiment.label().to_string())
            .or_insert(0) += 1;
    }

    let high = posts
        .iter()
        .filter(|p| p.engagement > HIGH_ENGAGEMENT_FLOOR)
        .count() as u64;
    let medium = posts
        .iter()
        .filter(|p| p.engagement >= MEDIUM_ENGAGEMENT_MIN && p.engagement <= HIGH_ENGAGEMENT_FLOOR)
        .count() as u64;
    let low = posts
        .iter()
        .filter(|p| p.engagement < MEDIUM_ENGAGEMENT_MIN)
        .count() as u64;

    let contents: Vec<&str> = posts.iter().map(|p| p.content.as_str()).collect();

    AggregateAnalytics {
        total_posts,
        total_engagement,
        total_likes,
        total_comments,
        total_shares,
        avg_engagement: avg(total_engagement),
        avg_likes: avg(total_likes),
        avg_comments: avg(total_comments),
        avg_shares: avg(total_shares),
        sentiment_counts,
        high_engagement_posts: high,
        medium_engagement_posts: medium,
        low_engagement_posts: low,
        top_posts: top_posts(posts),
        controversial_posts: controversial_posts(posts),
        keywords: keywords::generic_keywords(&contents),
        trends: compute_trends(posts, scaling),
        author_performance: author_performance(posts),
    }
}

/// Top posts by engagement, descending; stable, so ties keep input order.
pub fn top_posts(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| b.engagement.cmp(&a.engagement));
    sorted.truncate(TOP_POSTS_N);
    sorted
}

/// Posts with both likes and comments, by comments/likes ratio descending.
pub fn controversial_posts(posts: &[Post]) -> Vec<Post> {
    let mut candidates: Vec<Post> = posts
        .iter()
        .filter(|p| p.comments > 0 && p.likes > 0)
        .cloned()
        .collect();
    candidates.sort_by(|a, b| b.comment_ratio().total_cmp(&a.comment_ratio()));
    candidates.truncate(CONTROVERSIAL_POSTS_N);
    candidates
}

/// Per-author sums with rounded average engagement; top five by average,
/// first-seen order on ties.
pub fn author_performance(posts: &[Post]) -> Vec<AuthorPerformance> {
    let mut order: Vec<AuthorPerformance> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for p in posts {
        let i = match index.get(p.author.as_str()) {
            Some(&i) => i,
            None => {
                index.insert(p.author.as_str(), order.len());
                order.push(AuthorPerformance {
                    author: p.author.clone(),
                    posts: 0,
                    total_engagement: 0,
                    total_likes: 0,
                    total_comments: 0,
                    total_shares: 0,
                    avg_engagement: 0,
                });
                order.len() - 1
            }
        };
        let a = &mut order[i];
        a.posts += 1;
        a.total_engagement += p.engagement;
        a.total_likes += p.likes;
        a.total_comments += p.comments;
        a.total_shares += p.shares;
    }

    for a in &mut order {
        a.avg_engagement = (a.total_engagement as f64 / a.posts as f64).round() as u64;
    }

    order.sort_by(|a, b| b.avg_engagement.cmp(&a.avg_engagement));
    order.truncate(TOP_AUTHORS_N);
    order
}
