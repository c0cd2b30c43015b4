//! Positive-review reports: feedback categories, keyword leaderboard,
//! review metrics, and recent praises.

use serde::Serialize;
use std::collections::HashSet;

use super::{avg_engagement, colorize, excerpt, filters, percent, round1, share, time_ago, ColoredKeyword};
use crate::keywords;
use crate::lexicon::BrandLexicon;
use crate::post::Post;

/// Categories surfaced on the positive tab.
pub const FEEDBACK_CATEGORIES_N: usize = 4;
/// Leaderboard length.
pub const POSITIVE_KEYWORDS_N: usize = 8;
/// Minimum token length for the leaderboard.
pub const POSITIVE_KEYWORD_MIN_CHARS: usize = 5;
/// Praise excerpt length in chars.
pub const PRAISE_EXCERPT_CHARS: usize = 100;
/// Engagement per praise rating star.
pub const ENGAGEMENT_PER_STAR: u64 = 200;

pub const POSITIVE_KEYWORD_PALETTE: &[&str] = &[
    "bg-green-100 text-green-800",
    "bg-blue-100 text-blue-800",
    "bg-purple-100 text-purple-800",
    "bg-emerald-100 text-emerald-800",
    "bg-cyan-100 text-cyan-800",
    "bg-indigo-100 text-indigo-800",
    "bg-teal-100 text-teal-800",
    "bg-lime-100 text-lime-800",
];

/// One fixed feedback category: a post counts when it mentions any
/// `qualifiers` entry, and — where `subjects` is non-empty — also one of
/// the subjects.
struct CategoryRule {
    display: &'static str,
    subjects: &'static [&'static str],
    qualifiers: &'static [&'static str],
}

const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        display: "Customer Service",
        subjects: &[],
        qualifiers: &[
            "service", "support", "customer", "helpful", "responsive", "care", "assistance",
            "attention",
        ],
    },
    CategoryRule {
        display: "Overall Experience",
        subjects: &[],
        qualifiers: &[
            "experience", "journey", "ride", "trip", "overall", "amazing", "wonderful",
            "fantastic", "excellent", "seamless", "smooth",
        ],
    },
    CategoryRule {
        display: "App Usability",
        subjects: &[],
        qualifiers: &[
            "app", "booking", "easy", "simple", "convenient", "smooth", "user friendly",
            "interface", "platform",
        ],
    },
    CategoryRule {
        display: "Vehicle Condition",
        subjects: &["car", "vehicle"],
        qualifiers: &[
            "clean", "comfortable", "luxury", "premium", "well maintained", "spotless", "new",
            "modern", "electric",
        ],
    },
    CategoryRule {
        display: "On-Time Pickup",
        subjects: &[],
        qualifiers: &[
            "time", "punctual", "schedule", "on time", "early", "arrived", "timely", "prompt",
        ],
    },
    CategoryRule {
        display: "Safety & Reliability",
        subjects: &[],
        qualifiers: &[
            "safe", "safety", "secure", "reliable", "trust", "dependable", "peace of mind",
        ],
    },
    CategoryRule {
        display: "Driver Professionalism",
        subjects: &["driver"],
        qualifiers: &[
            "professional", "courteous", "friendly", "polite", "helpful", "experienced",
            "skilled", "well trained",
        ],
    },
    CategoryRule {
        display: "Value for Money",
        subjects: &[],
        qualifiers: &[
            "price", "cost", "affordable", "value", "worth", "reasonable", "fair", "competitive",
        ],
    },
];

fn rule_matches(lower: &str, rule: &CategoryRule) -> bool {
    let subject_ok =
        rule.subjects.is_empty() || rule.subjects.iter().any(|s| lower.contains(s));
    subject_ok && rule.qualifiers.iter().any(|q| lower.contains(q))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackCategory {
    pub name: String,
    pub count: u64,
    pub percentage: i64,
}

/// Tally the fixed categories over positive brand posts; top 4 by count.
pub fn generate_feedback_categories(posts: &[Post], brand: &BrandLexicon) -> Vec<FeedbackCategory> {
    let subset = filters::positive_posts_extended(posts, brand);
    let lowers: Vec<String> = subset.iter().map(|p| p.content.to_lowercase()).collect();

    let mut tallies: Vec<FeedbackCategory> = CATEGORY_RULES
        .iter()
        .map(|rule| {
            let count = lowers.iter().filter(|l| rule_matches(l, rule)).count();
            FeedbackCategory {
                name: rule.display.to_string(),
                count: count as u64,
                percentage: percent(count, subset.len()),
            }
        })
        .collect();

    tallies.sort_by(|a, b| b.count.cmp(&a.count));
    tallies.truncate(FEEDBACK_CATEGORIES_N);
    tallies
}

/// Top words from positive brand posts, with the layered stop list.
pub fn generate_positive_keywords(posts: &[Post], brand: &BrandLexicon) -> Vec<ColoredKeyword> {
    let subset = filters::positive_posts_extended(posts, brand);
    let texts: Vec<&str> = subset.iter().map(|p| p.content.as_str()).collect();
    let stops: HashSet<String> = brand.keyword_stop_words.iter().cloned().collect();
    let table = keywords::top_words(
        &texts,
        POSITIVE_KEYWORD_MIN_CHARS,
        &stops,
        POSITIVE_KEYWORDS_N,
    );
    colorize(table, POSITIVE_KEYWORD_PALETTE)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositiveReviewMetrics {
    pub avg_driver_rating: f64,
    pub avg_wait_time: f64,
    pub vehicle_praise: i64,
    #[serde(rename = "appUXWins")]
    pub app_ux_wins: i64,
    pub driver_engagement: u64,
    pub vehicle_engagement: u64,
    pub app_engagement: u64,
    pub total_positive_posts: u64,
}

/// Heuristic service-quality metrics from positive brand posts.
pub fn generate_positive_metrics(posts: &[Post], brand: &BrandLexicon) -> PositiveReviewMetrics {
    let subset = filters::positive_posts_extended(posts, brand);
    let n = subset.len();

    let with = |subjects: &[&str], qualifiers: &[&str]| -> Vec<&Post> {
        subset
            .iter()
            .filter(|p| {
                let lower = p.content.to_lowercase();
                subjects.iter().any(|s| lower.contains(s))
                    && qualifiers.iter().any(|q| lower.contains(q))
            })
            .copied()
            .collect()
    };

    let driver = with(
        &["driver"],
        &[
            "professional", "friendly", "courteous", "helpful", "experienced", "skilled", "good",
            "great", "excellent",
        ],
    );
    let wait = with(
        &["time"],
        &["on time", "punctual", "early", "arrived", "timely", "prompt"],
    );
    let vehicle = with(
        &["car", "vehicle"],
        &[
            "clean", "comfortable", "luxury", "premium", "well maintained", "spotless", "new",
            "modern", "electric",
        ],
    );
    let app = with(
        &["app"],
        &[
            "easy", "simple", "convenient", "smooth", "user friendly", "interface", "booking",
            "platform",
        ],
    );

    // Rating improves with the share of driver praise; wait shrinks with
    // punctuality mentions. Bounds keep the values on the display scale.
    let driver_rating = (3.5 + share(driver.len(), n) * 1.5).clamp(3.5, 5.0);
    let wait_minutes = (5.0 - share(wait.len(), n) * 3.0).clamp(1.0, 10.0);

    PositiveReviewMetrics {
        avg_driver_rating: round1(driver_rating),
        avg_wait_time: round1(wait_minutes),
        vehicle_praise: percent(vehicle.len(), n),
        app_ux_wins: percent(app.len(), n),
        driver_engagement: avg_engagement(&driver),
        vehicle_engagement: avg_engagement(&vehicle),
        app_engagement: avg_engagement(&app),
        total_positive_posts: n as u64,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Praise {
    pub praise: String,
    pub time: String,
    pub rating: u64,
}

/// Excerpts of the top posts, rated by engagement.
pub fn generate_recent_praises(
    top_posts: &[Post],
    now: chrono::DateTime<chrono::Utc>,
) -> Vec<Praise> {
    top_posts
        .iter()
        .take(3)
        .map(|p| Praise {
            praise: excerpt(&p.content, PRAISE_EXCERPT_CHARS),
            time: time_ago(p.published_at, now),
            rating: ((p.engagement as f64 / ENGAGEMENT_PER_STAR as f64).round() as u64).clamp(1, 5),
        })
        .collect()
}
