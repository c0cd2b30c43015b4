//! Negative-review reports: problem areas, keyword leaderboard, review
//! metrics, and recent complaints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{avg_engagement, colorize, excerpt, filters, percent, round1, share, time_ago, ColoredKeyword};
use crate::keywords;
use crate::lexicon::BrandLexicon;
use crate::post::Post;

pub const PROBLEM_AREAS_N: usize = 4;
pub const NEGATIVE_KEYWORDS_N: usize = 8;
pub const RECENT_COMPLAINTS_N: usize = 3;
/// Complaint excerpt length in chars.
pub const COMPLAINT_EXCERPT_CHARS: usize = 80;

/// Low-engagement complaints read as unresolved.
pub const SEVERITY_HIGH_BELOW: u64 = 10;
pub const SEVERITY_MEDIUM_BELOW: u64 = 30;

/// Count every pad entry once; a fixed count keeps reruns byte-identical.
pub const PAD_KEYWORD_COUNT: u64 = 1;

pub const NEGATIVE_KEYWORD_PALETTE: &[&str] = &[
    "bg-red-100 text-red-800",
    "bg-orange-100 text-orange-800",
    "bg-pink-100 text-pink-800",
    "bg-rose-100 text-rose-800",
    "bg-amber-100 text-amber-800",
    "bg-yellow-100 text-yellow-800",
];

/// One fixed problem area. As in the positive categories, `subjects` (when
/// non-empty) must co-occur with a qualifier.
struct ProblemRule {
    display: &'static str,
    subjects: &'static [&'static str],
    qualifiers: &'static [&'static str],
}

const PROBLEM_RULES: &[ProblemRule] = &[
    ProblemRule {
        display: "Reliability Issues",
        subjects: &[],
        qualifiers: &[
            "unreliable", "cancelled", "no show", "failed", "didn't arrive", "missed",
        ],
    },
    ProblemRule {
        display: "Service Quality",
        subjects: &[],
        qualifiers: &["poor", "bad service", "terrible", "awful", "horrible", "worst"],
    },
    ProblemRule {
        display: "Communication Problems",
        subjects: &[],
        qualifiers: &[
            "no response", "customer service", "support", "unresponsive", "ignored", "no reply",
        ],
    },
    ProblemRule {
        display: "Pricing Issues",
        subjects: &[],
        qualifiers: &["expensive", "overpriced", "cost", "price", "charge", "billing"],
    },
    ProblemRule {
        display: "Technical Problems",
        subjects: &["app"],
        qualifiers: &["bug", "error", "crash", "glitch", "slow", "unresponsive"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemArea {
    pub name: String,
    pub count: u64,
    pub percentage: i64,
}

/// Tally the fixed problem areas over negative brand posts; top 4 by count.
pub fn generate_problem_areas(posts: &[Post], brand: &BrandLexicon) -> Vec<ProblemArea> {
    let subset = filters::negative_posts_extended(posts, brand);
    let lowers: Vec<String> = subset.iter().map(|p| p.content.to_lowercase()).collect();

    let mut areas: Vec<ProblemArea> = PROBLEM_RULES
        .iter()
        .map(|rule| {
            let count = lowers
                .iter()
                .filter(|l| {
                    let subject_ok =
                        rule.subjects.is_empty() || rule.subjects.iter().any(|s| l.contains(s));
                    subject_ok && rule.qualifiers.iter().any(|q| l.contains(q))
                })
                .count();
            ProblemArea {
                name: rule.display.to_string(),
                count: count as u64,
                percentage: percent(count, subset.len()),
            }
        })
        .collect();

    areas.sort_by(|a, b| b.count.cmp(&a.count));
    areas.truncate(PROBLEM_AREAS_N);
    areas
}

/// Complaint-word leaderboard, padded deterministically to eight entries
/// when the corpus yields fewer.
pub fn generate_negative_keywords(posts: &[Post], brand: &BrandLexicon) -> Vec<ColoredKeyword> {
    let subset = filters::negative_posts_extended(posts, brand);
    let texts: Vec<&str> = subset.iter().map(|p| p.content.as_str()).collect();
    let table = keywords::vocabulary_counts(&texts, &brand.negative_vocabulary, NEGATIVE_KEYWORDS_N);
    let mut out = colorize(table, NEGATIVE_KEYWORD_PALETTE);

    while out.len() < NEGATIVE_KEYWORDS_N {
        let slot = out.len();
        let word = brand
            .negative_pad_words
            .get(slot)
            .cloned()
            .unwrap_or_else(|| "Negative".to_string());
        out.push(ColoredKeyword {
            word,
            count: PAD_KEYWORD_COUNT,
            color: NEGATIVE_KEYWORD_PALETTE[slot % NEGATIVE_KEYWORD_PALETTE.len()].to_string(),
        });
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeReviewMetrics {
    pub avg_driver_rating: f64,
    pub avg_wait_time: f64,
    pub vehicle_issues: i64,
    pub app_issues: i64,
    pub driver_engagement: u64,
    pub wait_engagement: u64,
    pub vehicle_engagement: u64,
    pub app_engagement: u64,
    pub total_negative_posts: u64,
}

/// Heuristic service-quality metrics from negative brand posts.
pub fn generate_negative_metrics(posts: &[Post], brand: &BrandLexicon) -> NegativeReviewMetrics {
    let subset = filters::negative_posts_extended(posts, brand);
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
            "rude", "unprofessional", "bad", "poor", "terrible", "awful", "late", "cancelled",
            "no show",
        ],
    );
    let wait = with(
        &["time"],
        &["late", "delay", "wait", "cancelled", "no show", "unreliable"],
    );
    let vehicle = with(
        &["car", "vehicle"],
        &["dirty", "old", "broken", "uncomfortable", "smelly", "poor condition"],
    );
    let app: Vec<&Post> = subset
        .iter()
        .filter(|p| {
            let lower = p.content.to_lowercase();
            lower.contains("app")
                && (["bug", "glitch", "error", "crash", "slow", "unresponsive"]
                    .iter()
                    .any(|q| lower.contains(q))
                    || (lower.contains("booking")
                        && (lower.contains("failed") || lower.contains("problem"))))
        })
        .copied()
        .collect();

    // Rating sinks with the share of driver complaints; wait grows with
    // delay mentions. Bounds keep the values on the display scale.
    let driver_rating = (3.5 - share(driver.len(), n) * 2.0).clamp(1.0, 3.5);
    let wait_minutes = (5.0 + share(wait.len(), n) * 8.0).clamp(5.0, 15.0);

    NegativeReviewMetrics {
        avg_driver_rating: round1(driver_rating),
        avg_wait_time: round1(wait_minutes),
        vehicle_issues: percent(vehicle.len(), n),
        app_issues: percent(app.len(), n),
        driver_engagement: avg_engagement(&driver),
        wait_engagement: avg_engagement(&wait),
        vehicle_engagement: avg_engagement(&vehicle),
        app_engagement: avg_engagement(&app),
        total_negative_posts: n as u64,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Complaint {
    pub issue: String,
    pub severity: String,
    pub time: String,
    pub engagement: u64,
}

/// Most recent negative brand posts as complaint excerpts.
pub fn generate_recent_complaints(
    posts: &[Post],
    brand: &BrandLexicon,
    now: DateTime<Utc>,
) -> Vec<Complaint> {
    let mut subset = filters::negative_posts_extended(posts, brand);
    subset.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    subset
        .iter()
        .take(RECENT_COMPLAINTS_N)
        .map(|p| Complaint {
            issue: excerpt(&p.content, COMPLAINT_EXCERPT_CHARS),
            severity: severity(p.engagement).to_string(),
            time: time_ago(p.published_at, now),
            engagement: p.engagement,
        })
        .collect()
}

fn severity(engagement: u64) -> &'static str {
    if engagement < SEVERITY_HIGH_BELOW {
        "high"
    } else if engagement < SEVERITY_MEDIUM_BELOW {
        "medium"
    } else {
        "low"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Sentiment;
    use chrono::TimeZone;

    fn post_at(id: u64, content: &str, engagement: u64, day: u32) -> Post {
        Post {
            id,
            content: content.into(),
            author: "A".into(),
            occupation: String::new(),
            published_at: Utc.with_ymd_and_hms(2025, 6, day, 8, 0, 0).unwrap(),
            likes: engagement,
            comments: 0,
            shares: 0,
            engagement,
            sentiment: Sentiment::Negative,
            hashtags: vec![],
            reach: 0,
            clicks_estimate: 0,
            source_url: String::new(),
            is_repost: false,
            author_type: "Person".into(),
            post_type: "text".into(),
        }
    }

    #[test]
    fn problem_areas_tally_and_sort() {
        let brand = BrandLexicon::default_seed();
        let posts = vec![
            post_at(1, "Shoffr cab cancelled on me, unreliable", 5, 1),
            post_at(2, "Shoffr ride failed to show, cancelled again", 5, 2),
            post_at(3, "Shoffr was terrible and overpriced", 5, 3),
        ];
        let areas = generate_problem_areas(&posts, &brand);
        assert_eq!(areas.len(), PROBLEM_AREAS_N);
        assert_eq!(areas[0].name, "Reliability Issues");
        assert_eq!(areas[0].count, 2);
        assert_eq!(areas[0].percentage, 67);
    }

    #[test]
    fn technical_problems_require_app_mention() {
        let brand = BrandLexicon::default_seed();
        // "slow" alone is not a technical problem without "app"
        let posts = vec![post_at(1, "Shoffr was slow and late", 5, 1)];
        let areas = generate_problem_areas(&posts, &brand);
        assert!(!areas
            .iter()
            .any(|a| a.name == "Technical Problems" && a.count > 0));
    }

    #[test]
    fn negative_keywords_pad_deterministically() {
        let brand = BrandLexicon::default_seed();
        let posts = vec![post_at(1, "Shoffr cab was dirty and late", 5, 1)];
        let kw = generate_negative_keywords(&posts, &brand);
        assert_eq!(kw.len(), NEGATIVE_KEYWORDS_N);
        assert_eq!(kw[0].word, "Dirty");
        assert_eq!(kw[1].word, "Late");
        // padded slots carry the fixed vocabulary and count
        assert_eq!(kw[2].word, "Terrible");
        assert!(kw[2..].iter().all(|k| k.count == PAD_KEYWORD_COUNT));
        // rerun is identical
        assert_eq!(kw, generate_negative_keywords(&posts, &brand));
    }

    #[test]
    fn metrics_default_on_empty_subset() {
        let brand = BrandLexicon::default_seed();
        let m = generate_negative_metrics(&[], &brand);
        assert_eq!(m.avg_driver_rating, 3.5);
        assert_eq!(m.avg_wait_time, 5.0);
        assert_eq!(m.vehicle_issues, 0);
        assert_eq!(m.app_issues, 0);
        assert_eq!(m.total_negative_posts, 0);
    }

    #[test]
    fn metrics_track_complaint_shares() {
        let brand = BrandLexicon::default_seed();
        let posts = vec![
            post_at(1, "Shoffr driver was rude, terrible trip", 20, 1),
            post_at(2, "Shoffr app crash during booking, awful", 10, 2),
        ];
        let m = generate_negative_metrics(&posts, &brand);
        assert_eq!(m.total_negative_posts, 2);
        assert_eq!(m.avg_driver_rating, 2.5); // 3.5 − 0.5×2
        assert_eq!(m.app_issues, 50);
        assert_eq!(m.driver_engagement, 20);
    }

    #[test]
    fn complaints_sorted_newest_first_with_severity() {
        let brand = BrandLexicon::default_seed();
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 8, 0, 0).unwrap();
        let posts = vec![
            post_at(1, "Shoffr was terrible", 5, 1),
            post_at(2, "Shoffr was awful", 15, 8),
            post_at(3, "Shoffr was horrible", 50, 5),
            post_at(4, "Shoffr was dirty", 3, 9),
        ];
        let complaints = generate_recent_complaints(&posts, &brand, now);
        assert_eq!(complaints.len(), RECENT_COMPLAINTS_N);
        assert_eq!(complaints[0].issue, "Shoffr was dirty...");
        assert_eq!(complaints[0].severity, "high");
        assert_eq!(complaints[1].severity, "medium");
        assert_eq!(complaints[2].severity, "low");
        assert_eq!(complaints[0].time, "1 days ago");
    }
}
