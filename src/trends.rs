//! Per-day trend buckets for the most recent seven days present in the data.
//!
//! Buckets key on the UTC calendar date of `publishedAt`. The emitted
//! proxies are fixed linear scalings of per-day averages; the coefficients
//! are presentation tuning, not business logic, so they live in
//! [`TrendScaling`] and can be overridden.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::post::Post;

/// Number of trailing day-buckets kept.
pub const TREND_WINDOW_DAYS: usize = 7;

/// Linear scalings applied to per-day averages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrendScaling {
    /// positive proxy = round(avg likes / divisor)
    pub positive_divisor: f64,
    /// negative proxy = round(avg comments × multiplier)
    pub negative_multiplier: f64,
    /// queries proxy = round(avg shares × multiplier)
    pub queries_multiplier: f64,
}

impl Default for TrendScaling {
    fn default() -> Self {
        Self {
            positive_divisor: 10.0,
            negative_multiplier: 2.0,
            queries_multiplier: 5.0,
        }
    }
}

/// One calendar day's normalized proxy metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Zero-padded day-of-month label ("05").
    pub day: String,
    pub positive: i64,
    pub negative: i64,
    pub queries: i64,
}

#[derive(Debug, Default, Clone, Copy)]
struct DayTotals {
    posts: u64,
    likes: u64,
    comments: u64,
    shares: u64,
}

/// Bucket posts by day, keep the chronologically last seven distinct days,
/// and scale per-day averages into proxy metrics.
pub fn compute_trends(posts: &[Post], scaling: &TrendScaling) -> Vec<TrendPoint> {
    let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();
    for p in posts {
        let t = days.entry(p.published_at.date_naive()).or_default();
        t.posts += 1;
        t.likes += p.likes;
        t.comments += p.comments;
        t.shares += p.shares;
    }

    let skip = days.len().saturating_sub(TREND_WINDOW_DAYS);
    days.into_iter()
        .skip(skip)
        .map(|(date, t)| {
            let n = t.posts as f64; // ≥1 by construction
            TrendPoint {
                day: format!("{:02}", date.day()),
                positive: ((t.likes as f64 / n) / scaling.positive_divisor).round() as i64,
                negative: ((t.comments as f64 / n) * scaling.negative_multiplier).round() as i64,
                queries: ((t.shares as f64 / n) * scaling.queries_multiplier).round() as i64,
            }
        })
        .collect()
}
