//! # Presentation Document
//!
//! The denormalized, display-shaped projection the dashboard reads. Field
//! and section names are a fixed contract with the display layer, which
//! indexes into this document and performs no further computation — so
//! assembly here is pure reshaping of already-computed values.

use serde::Serialize;

use crate::analytics::AggregateAnalytics;
use crate::reports::insights::KeyInsight;
use crate::reports::negative::{Complaint, NegativeReviewMetrics, ProblemArea};
use crate::reports::positive::{FeedbackCategory, PositiveReviewMetrics, Praise};
use crate::reports::{percent, ColoredKeyword};
use crate::trends::TrendPoint;

pub const SENTIMENT_COLOR_POSITIVE: &str = "#16a34a";
pub const SENTIMENT_COLOR_NEGATIVE: &str = "#dc2626";
pub const SENTIMENT_COLOR_NEUTRAL: &str = "#0891b2";
pub const SENTIMENT_COLOR_FALLBACK: &str = "#6b7280";

pub fn sentiment_color(label: &str) -> &'static str {
    match label {
        "positive" => SENTIMENT_COLOR_POSITIVE,
        "negative" => SENTIMENT_COLOR_NEGATIVE,
        "neutral" => SENTIMENT_COLOR_NEUTRAL,
        _ => SENTIMENT_COLOR_FALLBACK,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderData {
    pub total_reviews: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentSlice {
    pub name: String,
    pub value: i64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub bg_color: String,
    pub text_color: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_text_color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSection {
    pub header_data: HeaderData,
    pub sentiment_data: Vec<SentimentSlice>,
    pub trend_data: Vec<TrendPoint>,
    pub metric_cards: Vec<MetricCard>,
    pub key_insights: Vec<KeyInsight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub value: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSection {
    pub positive_data: Vec<SeriesPoint>,
    pub negative_data: Vec<SeriesPoint>,
    pub queries_data: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositiveReviewsSection {
    pub positive_keywords: Vec<ColoredKeyword>,
    pub recent_praises: Vec<Praise>,
    pub positive_feedback_categories: Vec<FeedbackCategory>,
    pub positive_review_metrics: PositiveReviewMetrics,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeReviewsSection {
    pub negative_keywords: Vec<ColoredKeyword>,
    pub recent_complaints: Vec<Complaint>,
    pub negative_review_metrics: NegativeReviewMetrics,
    pub negative_problem_areas: Vec<ProblemArea>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryType {
    pub name: String,
    pub value: i64,
    pub color: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueriesSection {
    pub query_types: Vec<QueryType>,
    pub top_questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusArea {
    pub id: String,
    pub area: String,
    pub urgency: String,
    pub impact: String,
    pub analysis: String,
    pub solves: String,
    pub solves_detail: String,
    pub timeline: String,
    pub department: String,
    pub severity: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionsSection {
    pub focus_areas: Vec<FocusArea>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentIssue {
    pub name: String,
    pub count: u64,
    pub urgency: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub percentage: i64,
    pub trend: String,
    pub trend_direction: String,
    pub color: String,
    pub bg_color: String,
    pub border_color: String,
    pub issues: Vec<DepartmentIssue>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopIssuesSection {
    pub department_data: Vec<Department>,
    pub trend_data: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabDef {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabsSection {
    pub tabs: Vec<TabDef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    pub id: String,
    pub label: String,
    pub short_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriodSelector {
    pub time_periods: Vec<TimePeriod>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub overall_section: OverallSection,
    pub overview_section: OverviewSection,
    pub positive_reviews_section: PositiveReviewsSection,
    pub negative_reviews_section: NegativeReviewsSection,
    pub queries_section: QueriesSection,
    pub actions_section: ActionsSection,
    pub top_issues_section: TopIssuesSection,
    pub tabs: TabsSection,
    pub time_period_selector: TimePeriodSelector,
}

/// Everything the report generators produced, handed to the assembler.
#[derive(Debug, Clone)]
pub struct ReportOutputs {
    pub key_insights: Vec<KeyInsight>,
    pub positive_keywords: Vec<ColoredKeyword>,
    pub feedback_categories: Vec<FeedbackCategory>,
    pub positive_metrics: PositiveReviewMetrics,
    pub recent_praises: Vec<Praise>,
    pub negative_keywords: Vec<ColoredKeyword>,
    pub problem_areas: Vec<ProblemArea>,
    pub negative_metrics: NegativeReviewMetrics,
    pub recent_complaints: Vec<Complaint>,
}

/// Combine analytics and report outputs into the display document.
pub fn assemble(analytics: &AggregateAnalytics, reports: ReportOutputs) -> DashboardData {
    let total = analytics.total_posts as usize;
    let count_of = |label: &str| *analytics.sentiment_counts.get(label).unwrap_or(&0) as usize;

    let sentiment_data = analytics
        .sentiment_counts
        .iter()
        .map(|(label, count)| SentimentSlice {
            name: label.clone(),
            value: percent(*count as usize, total),
            color: sentiment_color(label).to_string(),
        })
        .collect();

    let metric_cards = vec![
        MetricCard {
            title: "Avg Engagement".into(),
            value: (analytics.avg_engagement.round() as i64).to_string(),
            bg_color: "bg-secondary/30".into(),
            text_color: "text-foreground".into(),
            description: "Avg Engagement".into(),
            sub_value: None,
            sub_text_color: None,
        },
        sentiment_card("Positive", count_of("positive"), total, "bg-green-50", "text-green-600"),
        sentiment_card("Negative", count_of("negative"), total, "bg-red-50", "text-red-600"),
        sentiment_card("Neutral", count_of("neutral"), total, "bg-blue-50", "text-blue-600"),
    ];

    let round_share = |x: f64| (x).round() as u64;

    DashboardData {
        overall_section: OverallSection {
            header_data: HeaderData {
                total_reviews: analytics.total_posts.to_string(),
                description: "Total LinkedIn Posts This Month".into(),
            },
            sentiment_data,
            trend_data: analytics.trends.clone(),
            metric_cards,
            key_insights: reports.key_insights,
        },
        overview_section: OverviewSection {
            positive_data: series(&analytics.trends, |t| t.positive),
            negative_data: series(&analytics.trends, |t| t.negative),
            queries_data: series(&analytics.trends, |t| t.queries),
        },
        positive_reviews_section: PositiveReviewsSection {
            positive_keywords: reports.positive_keywords,
            recent_praises: reports.recent_praises,
            positive_feedback_categories: reports.feedback_categories,
            positive_review_metrics: reports.positive_metrics,
        },
        negative_reviews_section: NegativeReviewsSection {
            negative_keywords: reports.negative_keywords,
            recent_complaints: reports.recent_complaints,
            negative_review_metrics: reports.negative_metrics,
            negative_problem_areas: reports.problem_areas,
        },
        queries_section: QueriesSection {
            query_types: vec![
                QueryType {
                    name: "Engagement".into(),
                    value: 35,
                    color: "#3b82f6".into(),
                    count: round_share(analytics.total_likes as f64 * 0.35),
                },
                QueryType {
                    name: "Comments".into(),
                    value: 28,
                    color: "#06b6d4".into(),
                    count: analytics.total_comments,
                },
                QueryType {
                    name: "Shares".into(),
                    value: 22,
                    color: "#8b5cf6".into(),
                    count: analytics.total_shares,
                },
                QueryType {
                    name: "Likes".into(),
                    value: 15,
                    color: "#10b981".into(),
                    count: round_share(analytics.total_likes as f64 * 0.15),
                },
            ],
            top_questions: vec![
                "How to increase LinkedIn engagement?".into(),
                "What content performs best?".into(),
                "When to post for maximum reach?".into(),
                "How to optimize hashtags?".into(),
                "Best practices for LinkedIn posts?".into(),
            ],
        },
        actions_section: actions_section(analytics),
        top_issues_section: top_issues_section(analytics),
        tabs: tabs_section(analytics),
        time_period_selector: time_period_selector(),
    }
}

fn sentiment_card(
    title: &str,
    count: usize,
    total: usize,
    bg: &str,
    text: &str,
) -> MetricCard {
    MetricCard {
        title: title.into(),
        value: format!("{}%", percent(count, total)),
        bg_color: bg.into(),
        text_color: text.into(),
        description: title.into(),
        sub_value: Some(format!("{count} posts")),
        sub_text_color: Some(text.into()),
    }
}

fn series(trends: &[TrendPoint], f: impl Fn(&TrendPoint) -> i64) -> Vec<SeriesPoint> {
    trends.iter().map(|t| SeriesPoint { value: f(t) }).collect()
}

fn actions_section(analytics: &AggregateAnalytics) -> ActionsSection {
    let total = analytics.total_posts as usize;
    let low = analytics.low_engagement_posts;
    let medium = analytics.medium_engagement_posts;
    let round = |x: f64| x.round() as u64;

    ActionsSection {
        focus_areas: vec![
            FocusArea {
                id: "P1".into(),
                area: "Content Engagement Optimization".into(),
                urgency: "Critical".into(),
                impact: "High".into(),
                analysis: format!(
                    "{low} posts have low engagement ({}% of total)",
                    percent(low as usize, total)
                ),
                solves: format!(
                    "~{} posts will improve with better content strategy",
                    round(low as f64 * 0.5)
                ),
                solves_detail: "Content team needs to focus on engagement optimization".into(),
                timeline: "Immediate".into(),
                department: "Content".into(),
                severity: "critical".into(),
            },
            FocusArea {
                id: "P2".into(),
                area: "Posting Schedule Optimization".into(),
                urgency: "High".into(),
                impact: "Medium".into(),
                analysis: "Posting times affect engagement rates significantly".into(),
                solves: format!(
                    "~{} posts will benefit from better timing",
                    round(medium as f64 * 0.3)
                ),
                solves_detail: "Analytics team to analyze optimal posting times".into(),
                timeline: "48 hours".into(),
                department: "Analytics".into(),
                severity: "high".into(),
            },
            FocusArea {
                id: "P3".into(),
                area: "Hashtag Strategy Improvement".into(),
                urgency: "High".into(),
                impact: "Medium".into(),
                analysis: "Hashtag usage can increase reach by 25%".into(),
                solves: format!(
                    "~{} posts need better hashtag strategy",
                    round(total as f64 * 0.2)
                ),
                solves_detail: "Marketing team to research trending hashtags".into(),
                timeline: "1 week".into(),
                department: "Marketing".into(),
                severity: "high".into(),
            },
        ],
    }
}

fn top_issues_section(analytics: &AggregateAnalytics) -> TopIssuesSection {
    let total = analytics.total_posts as usize;
    let round = |x: f64| x.round() as u64;

    let issue = |name: &str, count: u64, urgency: &str, action: &str| DepartmentIssue {
        name: name.into(),
        count,
        urgency: urgency.into(),
        action: action.into(),
    };

    TopIssuesSection {
        department_data: vec![
            Department {
                id: "content".into(),
                name: "Content Team".into(),
                icon: "Users".into(),
                percentage: percent(analytics.high_engagement_posts as usize, total),
                trend: "+2.3%".into(),
                trend_direction: "up".into(),
                color: "green".into(),
                bg_color: "bg-green-50/50".into(),
                border_color: "border-green-200/50".into(),
                issues: vec![
                    issue(
                        "Low Engagement Posts",
                        analytics.low_engagement_posts,
                        "High",
                        "Content strategy review needed",
                    ),
                    issue(
                        "Poor Timing",
                        round(total as f64 * 0.2),
                        "Medium",
                        "Schedule optimization required",
                    ),
                    issue(
                        "Weak CTAs",
                        round(total as f64 * 0.15),
                        "Medium",
                        "Call-to-action improvement",
                    ),
                    issue(
                        "Hashtag Issues",
                        round(total as f64 * 0.1),
                        "Low",
                        "Hashtag research needed",
                    ),
                ],
            },
            Department {
                id: "analytics".into(),
                name: "Analytics Team".into(),
                icon: "Settings".into(),
                percentage: percent(analytics.medium_engagement_posts as usize, total),
                trend: "+1.8%".into(),
                trend_direction: "up".into(),
                color: "blue".into(),
                bg_color: "bg-blue-50/50".into(),
                border_color: "border-blue-200/50".into(),
                issues: vec![
                    issue(
                        "Data Tracking",
                        round(total as f64 * 0.25),
                        "High",
                        "Analytics setup improvement",
                    ),
                    issue(
                        "Report Delays",
                        round(total as f64 * 0.15),
                        "Medium",
                        "Automation needed",
                    ),
                    issue(
                        "Insight Quality",
                        round(total as f64 * 0.1),
                        "Medium",
                        "Analysis methodology review",
                    ),
                ],
            },
        ],
        trend_data: analytics
            .trends
            .iter()
            .map(|t| SeriesPoint {
                value: t.positive + t.negative,
            })
            .collect(),
    }
}

fn tabs_section(analytics: &AggregateAnalytics) -> TabsSection {
    let count_of = |label: &str| *analytics.sentiment_counts.get(label).unwrap_or(&0);
    let tab = |id: &str, label: &str, icon: &str, description: String| TabDef {
        id: id.into(),
        label: label.into(),
        icon: icon.into(),
        description,
    };

    TabsSection {
        tabs: vec![
            tab("overall", "Overall", "📊", "Complete overview".into()),
            tab("positive", "Positive", "👍", format!("{} posts", count_of("positive"))),
            tab("negative", "Negative", "⚠️", format!("{} posts", count_of("negative"))),
            tab("queries", "Queries", "❓", format!("{} queries", analytics.total_comments)),
            tab("departments", "Teams", "👥", "Department view".into()),
            tab("actions", "Actions", "🎯", "Action items".into()),
        ],
    }
}

fn time_period_selector() -> TimePeriodSelector {
    let period = |id: &str, label: &str, short: &str| TimePeriod {
        id: id.into(),
        label: label.into(),
        short_label: short.into(),
    };

    TimePeriodSelector {
        time_periods: vec![
            period("today", "Today", "Today"),
            period("yesterday", "Yesterday", "Yesterday"),
            period("last7days", "Last 7 Days", "7D"),
            period("thisweek", "This Week", "This Week"),
            period("lastweek", "Last Week", "Last Week"),
            period("thismonth", "This Month", "This Month"),
            period("lastmonth", "Last Month", "Last Month"),
            period("last3months", "Last 3 Months", "3M"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_colors_are_fixed() {
        assert_eq!(sentiment_color("positive"), "#16a34a");
        assert_eq!(sentiment_color("negative"), "#dc2626");
        assert_eq!(sentiment_color("neutral"), "#0891b2");
        assert_eq!(sentiment_color("other"), "#6b7280");
    }
}
