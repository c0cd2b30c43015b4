//! Narrative key insights for the overall tab.
//!
//! Phrase templates are threshold-gated; when fewer than two fire, two
//! guaranteed fallbacks fill the list, so the section is never empty.

use serde::Serialize;

use super::{avg_engagement, capitalize, filters, percent};
use crate::lexicon::BrandLexicon;
use crate::post::Post;

/// Satisfaction template fires above this positive-experience rate.
pub const SATISFACTION_RATE_MIN: i64 = 50;
/// Engagement-based fallback phrasing fires above this average.
pub const STRONG_ENGAGEMENT_MIN: u64 = 80;
/// Growth template fires above this high-engagement rate.
pub const GROWTH_RATE_MIN: i64 = 15;
/// High-engagement cutoff referenced by the growth template.
pub const EXCEPTIONAL_ENGAGEMENT: u64 = 100;
/// Emitted insight count.
pub const INSIGHTS_N: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyInsight {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub percentage: i64,
}

impl KeyInsight {
    fn positive(text: String, percentage: i64) -> Self {
        Self {
            kind: "positive".into(),
            text,
            percentage,
        }
    }
    fn growth(text: String, percentage: i64) -> Self {
        Self {
            kind: "growth".into(),
            text,
            percentage,
        }
    }
}

/// Assemble at most two insights from brand experience posts.
pub fn generate_key_insights(
    posts: &[Post],
    total_posts: u64,
    brand: &BrandLexicon,
) -> Vec<KeyInsight> {
    let name = capitalize(&brand.brand);

    let experience = filters::experience_posts(posts, brand);
    let n = experience.len();

    let positive = experience
        .iter()
        .filter(|p| filters::matches_any(&p.content.to_lowercase(), &brand.positive_terms))
        .count();
    let negative = experience
        .iter()
        .filter(|p| filters::matches_any(&p.content.to_lowercase(), &brand.negative_terms))
        .count();
    let high = experience
        .iter()
        .filter(|p| p.engagement > EXCEPTIONAL_ENGAGEMENT)
        .count();

    let positive_rate = percent(positive, n);
    let negative_rate = percent(negative, n);
    let high_rate = percent(high, n);
    let avg = avg_engagement(&experience);

    let mut insights = Vec::new();

    if positive_rate > SATISFACTION_RATE_MIN {
        insights.push(KeyInsight::positive(
            format!(
                "{name} experience posts show strong satisfaction - {positive_rate}% of posts express positive experiences"
            ),
            positive_rate,
        ));
    } else if avg > STRONG_ENGAGEMENT_MIN {
        insights.push(KeyInsight::positive(
            format!(
                "{name} experience content generates strong engagement with {avg} average engagement"
            ),
            (avg as f64 / 10.0).round() as i64,
        ));
    }

    if high_rate > GROWTH_RATE_MIN {
        insights.push(KeyInsight::growth(
            format!(
                "{high_rate}% of {name} experience posts achieve exceptional engagement (>{EXCEPTIONAL_ENGAGEMENT}), indicating strong brand resonance"
            ),
            high_rate,
        ));
    }

    if positive_rate > negative_rate {
        insights.push(KeyInsight::positive(
            format!(
                "Customer experience quality is strong - {positive_rate}% positive vs {negative_rate}% negative mentions"
            ),
            positive_rate,
        ));
    }

    // Guaranteed fallbacks when no strong pattern emerged.
    if insights.len() < INSIGHTS_N {
        insights.push(KeyInsight::positive(
            format!(
                "{name} experience posts average {avg} engagement, showing strong customer interest"
            ),
            (avg as f64 / 10.0).round() as i64,
        ));
        insights.push(KeyInsight::growth(
            format!("{n} posts discuss {name} experience, indicating strong brand awareness"),
            percent(n, total_posts as usize),
        ));
    }

    insights.truncate(INSIGHTS_N);
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Sentiment;
    use chrono::Utc;

    fn post(content: &str, engagement: u64) -> Post {
        Post {
            id: 1,
            content: content.into(),
            author: "A".into(),
            occupation: String::new(),
            published_at: Utc::now(),
            likes: engagement,
            comments: 0,
            shares: 0,
            engagement,
            sentiment: Sentiment::Neutral,
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
    fn satisfaction_insight_fires_above_half() {
        let brand = BrandLexicon::default_seed();
        let posts = vec![
            post("Shoffr ride was great", 10),
            post("Shoffr service was good", 10),
            post("Shoffr trip was terrible", 10),
        ];
        let insights = generate_key_insights(&posts, 3, &brand);
        assert_eq!(insights.len(), 2);
        assert!(insights[0].text.contains("67% of posts express positive"));
        assert_eq!(insights[0].percentage, 67);
    }

    #[test]
    fn empty_subset_yields_the_two_fallbacks() {
        let brand = BrandLexicon::default_seed();
        let posts = vec![post("nothing about the brand here", 10)];
        let insights = generate_key_insights(&posts, 1, &brand);
        assert_eq!(insights.len(), 2);
        assert!(insights[0].text.contains("average 0 engagement"));
        assert_eq!(insights[1].percentage, 0);
    }

    #[test]
    fn growth_insight_requires_high_engagement_share() {
        let brand = BrandLexicon::default_seed();
        let posts = vec![
            post("Shoffr ride went fine", 500),
            post("Shoffr trip story", 400),
        ];
        let insights = generate_key_insights(&posts, 2, &brand);
        assert!(insights
            .iter()
            .any(|i| i.kind == "growth" && i.text.contains("100% of Shoffr experience posts")));
    }

    #[test]
    fn always_at_most_two() {
        let brand = BrandLexicon::default_seed();
        // all gates fire at once
        let posts = vec![
            post("Shoffr ride was great and reliable", 500),
            post("Shoffr trip was amazing", 400),
        ];
        assert_eq!(generate_key_insights(&posts, 2, &brand).len(), 2);
    }
}
