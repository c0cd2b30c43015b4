//! Brand subset selectors shared by every report generator.
//!
//! A post belongs to a subset when its lowercased content mentions the
//! brand AND at least one term from the subset's list. The original
//! implementation repeated these closures in every generator; they are
//! collapsed here so each list exists exactly once.

use crate::lexicon::BrandLexicon;
use crate::post::Post;

/// True when the lowercased text contains any of the (lowercase) terms.
pub fn matches_any(lower: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| lower.contains(t.as_str()))
}

fn select<'a>(posts: &'a [Post], brand: &str, terms: &[String]) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| {
            let lower = p.content.to_lowercase();
            lower.contains(brand) && matches_any(&lower, terms)
        })
        .collect()
}

/// Brand posts describing an experience with the service.
pub fn experience_posts<'a>(posts: &'a [Post], brand: &BrandLexicon) -> Vec<&'a Post> {
    select(posts, &brand.brand, &brand.experience_terms)
}

/// Brand posts with a core positive term (insight generator selector).
pub fn positive_posts_core<'a>(posts: &'a [Post], brand: &BrandLexicon) -> Vec<&'a Post> {
    select(posts, &brand.brand, &brand.positive_terms)
}

/// Brand posts with any positive term including the service-quality
/// extension (categories, leaderboards, metrics).
pub fn positive_posts_extended<'a>(posts: &'a [Post], brand: &BrandLexicon) -> Vec<&'a Post> {
    select(posts, &brand.brand, &brand.positive_terms_extended())
}

/// Brand posts with a core negative term (insight generator selector).
pub fn negative_posts_core<'a>(posts: &'a [Post], brand: &BrandLexicon) -> Vec<&'a Post> {
    select(posts, &brand.brand, &brand.negative_terms)
}

/// Brand posts with any negative term including the extension (problem
/// areas, leaderboards, metrics, complaints).
pub fn negative_posts_extended<'a>(posts: &'a [Post], brand: &BrandLexicon) -> Vec<&'a Post> {
    select(posts, &brand.brand, &brand.negative_terms_extended())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Sentiment;
    use chrono::Utc;

    fn post(content: &str) -> Post {
        Post {
            id: 1,
            content: content.into(),
            author: "A".into(),
            occupation: String::new(),
            published_at: Utc::now(),
            likes: 0,
            comments: 0,
            shares: 0,
            engagement: 0,
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
    fn brand_mention_is_required() {
        let brand = BrandLexicon::default_seed();
        let posts = vec![
            post("Great ride with Shoffr yesterday"),
            post("Great ride with some other cab"),
        ];
        let hits = experience_posts(&posts, &brand);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, posts[0].id);
    }

    #[test]
    fn extended_selector_is_wider_than_core() {
        let brand = BrandLexicon::default_seed();
        // "punctual" is a service term, not a core positive term
        let posts = vec![post("Shoffr driver was punctual")];
        assert!(positive_posts_core(&posts, &brand).is_empty());
        assert_eq!(positive_posts_extended(&posts, &brand).len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let brand = BrandLexicon::default_seed();
        let posts = vec![post("SHOFFR was UNRELIABLE today")];
        assert_eq!(negative_posts_core(&posts, &brand).len(), 1);
    }
}
