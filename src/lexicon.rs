//! # Lexicons
//!
//! Injectable word-set configuration for the classifier and the brand
//! report generators.
//!
//! - Loads from TOML (`config/lexicon.toml` by default, `LEXICON_CONFIG_PATH`
//!   to override).
//! - Every section falls back to a built-in `default_seed()`, so a partial
//!   file only overrides what it names.
//! - Matching elsewhere is lowercase substring containment; all seed entries
//!   are therefore stored lowercase.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LEXICON_CONFIG_PATH: &str = "config/lexicon.toml";
pub const ENV_LEXICON_CONFIG_PATH: &str = "LEXICON_CONFIG_PATH";

/// Word sets consumed by the sentiment classifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SentimentLexicon {
    /// High-weight positive indicators.
    pub strong_positive: Vec<String>,
    pub moderate_positive: Vec<String>,
    /// High-weight negative indicators.
    pub strong_negative: Vec<String>,
    pub moderate_negative: Vec<String>,
    /// Business/neutral indicators.
    pub business: Vec<String>,
    /// Unconditional overrides, checked before any scoring.
    pub hiring_phrases: Vec<String>,
    pub complaint_phrases: Vec<String>,
    pub strong_positive_phrases: Vec<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::default_seed()
    }
}

impl SentimentLexicon {
    pub fn default_seed() -> Self {
        Self {
            strong_positive: to_vec(&[
                "proud",
                "excited",
                "amazing",
                "love",
                "fantastic",
                "wonderful",
                "incredible",
                "thrilled",
                "delighted",
                "grateful",
                "blessed",
                "honored",
                "celebrating",
                "achievement",
                "success",
                "growth",
                "milestone",
                "breakthrough",
            ]),
            moderate_positive: to_vec(&[
                "great",
                "excellent",
                "good",
                "best",
                "happy",
                "pleased",
                "satisfied",
                "impressed",
                "recommend",
                "enjoy",
                "appreciate",
                "thankful",
                "welcome",
                "congratulations",
            ]),
            strong_negative: to_vec(&[
                "disappointed",
                "frustrated",
                "angry",
                "terrible",
                "awful",
                "worst",
                "hate",
                "disgusted",
                "upset",
                "annoyed",
                "failed",
                "problem",
                "issue",
                "complaint",
                "unreliable",
                "poor",
                "bad",
                "wrong",
                "mistake",
                "error",
                "broken",
                "unacceptable",
            ]),
            moderate_negative: to_vec(&[
                "concerned",
                "worried",
                "troubled",
                "difficult",
                "challenging",
                "struggle",
                "delay",
                "late",
                "slow",
                "expensive",
                "overpriced",
                "confused",
                "unclear",
            ]),
            business: to_vec(&[
                "hiring",
                "looking",
                "announcement",
                "update",
                "news",
                "information",
                "details",
                "company",
                "team",
                "position",
                "role",
                "job",
                "career",
                "business",
                "startup",
                "funding",
                "investment",
                "partnership",
                "collaboration",
            ]),
            hiring_phrases: to_vec(&["hiring", "looking for", "join our team"]),
            complaint_phrases: to_vec(&["complaint", "unreliable", "poor service"]),
            strong_positive_phrases: to_vec(&["proud", "excited", "thrilled"]),
        }
    }
}

/// Brand-specific term sets for the report generators.
///
/// The positive/negative term lists come in two layers: a core list shared
/// with the insight generator and a wider extension used when selecting
/// posts for categories, leaderboards, and metrics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrandLexicon {
    /// Brand mention required by every report subset (lowercase).
    pub brand: String,
    pub experience_terms: Vec<String>,
    pub positive_terms: Vec<String>,
    /// Service-quality extension of `positive_terms`.
    pub positive_service_terms: Vec<String>,
    pub negative_terms: Vec<String>,
    pub negative_extended_terms: Vec<String>,
    /// Stop words layered on top of the generic list for the positive
    /// keyword leaderboard (verbs, competitors, domain fillers).
    pub keyword_stop_words: Vec<String>,
    /// Fixed vocabulary counted by the negative keyword leaderboard.
    pub negative_vocabulary: Vec<String>,
    /// Deterministic pad entries when fewer than eight negative keywords
    /// are found, indexed by leaderboard slot.
    pub negative_pad_words: Vec<String>,
}

impl Default for BrandLexicon {
    fn default() -> Self {
        Self::default_seed()
    }
}

impl BrandLexicon {
    pub fn default_seed() -> Self {
        Self {
            brand: "shoffr".to_string(),
            experience_terms: to_vec(&[
                "experience",
                "ride",
                "service",
                "customer",
                "tried",
                "used",
                "booked",
                "trip",
                "journey",
            ]),
            positive_terms: to_vec(&[
                "good",
                "great",
                "excellent",
                "love",
                "amazing",
                "proud",
                "satisfied",
                "happy",
                "recommend",
                "fantastic",
                "wonderful",
                "reliable",
            ]),
            positive_service_terms: to_vec(&[
                "clean",
                "comfortable",
                "professional",
                "on time",
                "punctual",
                "smooth",
            ]),
            negative_terms: to_vec(&[
                "bad",
                "poor",
                "terrible",
                "unreliable",
                "disappointed",
                "problem",
                "issue",
                "complaint",
                "failed",
                "unacceptable",
                "frustrated",
            ]),
            negative_extended_terms: to_vec(&[
                "worst",
                "awful",
                "horrible",
                "hate",
                "cancelled",
                "late",
                "dirty",
                "rude",
                "unprofessional",
                "expensive",
            ]),
            keyword_stop_words: to_vec(&[
                // possessives the generic list leaves through
                "my", "your", "his", "her", "its", "our", "their", "from",
                // verbs and fillers common enough to drown real signals
                "just", "like", "get", "got", "go", "went", "come", "came", "see", "saw",
                "know", "knew", "think", "thought", "take", "took", "make", "made", "give",
                "gave", "say", "said", "tell", "told", "ask", "asked", "work", "worked",
                "use", "used", "find", "found", "try", "tried", "call", "called", "look",
                "looked", "want", "wanted", "need", "needed", "feel", "felt", "become",
                "became", "leave", "left", "put", "mean", "meant", "keep", "kept", "let",
                "begin", "began", "seem", "seemed", "help", "helped", "talk", "talked",
                "turn", "turned", "start", "started", "show", "showed", "hear", "heard",
                "play", "played", "run", "ran", "move", "moved", "live", "lived",
                "believe", "believed", "hold", "held", "bring", "brought", "happen",
                "happened", "write", "wrote", "provide", "provided", "sit", "sat",
                "stand", "stood", "lose", "lost", "pay", "paid", "meet", "met",
                "include", "included", "continue", "continued", "set", "learn",
                "learned", "change", "changed", "lead", "led", "understand",
                "understood", "watch", "watched", "follow", "followed", "stop",
                "stopped", "create", "created", "speak", "spoke", "read", "allow",
                "allowed", "add", "added", "spend", "spent", "grow", "grew", "open",
                "opened", "walk", "walked", "win", "won", "offer", "offered",
                "remember", "remembered", "love", "loved", "consider", "considered",
                "appear", "appeared", "buy", "bought", "wait", "waited", "serve",
                "served", "die", "died", "send", "sent", "expect", "expected", "build",
                "built", "stay", "stayed", "fall", "fell", "cut", "reach", "reached",
                "kill", "killed", "remain", "remained", "suggest", "suggested",
                "raise", "raised", "pass", "passed", "sell", "sold", "require",
                "required", "report", "reported", "decide", "decided", "pull",
                "pulled",
                // brand, competitors, geography
                "shoffr", "uber", "ola", "blusmart", "bangalore", "delhi", "india",
                "company", "startup", "business", "team",
                // domain fillers that appear in nearly every post
                "service", "customer", "experience", "ride", "taxi", "cab", "driver",
                "car", "vehicle", "app", "booking", "airport", "time", "day", "week",
                "month", "year", "today", "yesterday", "tomorrow", "morning",
                "evening", "night",
            ]),
            negative_vocabulary: to_vec(&[
                "bad", "poor", "terrible", "awful", "horrible", "worst", "hate",
                "disappointed", "frustrated", "unreliable", "failed", "cancelled",
                "late", "dirty", "rude", "unprofessional", "expensive", "overpriced",
                "unacceptable", "problem", "issue", "complaint", "broken", "slow",
                "unresponsive", "annoying", "frustrating", "disappointing",
                "unpleasant", "unsatisfactory", "inadequate", "incompetent",
                "careless", "negligent", "unhelpful", "unfriendly", "aggressive",
                "hostile", "disgusting", "filthy", "smelly", "uncomfortable",
                "unsafe", "dangerous", "risky", "scary", "nightmare", "disaster",
                "chaos", "mess", "confusion", "delayed", "postponed", "missed",
                "ignored", "rejected", "denied", "refused", "blocked", "restricted",
                "limited", "incomplete", "defective", "faulty", "malfunctioning",
                "glitchy", "buggy", "crashed", "frozen", "stuck", "overcharged",
                "billed", "charged", "cost", "price", "rip-off", "scam", "fraud",
                "deception", "misleading", "false", "fake", "phony", "bogus",
            ]),
            negative_pad_words: to_vec(&[
                "Bad",
                "Poor",
                "Terrible",
                "Awful",
                "Horrible",
                "Worst",
                "Hate",
                "Disappointed",
            ]),
        }
    }

    /// Core + service-quality extension, the selector used by categories,
    /// leaderboards, and metrics.
    pub fn positive_terms_extended(&self) -> Vec<String> {
        let mut v = self.positive_terms.clone();
        v.extend(self.positive_service_terms.iter().cloned());
        v
    }

    /// Core + extension, the selector used by all negative reports.
    pub fn negative_terms_extended(&self) -> Vec<String> {
        let mut v = self.negative_terms.clone();
        v.extend(self.negative_extended_terms.iter().cloned());
        v
    }
}

/// Everything loaded from `config/lexicon.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Lexicons {
    pub sentiment: SentimentLexicon,
    pub brand: BrandLexicon,
}

impl Lexicons {
    /// Parse from a TOML string. Missing sections keep their seeds.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file.
    /// Falls back to `default_seed()` values on a missing or invalid file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(s) => Self::from_toml_str(&s).unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = %path.as_ref().display(), "invalid lexicon config, using seed");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Resolve via env var, then the default path, then seeds.
    pub fn load_default() -> Self {
        let path = std::env::var(ENV_LEXICON_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEXICON_CONFIG_PATH));
        Self::load_from_file(path)
    }
}

fn to_vec(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
