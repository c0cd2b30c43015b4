//! # Batch pipeline
//!
//! Read input → transform → write output, single-threaded and synchronous.
//! Every transformation stage is a pure function, so re-running on
//! identical input with an identical reference instant yields byte-identical
//! artifacts. Each run fully regenerates all three output documents;
//! artifacts are written via temp-file + rename so a failed run never
//! leaves a partial file behind.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::analytics::{compute_analytics, AggregateAnalytics};
use crate::config::PipelineConfig;
use crate::dashboard::{assemble, DashboardData, ReportOutputs};
use crate::ingest::{self, fields::RawRecord};
use crate::lexicon::Lexicons;
use crate::post::Post;
use crate::reports::{insights, negative, positive};
use crate::sentiment::SentimentClassifier;

/// Artifact wrapper for the normalized post list.
#[derive(Debug, Clone, Serialize)]
pub struct PostsDocument {
    pub posts: Vec<Post>,
}

/// Everything a run produces, before or after it is written to disk.
#[derive(Debug, Clone)]
pub struct PipelineArtifacts {
    pub posts: PostsDocument,
    pub analytics: AggregateAnalytics,
    pub dashboard: DashboardData,
}

/// Transform raw rows into all three artifacts. Pure apart from tracing.
pub fn generate(
    rows: &[RawRecord],
    cfg: &PipelineConfig,
    lexicons: &Lexicons,
    run_at: DateTime<Utc>,
) -> PipelineArtifacts {
    let classifier = SentimentClassifier::new(lexicons.sentiment.clone());
    let posts = ingest::ingest_posts(rows, &classifier, run_at);

    if tracing::enabled!(tracing::Level::DEBUG) {
        for p in posts.iter().filter(|p| p.sentiment == crate::post::Sentiment::Negative) {
            // never log raw post text; hashed id only
            tracing::debug!(id = p.id, content_hash = %anon_hash(&p.content), "negative post");
        }
    }

    let analytics = compute_analytics(&posts, &cfg.trends);
    tracing::info!(
        total_posts = analytics.total_posts,
        total_engagement = analytics.total_engagement,
        "analytics computed"
    );

    let brand = &lexicons.brand;
    let reports = ReportOutputs {
        key_insights: insights::generate_key_insights(&posts, analytics.total_posts, brand),
        positive_keywords: positive::generate_positive_keywords(&posts, brand),
        feedback_categories: positive::generate_feedback_categories(&posts, brand),
        positive_metrics: positive::generate_positive_metrics(&posts, brand),
        recent_praises: positive::generate_recent_praises(&analytics.top_posts, run_at),
        negative_keywords: negative::generate_negative_keywords(&posts, brand),
        problem_areas: negative::generate_problem_areas(&posts, brand),
        negative_metrics: negative::generate_negative_metrics(&posts, brand),
        recent_complaints: negative::generate_recent_complaints(&posts, brand, run_at),
    };

    let dashboard = assemble(&analytics, reports);

    PipelineArtifacts {
        posts: PostsDocument { posts },
        analytics,
        dashboard,
    }
}

/// One full batch run: read the export, transform, write the artifacts.
/// I/O failures are fatal and abort before any artifact is replaced.
pub fn run(
    cfg: &PipelineConfig,
    lexicons: &Lexicons,
    run_at: DateTime<Utc>,
) -> Result<PipelineArtifacts> {
    let raw = fs::read_to_string(&cfg.input_path)
        .with_context(|| format!("reading input rows from {}", cfg.input_path.display()))?;
    let rows: Vec<RawRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing input rows from {}", cfg.input_path.display()))?;

    let artifacts = generate(&rows, cfg, lexicons, run_at);

    // Serialize everything before touching the filesystem, so a late
    // failure cannot leave a half-written artifact set.
    let posts_json = to_pretty_json(&artifacts.posts)?;
    let analytics_json = to_pretty_json(&artifacts.analytics)?;
    let dashboard_json = to_pretty_json(&artifacts.dashboard)?;

    fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("creating output dir {}", cfg.output_dir.display()))?;

    write_atomically(&cfg.posts_path(), &posts_json)?;
    write_atomically(&cfg.analytics_path(), &analytics_json)?;
    write_atomically(&cfg.dashboard_path(), &dashboard_json)?;

    tracing::info!(
        posts = %cfg.posts_path().display(),
        analytics = %cfg.analytics_path().display(),
        dashboard = %cfg.dashboard_path().display(),
        "artifacts written"
    );

    Ok(artifacts)
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing artifact")
}

/// Write to `<path>.tmp`, then rename into place.
fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    fs::write(&tmp, content).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("replacing {} with {}", path.display(), tmp.display()))?;
    Ok(())
}

/// Short anonymized id for dev logging: first 6 bytes of SHA-256, hex.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
