//! Batch Pipeline — Binary Entrypoint
//! Reads the raw post export, classifies and aggregates it, and writes the
//! three dashboard artifacts. One shot per invocation; a failed run is
//! simply re-invoked by the caller.

use anyhow::Result;
use chrono::Utc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linkedin_pulse_analyzer::config::PipelineConfig;
use linkedin_pulse_analyzer::lexicon::Lexicons;
use linkedin_pulse_analyzer::pipeline;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op in prod environments. This enables
    // PIPELINE_INPUT_PATH / LEXICON_CONFIG_PATH etc. from .env.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = PipelineConfig::load_default()?;
    let lexicons = Lexicons::load_default();

    let artifacts = pipeline::run(&cfg, &lexicons, Utc::now())?;

    let a = &artifacts.analytics;
    tracing::info!(
        total_posts = a.total_posts,
        total_engagement = a.total_engagement,
        total_likes = a.total_likes,
        total_comments = a.total_comments,
        total_shares = a.total_shares,
        avg_engagement = a.avg_engagement.round(),
        high_engagement_posts = a.high_engagement_posts,
        low_engagement_posts = a.low_engagement_posts,
        sentiment_counts = ?a.sentiment_counts,
        "pipeline run complete"
    );

    Ok(())
}
