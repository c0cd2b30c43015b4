//! Pipeline configuration: where to read the raw export and where to write
//! the three artifacts.
//!
//! Resolution order, same as the other config loaders in this crate:
//! env vars → `config/pipeline.toml` → compiled defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::trends::TrendScaling;

pub const DEFAULT_PIPELINE_CONFIG_PATH: &str = "config/pipeline.toml";
pub const DEFAULT_INPUT_PATH: &str = "data/linkedin_posts.json";
pub const DEFAULT_OUTPUT_DIR: &str = "data";

pub const ENV_PIPELINE_CONFIG_PATH: &str = "PIPELINE_CONFIG_PATH";
pub const ENV_INPUT_PATH: &str = "PIPELINE_INPUT_PATH";
pub const ENV_OUTPUT_DIR: &str = "PIPELINE_OUTPUT_DIR";

/// Artifact file names are fixed; the display layer resolves them by name.
pub const POSTS_ARTIFACT: &str = "linkedinData.json";
pub const ANALYTICS_ARTIFACT: &str = "linkedinAnalytics.json";
pub const DASHBOARD_ARTIFACT: &str = "dashboardData.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// JSON array of raw sheet rows.
    pub input_path: PathBuf,
    /// Directory receiving the three regenerated artifacts.
    pub output_dir: PathBuf,
    /// Trend proxy coefficients; presentation tuning only.
    pub trends: TrendScaling,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            trends: TrendScaling::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PipelineRoot {
    #[serde(default)]
    pipeline: Option<PipelineConfig>,
}

impl PipelineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let root: PipelineRoot = toml::from_str(s)?;
        Ok(root.pipeline.unwrap_or_default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading pipeline config from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load using env vars + fallbacks:
    /// 1) $PIPELINE_CONFIG_PATH (must exist when set)
    /// 2) config/pipeline.toml
    /// 3) compiled defaults
    /// `PIPELINE_INPUT_PATH` / `PIPELINE_OUTPUT_DIR` override either source.
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_PIPELINE_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            Self::load_from(&pb)?
        } else {
            let default = PathBuf::from(DEFAULT_PIPELINE_CONFIG_PATH);
            if default.exists() {
                Self::load_from(&default)?
            } else {
                Self::default()
            }
        };

        if let Ok(input) = std::env::var(ENV_INPUT_PATH) {
            cfg.input_path = PathBuf::from(input);
        }
        if let Ok(dir) = std::env::var(ENV_OUTPUT_DIR) {
            cfg.output_dir = PathBuf::from(dir);
        }
        Ok(cfg)
    }

    pub fn posts_path(&self) -> PathBuf {
        self.output_dir.join(POSTS_ARTIFACT)
    }

    pub fn analytics_path(&self) -> PathBuf {
        self.output_dir.join(ANALYTICS_ARTIFACT)
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.output_dir.join(DASHBOARD_ARTIFACT)
    }
}
