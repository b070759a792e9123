use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::concept::{default_concepts, Concept, ConceptError, ConceptTable};
use crate::transfer::{CdnDownloader, HeaderProfile, MirrorFetcher};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("mirror_base {0:?} is not an absolute http(s) URL")]
    InvalidMirrorBase(String),
    #[error("search_path must not be empty")]
    EmptySearchPath,
    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
    #[error(transparent)]
    Concepts(#[from] ConceptError),
}

/// Where candidates come from and how requests are made (`[source]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Text-mirroring proxy that renders catalog pages as plain text.
    pub mirror_base: String,
    /// Catalog search location appended to the mirror base; the query follows it.
    pub search_path: String,
    /// Per-request timeout in seconds, for both page fetches and downloads.
    pub timeout_secs: u64,
    /// Headers sent to the mirror.
    pub mirror_headers: HeaderProfile,
    /// Headers sent to the asset CDN. Many CDNs check `Referer`/`Origin`.
    pub cdn_headers: HeaderProfile,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let profile = |pairs: &[(&str, &str)]| -> HeaderProfile {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };
        Self {
            mirror_base: "https://r.jina.ai".to_string(),
            search_path: "http://iconscout.com/3d-icons".to_string(),
            timeout_secs: 60,
            mirror_headers: profile(&[
                ("User-Agent", USER_AGENT),
                ("Accept", "text/plain,text/html;q=0.9,*/*;q=0.8"),
            ]),
            cdn_headers: profile(&[
                ("User-Agent", USER_AGENT),
                ("Referer", "https://iconscout.com/"),
                ("Origin", "https://iconscout.com"),
            ]),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = url::Url::parse(&self.mirror_base)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
            .unwrap_or(false);
        if !ok {
            return Err(ConfigError::InvalidMirrorBase(self.mirror_base.clone()));
        }
        if self.search_path.trim_matches('/').is_empty() {
            return Err(ConfigError::EmptySearchPath);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn mirror_fetcher(&self) -> MirrorFetcher {
        MirrorFetcher {
            mirror_base: self.mirror_base.clone(),
            search_path: self.search_path.clone(),
            headers: self.mirror_headers.clone(),
            timeout: self.timeout(),
        }
    }

    pub fn cdn_downloader(&self) -> CdnDownloader {
        CdnDownloader {
            headers: self.cdn_headers.clone(),
            timeout: self.timeout(),
        }
    }
}

/// Global configuration loaded from `~/.config/iconpull/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullConfig {
    #[serde(default)]
    pub source: SourceConfig,
    /// Concepts to resolve, in processing order. Missing = built-in table.
    #[serde(default = "default_concepts")]
    pub concepts: Vec<Concept>,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            concepts: default_concepts(),
        }
    }
}

impl PullConfig {
    /// Validates the source settings and builds the concept table.
    pub fn concept_table(&self) -> Result<ConceptTable, ConfigError> {
        self.source.validate()?;
        Ok(ConceptTable::new(self.concepts.clone())?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("iconpull")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PullConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PullConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file (e.g. `--config`).
pub fn load_from_path(path: &Path) -> Result<PullConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: PullConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(cfg)
}
