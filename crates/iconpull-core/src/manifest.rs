//! Per-run manifest of concept outcomes.
//!
//! Records are buffered in memory and written once at the end of the run,
//! replacing any previous manifest at that path.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "iconscout-manifest.md";
pub const MANIFEST_HEADER: &str = "# Iconscout Pulled Icons";

pub const NOT_FOUND_MARKER: &str = "NOT_FOUND";
pub const DOWNLOAD_ERROR_MARKER: &str = "DOWNLOAD_ERROR";

/// Final state of one concept in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Selected and written to `path`.
    Downloaded { url: String, path: PathBuf },
    /// Selected; download skipped (dry run).
    Selected { url: String },
    /// No candidate scored above zero.
    NotFound,
    /// Download answered with a non-2xx status.
    HttpFailure { status: u32, url: String },
    /// Download failed for any other reason.
    DownloadFailure { url: String },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Downloaded { .. } | Outcome::Selected { .. })
    }
}

/// Manifest payload: the URL, `NOT_FOUND`, `HTTP_<status> <url>` or `DOWNLOAD_ERROR <url>`.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Downloaded { url, .. } | Outcome::Selected { url } => f.write_str(url),
            Outcome::NotFound => f.write_str(NOT_FOUND_MARKER),
            Outcome::HttpFailure { status, url } => write!(f, "HTTP_{} {}", status, url),
            Outcome::DownloadFailure { url } => write!(f, "{} {}", DOWNLOAD_ERROR_MARKER, url),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Manifest {
    lines: Vec<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `- <concept_id>: <payload>`.
    pub fn record(&mut self, concept_id: &str, outcome: &Outcome) {
        self.lines.push(format!("- {}: {}", concept_id, outcome));
    }

    /// Header, blank line, then one record per line, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(64 + self.lines.iter().map(|l| l.len() + 1).sum::<usize>());
        out.push_str(MANIFEST_HEADER);
        out.push_str("\n\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Writes the whole manifest to `path`, overwriting any existing file.
    pub fn flush(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("failed to write manifest {}", path.display()))?;
        tracing::info!(path = %path.display(), records = self.lines.len(), "manifest written");
        Ok(())
    }
}
