//! Run orchestration: resolve, download and record every concept in order.
//!
//! Each concept goes through gather → select → download → record before the
//! next one starts. A concept's failure is recorded and the loop continues;
//! only setup problems (output directory, manifest write) end a run early.

mod output_dir;

pub use output_dir::prepare_output_dir;

use anyhow::Result;
use std::path::PathBuf;

use crate::concept::{Concept, ConceptTable};
use crate::gather::gather_candidates;
use crate::manifest::{Manifest, Outcome, MANIFEST_FILE_NAME};
use crate::select::{select_best, Selection};
use crate::transfer::{AssetDownloader, PageSource};

/// Result of processing one concept.
#[derive(Debug, Clone)]
pub struct ConceptReport {
    pub id: String,
    pub selection: Selection,
    pub outcome: Outcome,
}

/// Everything a run produced, in concept-table order.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub reports: Vec<ConceptReport>,
    /// Ids of concepts that ended unresolved or failed to download.
    pub failed: Vec<String>,
    pub manifest_path: PathBuf,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Process exit status: 0 when every concept succeeded, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

pub struct Pipeline<S, D> {
    concepts: ConceptTable,
    source: S,
    downloader: D,
    output_dir: PathBuf,
    dry_run: bool,
}

impl<S: PageSource, D: AssetDownloader> Pipeline<S, D> {
    pub fn new(concepts: ConceptTable, source: S, downloader: D, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            concepts,
            source,
            downloader,
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    /// Skip downloads; selections are still recorded as if they succeeded.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self) -> Result<RunSummary> {
        self.run_with(|_| {})
    }

    /// Runs every concept, calling `on_report` as each one is recorded.
    pub fn run_with<F>(&self, mut on_report: F) -> Result<RunSummary>
    where
        F: FnMut(&ConceptReport),
    {
        prepare_output_dir(&self.output_dir)?;

        let mut manifest = Manifest::new();
        let mut reports = Vec::with_capacity(self.concepts.len());
        let mut failed = Vec::new();

        for concept in &self.concepts {
            let report = self.process(concept);
            manifest.record(&report.id, &report.outcome);
            if report.outcome.is_failure() {
                failed.push(report.id.clone());
            }
            on_report(&report);
            reports.push(report);
        }

        let manifest_path = self.output_dir.join(MANIFEST_FILE_NAME);
        manifest.flush(&manifest_path)?;

        if failed.is_empty() {
            tracing::info!(concepts = reports.len(), "run completed");
        } else {
            tracing::warn!(failed = %failed.join(", "), "run completed with failures");
        }

        Ok(RunSummary {
            reports,
            failed,
            manifest_path,
        })
    }

    fn process(&self, concept: &Concept) -> ConceptReport {
        if concept.kind().is_none() {
            tracing::debug!(concept = %concept.id, "custom concept has no renderer counterpart");
        }

        let pool = gather_candidates(concept, &self.source);
        let selection = select_best(&pool, &concept.include, &concept.exclude);
        tracing::debug!(
            concept = %concept.id,
            pool = pool.len(),
            top = ?selection.preview.first(),
            "candidates ranked"
        );

        let outcome = match selection.chosen.as_ref() {
            None => {
                tracing::warn!(concept = %concept.id, "no candidate scored above zero");
                Outcome::NotFound
            }
            Some(top) if self.dry_run => {
                tracing::info!(concept = %concept.id, url = %top.url, score = top.score, "selected (dry run)");
                Outcome::Selected {
                    url: top.url.clone(),
                }
            }
            Some(top) => self.download(concept, &top.url),
        };

        ConceptReport {
            id: concept.id.clone(),
            selection,
            outcome,
        }
    }

    fn download(&self, concept: &Concept, url: &str) -> Outcome {
        let path = self.output_dir.join(concept.file_name());
        match self.downloader.download(url, &path) {
            Ok(()) => Outcome::Downloaded {
                url: url.to_string(),
                path,
            },
            Err(e) => {
                tracing::warn!(concept = %concept.id, url, "download failed: {}", e);
                match e.http_status() {
                    Some(status) => Outcome::HttpFailure {
                        status,
                        url: url.to_string(),
                    },
                    None => Outcome::DownloadFailure {
                        url: url.to_string(),
                    },
                }
            }
        }
    }
}
