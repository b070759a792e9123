//! CLI for iconpull.

use anyhow::{Context, Result};
use clap::Parser;
use iconpull_core::config::{self, PullConfig};
use iconpull_core::manifest::Outcome;
use iconpull_core::pipeline::{ConceptReport, Pipeline, RunSummary};
use std::path::PathBuf;

/// Number of runner-up candidates printed under each pick.
const ALT_PREVIEW: usize = 3;

/// Pull the best-matching 3D icon for each hardware concept from the catalog.
#[derive(Debug, Parser)]
#[command(name = "iconpull")]
#[command(about = "Resolve and download the best catalog icon per hardware concept", long_about = None)]
pub struct Cli {
    /// Directory receiving `<concept>.png` files and the manifest.
    #[arg(long, default_value = "src/assets/icons3d", value_name = "PATH")]
    pub output_dir: PathBuf,

    /// Resolve and record selections without downloading anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Config file to use instead of `~/.config/iconpull/config.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parses arguments, runs the pipeline and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        Cli::parse().run()
    }

    pub fn run(&self) -> Result<i32> {
        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg.source);
        let concepts = cfg.concept_table().context("invalid configuration")?;

        let pipeline = Pipeline::new(
            concepts,
            cfg.source.mirror_fetcher(),
            cfg.source.cdn_downloader(),
            &self.output_dir,
        )
        .dry_run(self.dry_run);

        let summary = pipeline.run_with(print_report)?;
        print_summary(&summary);
        Ok(summary.exit_code())
    }

    fn load_config(&self) -> Result<PullConfig> {
        match &self.config {
            Some(path) => config::load_from_path(path),
            None => config::load_or_init(),
        }
    }
}

fn print_report(report: &ConceptReport) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}

/// Console lines for one concept. Alternatives are listed only for usable picks.
fn report_lines(report: &ConceptReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.outcome == Outcome::NotFound {
        lines.push(format!("[miss] {}", report.id));
        return lines;
    }
    if let Some(url) = report.selection.url() {
        lines.push(format!("[pick] {} -> {}", report.id, url));
    }
    match &report.outcome {
        Outcome::HttpFailure { status, .. } => lines.push(format!("  [fail] HTTP {}", status)),
        Outcome::DownloadFailure { .. } => lines.push("  [fail] download error".to_string()),
        _ => {
            for alt in report.selection.preview.iter().take(ALT_PREVIEW) {
                lines.push(format!("  [alt {:>2}] {}", alt.score, alt.url));
            }
        }
    }
    lines
}

fn print_summary(summary: &RunSummary) {
    println!("Manifest: {}", summary.manifest_path.display());
    if !summary.failed.is_empty() {
        println!("[warn] Missing/failed: {}", summary.failed.join(", "));
    }
}
