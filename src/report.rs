//! Whole-file pipeline: read, fold, write detail, check, summarize.

use crate::Result;
use crate::check;
use crate::model;
use crate::render;
use crate::stats::FpsSummary;

use anyhow::{Context, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DETAIL_SUFFIX: &str = "_output.csv";
pub const SUMMARY_SUFFIX: &str = "_summary.csv";

/// Where the two tables of one run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub detail: PathBuf,
    pub summary: PathBuf,
}

/// Derive output paths from the input file's base name (extension stripped).
///
/// Example: `logs/run1.txt` with out_dir `.` => `./run1_output.csv`, `./run1_summary.csv`
pub fn output_paths(input: &Path, out_dir: &Path) -> Result<OutputPaths> {
    let stem = input
        .file_stem()
        .ok_or_else(|| anyhow!("input path has no file name: {}", input.display()))?
        .to_string_lossy();

    Ok(OutputPaths {
        detail: out_dir.join(format!("{}{}", stem, DETAIL_SUFFIX)),
        summary: out_dir.join(format!("{}{}", stem, SUMMARY_SUFFIX)),
    })
}

/// Outcome of one run: where the tables went and what the checks found.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub paths: OutputPaths,
    pub missing: Vec<i64>,
    pub overlapping: Vec<i64>,
    pub summary: FpsSummary,
}

/// Convert one metal-HUD log into its detail and summary CSV files.
pub fn process_file(input: &Path, out_dir: &Path) -> Result<RunReport> {
    let paths = output_paths(input, out_dir)?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("read input file {}", input.display()))?;

    let acc = model::accumulate(&text, &input.display().to_string())?;
    info!(
        lines = acc.lines,
        rows = acc.rows.len(),
        "parsed {}",
        input.display()
    );

    render::write_detail_csv(&paths.detail, &acc.rows)?;

    let missing = check::missing_frames(&acc.frames);
    if !missing.is_empty() {
        warn!("Missing frames: {}", check::preview(&missing));
    }
    let overlapping = check::overlapping_frames(&acc.frames);
    if !overlapping.is_empty() {
        warn!("Overlapping frames: {}", check::preview(&overlapping));
    }

    let summary = FpsSummary::from_values(&acc.fps)
        .with_context(|| format!("summarize {}", input.display()))?;
    render::write_summary_csv(&paths.summary, &summary)?;

    println!(
        "Summary file '{}' created successfully.",
        paths.summary.display()
    );
    println!("CSV file '{}' created successfully.", paths.detail.display());

    Ok(RunReport {
        paths,
        missing,
        overlapping,
        summary,
    })
}
