use std::path::PathBuf;

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::parsers::djvu_text::{self, ParseStats};
use crate::services::{assemble, encoding, tabular};

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub rows: usize,
    pub had_decode_errors: bool,
    pub stats: ParseStats,
    pub raw_output: PathBuf,
    pub review_output: PathBuf,
}

/// One pass: read the text dump, extract entries, write the raw and review sheets.
pub fn run(cfg: &PipelineConfig) -> Result<RunReport, PipelineError> {
    if !cfg.input.exists() {
        return Err(PipelineError::MissingInput(cfg.input.clone()));
    }

    let decoded = encoding::read_lossy(&cfg.input)?;
    let (parsed, stats) = djvu_text::parse(&decoded.text);

    tracing::info!(
        lines = stats.lines,
        candidates = stats.candidates,
        pattern = stats.pattern_matches,
        fallback = stats.fallback_matches,
        rejected = stats.rejected,
        "parsed text layer"
    );

    let records = assemble::assemble(parsed);

    tabular::write_raw(&cfg.raw_output, &records)?;
    tabular::write_review(&cfg.review_output, &records)?;

    Ok(RunReport {
        rows: records.len(),
        had_decode_errors: decoded.had_errors,
        stats,
        raw_output: cfg.raw_output.clone(),
        review_output: cfg.review_output.clone(),
    })
}
