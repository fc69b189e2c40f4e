use std::fs;
use std::path::Path;

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use serde::Serialize;

use crate::error::PipelineError;
use crate::model::entry::{self, EntryRecord, ReviewRecord, RAW_COLUMNS};

fn open(path: &Path) -> Result<Writer<fs::File>, PipelineError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| PipelineError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    // Headers are written by hand so an empty run still gets one.
    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|source| PipelineError::Write {
            path: path.to_path_buf(),
            source,
        })
}

fn write_rows<'h, H, R>(path: &Path, header: H, rows: R) -> Result<(), PipelineError>
where
    H: IntoIterator<Item = &'h str>,
    R: IntoIterator,
    R::Item: Serialize,
{
    let write_err = |source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut w = open(path)?;
    w.write_record(header).map_err(write_err)?;
    for row in rows {
        w.serialize(row).map_err(write_err)?;
    }
    w.flush().map_err(|source| PipelineError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "wrote sheet");
    Ok(())
}

/// The bare extraction sheet.
pub fn write_raw(path: &Path, records: &[EntryRecord]) -> Result<(), PipelineError> {
    write_rows(path, RAW_COLUMNS, records)
}

/// Extraction sheet plus empty suggestion and decision columns for reviewers.
pub fn write_review(path: &Path, records: &[EntryRecord]) -> Result<(), PipelineError> {
    write_rows(
        path,
        entry::review_columns(),
        records.iter().map(ReviewRecord::from),
    )
}
