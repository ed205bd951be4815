//! Export layer: writes the normalized dataset as CSV.
//!
//! The header row is always [`DatasetRow::HEADER`]; data rows follow in the
//! order given (ascending date, as produced by the normalizer). Real values
//! are written in shortest round-trip form, so `2.0` stays `2.0`.

use crate::error::{Error, Result};
use crate::types::DatasetRow;
use std::io::Write;
use std::path::Path;

/// Serialise `rows` as CSV into any writer.
pub fn write_rows<W: Write>(writer: W, rows: &[DatasetRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(DatasetRow::HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the dataset file at `path`, replacing any previous run's output.
///
/// Returns the number of data rows written.
pub fn write_dataset(path: &Path, rows: &[DatasetRow]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = std::fs::File::create(path).map_err(|e| Error::io(path, e))?;
    write_rows(std::io::BufWriter::new(file), rows)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "dataset written");
    Ok(rows.len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
