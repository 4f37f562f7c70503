//! CSV persistence for ingested records.
//!
//! Records are written with a header row derived from the record struct's
//! serde field names, one row per record, standard quoting for embedded
//! commas and newlines. The destination's parent directory chain is created
//! as needed, and an existing file at the destination is overwritten — last
//! write wins, callers own any versioning discipline.
//!
//! An empty record sequence produces an empty file: the header row comes
//! from the first record serialized, so with no records none is known.

use crate::error::Result;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;
use tracing::{info, instrument};

/// Write `records` as CSV to `path`, creating missing parent directories.
///
/// # Errors
///
/// Fails with the underlying IO error if the directory chain cannot be
/// created or the file cannot be written, and with a CSV error if a record
/// fails to serialize. The file handle is flushed and closed on every exit
/// path.
#[instrument(level = "info", skip_all)]
pub fn write_records<T, P>(records: &[T], path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(rows = records.len(), path = %path.display(), "Wrote CSV file");
    Ok(())
}
