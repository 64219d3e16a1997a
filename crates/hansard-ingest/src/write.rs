//! CSV persistence for document records.

use std::{fs, path::Path};

use csv::WriterBuilder;

use crate::{DocumentRecord, IngestError, RECORD_COLUMNS};

/// Writes `records` to `path` as UTF-8 CSV with a header row.
///
/// Columns follow [`RECORD_COLUMNS`]; absent values are empty fields. The header is
/// written even when there are no records. Missing parent directories are created.
pub fn write_records_csv(records: &[DocumentRecord], path: &Path) -> Result<(), IngestError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| IngestError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source: csv::Error| IngestError::WriteCsv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(write_err)?;
    writer.write_record(RECORD_COLUMNS).map_err(write_err)?;
    for record in records {
        writer.serialize(record).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;

    Ok(())
}
