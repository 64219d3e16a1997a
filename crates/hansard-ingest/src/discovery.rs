//! Source file discovery.
//!
//! Lists the transcript files directly inside an input directory. Discovery is not
//! recursive, skips hidden entries, and returns paths sorted by file name so that
//! every run processes files in the same order.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use tracing::debug;
use walkdir::WalkDir;

use crate::IngestError;

/// File extension of transcript sources.
const XML_EXTENSION: &str = "xml";

/// Discovers `*.xml` files directly inside `dir`, sorted by file name.
///
/// Only regular files (or symlinks to regular files) are returned. Subdirectories,
/// hidden files, and files with any other extension are ignored. Entries that cannot
/// be inspected are skipped; failing to list `dir` itself is an error.
pub fn discover_xml_files(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(0)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(source) if source.depth() == 0 => {
                return Err(IngestError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.depth() == 0 || !entry.file_type().is_file() {
            continue;
        }

        if is_hidden(entry.file_name()) || !is_xml(entry.path()) {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Checks for the `.xml` extension, matching case as a `*.xml` glob would.
fn is_xml(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(XML_EXTENSION))
}
