//! Source tree enumeration. One single-level pass over the four library
//! directories; nothing is compiled here.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{BuildError, Result};
use crate::layout::{ProjectLayout, SOURCE_DIRS};

/// Everything the scan found, threaded explicitly to the compile and header
/// steps.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Root-relative `.c` paths, deduplicated.
    pub sources: BTreeSet<PathBuf>,
    /// Root-relative `.h` paths in directory-listing order.
    pub headers: Vec<PathBuf>,
}

/// Enumerate sources and headers. Subdirectories are not descended into; a
/// missing library directory means the checkout is incomplete and is an
/// error.
pub fn scan(layout: &ProjectLayout) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();
    for dir in SOURCE_DIRS {
        let dir_path = layout.source_dir(dir);
        let entries = std::fs::read_dir(&dir_path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                BuildError::MissingInput(dir_path.clone())
            } else {
                BuildError::ReadDir {
                    path: dir_path.clone(),
                    source,
                }
            }
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| BuildError::ReadDir {
                path: dir_path.clone(),
                source,
            })?;
            let file_name = entry.file_name();
            let name = match file_name.to_str() {
                Some(name) => name,
                None => continue,
            };
            if name.ends_with(".c") {
                outcome.sources.insert(PathBuf::from(dir).join(name));
            } else if name.ends_with(".h") {
                outcome.headers.push(PathBuf::from(dir).join(name));
            }
        }
    }
    debug!(
        sources = outcome.sources.len(),
        headers = outcome.headers.len(),
        "source tree scanned"
    );
    Ok(outcome)
}
