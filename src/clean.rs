//! Best-effort artifact removal: objects and precompiled headers in the
//! library directories, link products and the umbrella header at the root.
//! Grammar artifacts stay; regeneration is skipped on their existence and
//! removing them is a deliberate manual act.

use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::layout::{ProjectLayout, SOURCE_DIRS};
use crate::platform::Platform;

/// Remove every generated artifact class. Never fails: missing files are
/// expected, anything else is logged and skipped.
pub fn clean(layout: &ProjectLayout, platform: Platform) {
    for dir in SOURCE_DIRS {
        let dir_path = layout.source_dir(dir);
        let entries = match std::fs::read_dir(&dir_path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("cannot list {}: {err}", dir_path.display());
                continue;
            }
        };
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let name = match file_name.to_str() {
                Some(name) => name,
                None => continue,
            };
            if name.ends_with(".o") || name.ends_with(".gch") {
                remove(&entry.path());
            }
        }
    }

    remove(&layout.cli_executable());
    remove(&layout.umbrella_header());
    remove(&layout.static_archive());
    remove(&layout.shared_library(platform));
}

/// Absent files are normal after a partial build or a repeated clean; any
/// other failure is surfaced in the log without stopping the sweep.
fn remove(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => println!("  removed {}", path.display()),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => warn!("could not remove {}: {err}", path.display()),
    }
}
