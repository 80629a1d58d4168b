//! Incremental compilation. An object file that exists is reused as-is;
//! objects are never considered stale, only absent. `clean` (or deleting
//! the object) is how a rebuild is forced.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::exec::{CommandLine, CommandRunner};
use crate::flags::FlagSet;
use crate::layout::{define_args, ProjectLayout, ENTRY_POINT_SOURCES};
use crate::scan::ScanOutcome;

/// What the compile pass produced: the full object set for the archiver,
/// plus how much work was actually done.
#[derive(Debug, Default)]
pub struct CompileOutcome {
    /// Root-relative object paths, compiled now or reused.
    pub objects: BTreeSet<PathBuf>,
    pub compiled: usize,
    pub reused: usize,
}

/// Compile every non-entry-point source whose object file is absent.
pub fn compile(
    runner: &mut dyn CommandRunner,
    layout: &ProjectLayout,
    flags: &FlagSet,
    scan: &ScanOutcome,
) -> Result<CompileOutcome> {
    let mut outcome = CompileOutcome::default();
    for source in &scan.sources {
        if is_entry_point(source) {
            continue;
        }
        let object = source.with_extension("o");
        if layout.root().join(&object).exists() {
            debug!(object = %object.display(), "object present, skipping");
            outcome.reused += 1;
        } else {
            let cmd = CommandLine::new("clang")
                .arg("-fPIC")
                .args(flags.cflags.iter().cloned())
                .args(define_args())
                .arg("-c")
                .arg(source.display().to_string())
                .arg("-o")
                .arg(object.display().to_string())
                .current_dir(layout.root());
            println!("{cmd}");
            runner.run(&cmd)?;
            outcome.compiled += 1;
        }
        outcome.objects.insert(object);
    }
    Ok(outcome)
}

/// Entry-point sources define their own `main` and stay out of the library,
/// whichever directory they sit in.
fn is_entry_point(source: &Path) -> bool {
    source
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| ENTRY_POINT_SOURCES.contains(&name))
}
