//! Parser generation. The interpreter's parser is bison output; the three
//! generated files live next to the grammar and are regenerated only when
//! one of them is missing.

use tracing::debug;

use crate::error::{BuildError, Result};
use crate::exec::{CommandLine, CommandRunner};
use crate::layout::{ProjectLayout, GRAMMAR_DIR, GRAMMAR_FILE};

/// `-d` emits the token header, `-v` the state report, `-t` compiles in the
/// debug facilities, `-p nasl` prefixes the generated symbols.
const BISON_ARGS: [&str; 5] = ["-d", "-v", "-t", "-p", "nasl"];

/// Generate the parser sources unless all three artifacts already exist.
/// A partial triple is never trusted: one missing file regenerates all
/// three. Existence is the only freshness signal.
pub fn generate(runner: &mut dyn CommandRunner, layout: &ProjectLayout) -> Result<()> {
    let grammar = layout.grammar_file();
    if !grammar.is_file() {
        return Err(BuildError::MissingInput(grammar));
    }

    if layout.grammar_artifacts().iter().all(|path| path.exists()) {
        debug!("grammar artifacts present, skipping bison");
    } else {
        let cmd = CommandLine::new("bison")
            .args(BISON_ARGS)
            .arg(format!("./{GRAMMAR_FILE}"))
            .current_dir(layout.source_dir(GRAMMAR_DIR));
        println!("{cmd}");
        runner.run(&cmd)?;
    }

    // sanity invariant, checked whether or not bison ran: the compile step
    // needs all three files, and bison can succeed without writing them all
    for path in layout.grammar_artifacts() {
        if !path.exists() {
            return Err(BuildError::ArtifactMissing(path));
        }
    }
    Ok(())
}
