//! Archiving and linking. The archive step is the same everywhere; the
//! executable and shared-library links differ by platform: darwin consumes
//! the static archive, linux feeds the linker the raw object list.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::Result;
use crate::exec::{CommandLine, CommandRunner};
use crate::flags::FlagSet;
use crate::layout::{define_args, ProjectLayout, CLI_EXECUTABLE, INTERPRETER_MAIN, STATIC_ARCHIVE};
use crate::platform::Platform;

/// Archive every object into the static library. `r` replaces members, `c`
/// creates the archive, `s` writes the symbol index, `v` reports members.
pub fn archive(
    runner: &mut dyn CommandRunner,
    layout: &ProjectLayout,
    objects: &BTreeSet<PathBuf>,
) -> Result<()> {
    let cmd = CommandLine::new("ar")
        .arg("-rcsv")
        .arg(STATIC_ARCHIVE)
        .args(objects.iter().map(|object| object.display().to_string()))
        .current_dir(layout.root());
    println!("{cmd}");
    runner.run(&cmd)?;
    Ok(())
}

/// Link the interpreter CLI.
pub fn link_executable(
    runner: &mut dyn CommandRunner,
    layout: &ProjectLayout,
    platform: Platform,
    flags: &FlagSet,
    objects: &BTreeSet<PathBuf>,
) -> Result<()> {
    let cmd = link_command(layout, platform, flags, objects, false, CLI_EXECUTABLE);
    println!("{cmd}");
    runner.run(&cmd)?;
    Ok(())
}

/// Link the shared library embedding consumers load.
pub fn link_shared_library(
    runner: &mut dyn CommandRunner,
    layout: &ProjectLayout,
    platform: Platform,
    flags: &FlagSet,
    objects: &BTreeSet<PathBuf>,
) -> Result<()> {
    let cmd = link_command(
        layout,
        platform,
        flags,
        objects,
        true,
        platform.shared_library_name(),
    );
    println!("{cmd}");
    runner.run(&cmd)?;
    Ok(())
}

fn link_command(
    layout: &ProjectLayout,
    platform: Platform,
    flags: &FlagSet,
    objects: &BTreeSet<PathBuf>,
    shared: bool,
    output: &str,
) -> CommandLine {
    let mut cmd = CommandLine::new("clang");
    if shared {
        cmd = cmd.arg("-shared");
    }
    cmd = cmd
        .arg("-fPIC")
        .args(flags.cflags.iter().cloned())
        .args(flags.ldflags.iter().cloned())
        .args(define_args());
    cmd = match platform {
        Platform::Darwin => cmd.arg(STATIC_ARCHIVE),
        Platform::Linux => cmd.args(objects.iter().map(|object| object.display().to_string())),
    };
    cmd.arg(INTERPRETER_MAIN)
        .arg("-o")
        .arg(output)
        .current_dir(layout.root())
}
