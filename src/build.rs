//! Pipeline orchestration: generate, probe, scan, compile, aggregate,
//! archive, link. Strictly sequential; the first failure aborts the build
//! with the offending command or path in the error.

use serde::Serialize;

use crate::compile;
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::flags;
use crate::grammar;
use crate::headers;
use crate::layout::ProjectLayout;
use crate::link;
use crate::platform::Platform;
use crate::scan;

/// What a build did, for the closing report and `--json` output.
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub platform: String,
    pub objects_compiled: usize,
    pub objects_reused: usize,
    pub headers_aggregated: usize,
    pub artifacts: Vec<String>,
}

/// Run the whole pipeline against one project tree.
pub fn run(
    runner: &mut dyn CommandRunner,
    layout: &ProjectLayout,
    platform: Platform,
) -> Result<BuildSummary> {
    println!("=== Building NASL interpreter library ({platform}) ===\n");

    println!("=== Generating parser ===");
    grammar::generate(runner, layout)?;

    println!("\n=== Probing toolchain flags ===");
    let flags = flags::probe(runner)?;

    println!("\n=== Compiling library sources ===");
    let scanned = scan::scan(layout)?;
    let compiled = compile::compile(runner, layout, &flags, &scanned)?;
    headers::write_umbrella(layout, &scanned)?;

    println!("\n=== Linking ===");
    link::archive(runner, layout, &compiled.objects)?;
    link::link_executable(runner, layout, platform, &flags, &compiled.objects)?;
    link::link_shared_library(runner, layout, platform, &flags, &compiled.objects)?;

    Ok(BuildSummary {
        platform: platform.to_string(),
        objects_compiled: compiled.compiled,
        objects_reused: compiled.reused,
        headers_aggregated: scanned.headers.len(),
        artifacts: vec![
            layout.static_archive().display().to_string(),
            layout.umbrella_header().display().to_string(),
            layout.cli_executable().display().to_string(),
            layout.shared_library(platform).display().to_string(),
        ],
    })
}
