use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use naslbuild::build::{self, BuildSummary};
use naslbuild::clean;
use naslbuild::exec::SystemRunner;
use naslbuild::layout::ProjectLayout;
use naslbuild::platform::Platform;
use naslbuild::smoke;

/// External tools the pipeline invokes, checked by `doctor`.
const REQUIRED_TOOLS: [&str; 8] = [
    "clang",
    "bison",
    "ar",
    "pkg-config",
    "ksba-config",
    "pcap-config",
    "gpgme-config",
    "libgcrypt-config",
];

#[derive(Parser)]
#[command(name = "naslbuild", about = "Build the NASL interpreter library", version)]
struct Cli {
    /// Project tree to operate on
    #[arg(long, default_value = ".", global = true)]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Probe flags, generate the parser, compile, link, then smoke-check
    Build {
        /// Print the build summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove every generated artifact (best effort)
    #[command(visible_alias = "clear")]
    Clean,
    /// Check that the required external tools are installed
    Doctor,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cli = Cli::parse();
    let layout = ProjectLayout::new(&cli.project_root);

    match cli.command {
        Command::Build { json } => {
            let platform = Platform::detect()?;
            let mut runner = SystemRunner;
            let summary = build::run(&mut runner, &layout, platform)?;

            println!("\n@Tests:");
            let version = smoke::check(&layout, platform)?;
            println!("nasl_version: {version}");

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
        Command::Clean => {
            let platform = Platform::detect()?;
            println!("=== Cleaning build artifacts ===");
            clean::clean(&layout, platform);
        }
        Command::Doctor => doctor()?,
    }
    Ok(())
}

fn print_summary(summary: &BuildSummary) {
    println!("\n=== Build complete ===");
    println!("  objects compiled: {}", summary.objects_compiled);
    println!("  objects reused:   {}", summary.objects_reused);
    println!("  headers included: {}", summary.headers_aggregated);
    for artifact in &summary.artifacts {
        println!("  {artifact}");
    }
}

fn doctor() -> Result<()> {
    let mut ok = true;
    for tool in REQUIRED_TOOLS {
        if which::which(tool).is_ok() {
            eprintln!("[OK] {tool}");
        } else {
            eprintln!("[FAIL] missing `{tool}` in PATH");
            ok = false;
        }
    }
    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
