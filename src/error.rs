use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failures the build pipeline can surface.
///
/// Cleanup problems are deliberately absent: `clean` tolerates them (missing
/// files are ignored, anything else is logged) and always succeeds.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required input was missing before a step could run.
    #[error("missing required input: {}", .0.display())]
    MissingInput(PathBuf),

    /// An external tool exited non-zero. The stdout captured up to that
    /// point rides along; stderr is never captured and has already reached
    /// the terminal.
    #[error("command failed ({status}): {command}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stdout: String,
    },

    /// An external tool could not be started at all.
    #[error("failed to spawn `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A generation step finished but did not leave the promised artifact.
    #[error("expected artifact not produced: {}", .0.display())]
    ArtifactMissing(PathBuf),

    /// The host is not one of the platforms the link step knows.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The built shared library failed its version-symbol check.
    #[error("shared library check failed: {0}")]
    SmokeCheck(String),

    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BuildError>;
