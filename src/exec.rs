//! Typed external commands. Every tool invocation is built as data (program
//! plus ordered arguments) and dispatched through [`CommandRunner`], so no
//! shell is involved and tests can script the toolchain.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{BuildError, Result};

/// A fully specified external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the spawn; inherited when absent.
    pub cwd: Option<PathBuf>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// Renders as the program followed by its space-joined arguments, which is
/// exactly what the build echoes before mutating commands run.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Executes [`CommandLine`]s. The build pipeline only ever talks to this
/// trait; tests substitute a scripted implementation.
pub trait CommandRunner {
    /// Run the command to completion and return its captured stdout.
    /// Non-zero exit or a spawn failure is an error carrying the rendered
    /// command line; an exit failure also keeps the captured stdout.
    fn run(&mut self, cmd: &CommandLine) -> Result<String>;
}

/// Closures can stand in for a runner in tests.
impl<F> CommandRunner for F
where
    F: FnMut(&CommandLine) -> Result<String>,
{
    fn run(&mut self, cmd: &CommandLine) -> Result<String> {
        self(cmd)
    }
}

/// Runs commands against the real system: stdout captured, stderr passed
/// through to the terminal.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, cmd: &CommandLine) -> Result<String> {
        let mut command = Command::new(&cmd.program);
        command
            .args(&cmd.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        if let Some(dir) = &cmd.cwd {
            command.current_dir(dir);
        }
        let output = command.output().map_err(|source| BuildError::CommandSpawn {
            command: cmd.to_string(),
            source,
        })?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Err(BuildError::CommandFailed {
                command: cmd.to_string(),
                status: output.status,
                stdout,
            });
        }
        Ok(stdout)
    }
}
