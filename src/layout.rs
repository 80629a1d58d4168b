//! Fixed names and paths of the NASL source tree and its build products.
//! Everything is anchored at a configurable project root so the orchestrator
//! can run against any checkout, including throwaway test trees.

use std::path::{Path, PathBuf};

use crate::platform::Platform;

/// The four library directories, scanned in this order.
pub const SOURCE_DIRS: [&str; 4] = ["base", "util", "misc", "nasl"];

/// Sources that define their own `main` and must never end up in the
/// library: the interpreter CLI and the lint tool.
pub const ENTRY_POINT_SOURCES: [&str; 2] = ["nasl.c", "nasl-lint.c"];

/// Version baked into every compile and link command.
pub const NASL_VERSION: &str = "5.06";

pub const STATIC_ARCHIVE: &str = "libnasl.a";
pub const UMBRELLA_HEADER: &str = "libnasl.h";
pub const CLI_EXECUTABLE: &str = "nasli";
pub const GRAMMAR_DIR: &str = "nasl";
pub const GRAMMAR_FILE: &str = "nasl_grammar.y";

/// Interpreter entry point, passed to the linker as a source file.
pub const INTERPRETER_MAIN: &str = "nasl/nasl.c";

/// `-D NAME="value"` pairs applied to every compile and link command. The
/// escaped quotes are part of the macro value so the C sources receive
/// string literals.
pub fn define_args() -> Vec<String> {
    let defines = [
        ("OPENVASSD_CONF", "./"),
        ("GVM_PID_DIR", "./"),
        ("OPENVAS_SYSCONF_DIR", "./"),
        ("GVM_SYSCONF_DIR", "./"),
        ("OPENVAS_NASL_VERSION", NASL_VERSION),
        ("OPENVASLIB_VERSION", NASL_VERSION),
    ];
    let mut args = Vec::with_capacity(defines.len() * 2);
    for (name, value) in defines {
        args.push("-D".to_string());
        args.push(format!("{name}=\"{value}\""));
    }
    args
}

/// Paths of everything the build reads and writes.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn grammar_file(&self) -> PathBuf {
        self.root.join(GRAMMAR_DIR).join(GRAMMAR_FILE)
    }

    /// The three files bison leaves next to the grammar.
    pub fn grammar_artifacts(&self) -> [PathBuf; 3] {
        let dir = self.root.join(GRAMMAR_DIR);
        [
            dir.join("nasl_grammar.tab.c"),
            dir.join("nasl_grammar.tab.h"),
            dir.join("nasl_grammar.output"),
        ]
    }

    pub fn static_archive(&self) -> PathBuf {
        self.root.join(STATIC_ARCHIVE)
    }

    pub fn umbrella_header(&self) -> PathBuf {
        self.root.join(UMBRELLA_HEADER)
    }

    pub fn cli_executable(&self) -> PathBuf {
        self.root.join(CLI_EXECUTABLE)
    }

    pub fn shared_library(&self, platform: Platform) -> PathBuf {
        self.root.join(platform.shared_library_name())
    }
}
