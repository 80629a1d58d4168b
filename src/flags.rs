//! Toolchain flag probing. The host's library-config tools report where the
//! C dependencies live; their output is aggregated into one flag set used by
//! every compile and link command.

use tracing::debug;

use crate::error::Result;
use crate::exec::{CommandLine, CommandRunner};

/// Compile and link flags as individual tokens, in probe order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    pub cflags: Vec<String>,
    pub ldflags: Vec<String>,
}

/// Compile-flag probes, in the order their output is appended.
const CFLAG_PROBES: [(&str, &[&str]); 8] = [
    ("pkg-config", &["--cflags", "glib-2.0"]),
    ("pkg-config", &["--cflags", "gio-2.0"]),
    ("ksba-config", &["--cflags"]),
    ("pcap-config", &["--cflags"]),
    ("gpgme-config", &["--cflags"]),
    ("libgcrypt-config", &["--cflags"]),
    ("pkg-config", &["--cflags", "hiredis"]),
    ("pkg-config", &["--cflags", "uuid"]),
];

/// Link-flag probes. gnutls appears here only; it contributes no cflags.
const LDFLAG_PROBES: [(&str, &[&str]); 9] = [
    ("pkg-config", &["--libs", "glib-2.0"]),
    ("pkg-config", &["--libs", "gio-2.0"]),
    ("pkg-config", &["--libs", "gnutls"]),
    ("ksba-config", &["--libs"]),
    ("pcap-config", &["--libs"]),
    ("gpgme-config", &["--libs"]),
    ("libgcrypt-config", &["--libs"]),
    ("pkg-config", &["--libs", "hiredis"]),
    ("pkg-config", &["--libs", "uuid"]),
];

/// Libraries linked regardless of what the probes report: secure-shell
/// client, regex, math, compression.
const LDFLAG_TAIL: [&str; 4] = ["-lssh", "-lpcre", "-lm", "-lz"];

/// Include marker so generated headers resolve from the project root.
const LOCAL_INCLUDE: &str = "-I./";

/// Run every probe and assemble the flag set. Probes run quietly; a failing
/// probe aborts with the offending command line.
pub fn probe(runner: &mut dyn CommandRunner) -> Result<FlagSet> {
    let mut flags = FlagSet::default();
    for (program, args) in CFLAG_PROBES {
        let stdout = runner.run(&CommandLine::new(program).args(args.iter().copied()))?;
        flags.cflags.extend(tokenize(&stdout));
    }
    flags.cflags.push(LOCAL_INCLUDE.to_string());

    for (program, args) in LDFLAG_PROBES {
        let stdout = runner.run(&CommandLine::new(program).args(args.iter().copied()))?;
        flags.ldflags.extend(tokenize(&stdout));
    }
    flags
        .ldflags
        .extend(LDFLAG_TAIL.iter().map(|flag| flag.to_string()));

    debug!(
        cflags = flags.cflags.len(),
        ldflags = flags.ldflags.len(),
        "toolchain probes complete"
    );
    Ok(flags)
}

/// Newline-strip and whitespace-normalize a probe's stdout into tokens.
fn tokenize(stdout: &str) -> impl Iterator<Item = String> + '_ {
    stdout.split_whitespace().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;

    /// Canned probe output keyed on the probed package or tool name.
    fn canned(cmd: &CommandLine) -> String {
        let key = cmd.args.last().map(String::as_str).unwrap_or("");
        match (cmd.program.as_str(), key) {
            ("pkg-config", "glib-2.0") if cmd.args[0] == "--cflags" => {
                "-I/usr/include/glib-2.0 -I/usr/lib/glib-2.0/include\n".into()
            }
            ("pkg-config", "glib-2.0") => "-lglib-2.0\n".into(),
            ("pkg-config", "gio-2.0") if cmd.args[0] == "--cflags" => "-I/usr/include/gio\n".into(),
            ("pkg-config", "gio-2.0") => "-lgio-2.0\n".into(),
            ("pkg-config", "gnutls") => "-lgnutls\n".into(),
            ("pkg-config", "hiredis") if cmd.args[0] == "--cflags" => "\n".into(),
            ("pkg-config", "hiredis") => "-lhiredis\n".into(),
            ("pkg-config", "uuid") if cmd.args[0] == "--cflags" => "-I/usr/include/uuid\n".into(),
            ("pkg-config", "uuid") => "-luuid\n".into(),
            ("ksba-config", "--cflags") => "-I/usr/include/ksba\n".into(),
            ("ksba-config", "--libs") => "-lksba\n".into(),
            ("pcap-config", "--cflags") => "\n".into(),
            ("pcap-config", "--libs") => "-lpcap\n".into(),
            ("gpgme-config", "--cflags") => "-I/usr/include/gpgme\n".into(),
            ("gpgme-config", "--libs") => "-lgpgme\n".into(),
            ("libgcrypt-config", "--cflags") => "\n".into(),
            ("libgcrypt-config", "--libs") => "-lgcrypt\n".into(),
            other => panic!("unexpected probe: {other:?}"),
        }
    }

    #[test]
    fn aggregates_in_probe_order_with_fixed_suffixes() {
        let mut runner = |cmd: &CommandLine| -> Result<String> { Ok(canned(cmd)) };
        let flags = probe(&mut runner).unwrap();

        assert_eq!(
            flags.cflags,
            vec![
                "-I/usr/include/glib-2.0",
                "-I/usr/lib/glib-2.0/include",
                "-I/usr/include/gio",
                "-I/usr/include/ksba",
                "-I/usr/include/gpgme",
                "-I/usr/include/uuid",
                "-I./",
            ]
        );
        assert_eq!(
            flags.ldflags,
            vec![
                "-lglib-2.0",
                "-lgio-2.0",
                "-lgnutls",
                "-lksba",
                "-lpcap",
                "-lgpgme",
                "-lgcrypt",
                "-lhiredis",
                "-luuid",
                "-lssh",
                "-lpcre",
                "-lm",
                "-lz",
            ]
        );
    }

    #[test]
    fn identical_input_yields_identical_flags() {
        let mut first = |cmd: &CommandLine| -> Result<String> { Ok(canned(cmd)) };
        let mut second = |cmd: &CommandLine| -> Result<String> { Ok(canned(cmd)) };
        assert_eq!(probe(&mut first).unwrap(), probe(&mut second).unwrap());
    }

    #[test]
    fn failing_probe_aborts_the_aggregation() {
        let mut runner = |cmd: &CommandLine| -> Result<String> {
            Err(BuildError::CommandSpawn {
                command: cmd.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
            })
        };
        let err = probe(&mut runner).unwrap_err();
        match err {
            BuildError::CommandSpawn { command, .. } => {
                assert_eq!(command, "pkg-config --cflags glib-2.0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
