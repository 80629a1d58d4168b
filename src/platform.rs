use std::fmt;

use crate::error::{BuildError, Result};

/// Platforms the link step knows how to drive. Anything else is rejected up
/// front instead of silently skipping the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Darwin,
}

impl Platform {
    /// Detect the host platform.
    pub fn detect() -> Result<Self> {
        match std::env::consts::OS {
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::Darwin),
            other => Err(BuildError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// File name of the shared library this platform produces.
    pub fn shared_library_name(self) -> &'static str {
        match self {
            Platform::Linux => "libnasl.so",
            Platform::Darwin => "libnasl.dylib",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_library_names_follow_the_platform() {
        assert_eq!(Platform::Linux.shared_library_name(), "libnasl.so");
        assert_eq!(Platform::Darwin.shared_library_name(), "libnasl.dylib");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn detects_linux() {
        assert_eq!(Platform::detect().unwrap(), Platform::Linux);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn detects_darwin() {
        assert_eq!(Platform::detect().unwrap(), Platform::Darwin);
    }

    #[test]
    fn displays_lowercase_names() {
        assert_eq!(Platform::Linux.to_string(), "linux");
        assert_eq!(Platform::Darwin.to_string(), "darwin");
    }
}
