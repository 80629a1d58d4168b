//! Build orchestrator for the NASL interpreter library.
//!
//! Drives the host C toolchain to turn the four-directory NASL source tree
//! into a static archive, a CLI interpreter and a shared library: generates
//! the parser from the bison grammar, probes the installed C dependencies
//! for flags, compiles whatever objects are missing, aggregates the umbrella
//! header and links the final artifacts for the host platform.

pub mod build;
pub mod clean;
pub mod compile;
pub mod error;
pub mod exec;
pub mod flags;
pub mod grammar;
pub mod headers;
pub mod layout;
pub mod link;
pub mod platform;
pub mod scan;
pub mod smoke;

pub use error::{BuildError, Result};
