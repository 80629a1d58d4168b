//! Post-build smoke check: load the freshly linked shared library the way an
//! embedding consumer would and ask it for its version.

use std::ffi::CStr;
use std::os::raw::c_char;

use libloading::{Library, Symbol};

use crate::error::{BuildError, Result};
use crate::layout::ProjectLayout;
use crate::platform::Platform;

/// Symbol every build of the library exports.
const VERSION_SYMBOL: &[u8] = b"nasl_version";

/// Load the shared library and call its version symbol. A library that
/// cannot be loaded, lacks the symbol, or reports no version fails the
/// build.
pub fn check(layout: &ProjectLayout, platform: Platform) -> Result<String> {
    let path = layout.shared_library(platform);
    let library = unsafe { Library::new(&path) }.map_err(|err| {
        BuildError::SmokeCheck(format!("failed to load {}: {err}", path.display()))
    })?;
    let version: Symbol<unsafe extern "C" fn() -> *const c_char> =
        unsafe { library.get(VERSION_SYMBOL) }.map_err(|err| {
            BuildError::SmokeCheck(format!("missing symbol nasl_version: {err}"))
        })?;
    let raw = unsafe { version() };
    if raw.is_null() {
        return Err(BuildError::SmokeCheck("nasl_version returned null".into()));
    }
    let version = unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned();
    Ok(version)
}
