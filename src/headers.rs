//! Umbrella header generation. Embedding consumers include one file,
//! `libnasl.h`, which pulls in every header the scan found.

use std::path::PathBuf;

use crate::error::{BuildError, Result};
use crate::layout::ProjectLayout;
use crate::scan::ScanOutcome;

/// Write the umbrella header: one include line per discovered header, in
/// scan order. Always rewritten, never consulted for freshness.
pub fn write_umbrella(layout: &ProjectLayout, scan: &ScanOutcome) -> Result<PathBuf> {
    let mut contents = String::new();
    for header in &scan.headers {
        contents.push_str(&format!("#include \"{}\"\n", header.display()));
    }
    let path = layout.umbrella_header();
    std::fs::write(&path, contents).map_err(|source| BuildError::WriteFile {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_headers_in_scan_order() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let scan = ScanOutcome {
            sources: Default::default(),
            headers: vec![
                PathBuf::from("base/kb.h"),
                PathBuf::from("misc/network.h"),
                PathBuf::from("nasl/nasl_lex_ctxt.h"),
            ],
        };

        let path = write_umbrella(&layout, &scan).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(
            contents,
            "#include \"base/kb.h\"\n#include \"misc/network.h\"\n#include \"nasl/nasl_lex_ctxt.h\"\n"
        );
    }

    #[test]
    fn overwrites_a_previous_umbrella() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        fs::write(layout.umbrella_header(), "#include \"stale.h\"\n").unwrap();

        let scan = ScanOutcome {
            sources: Default::default(),
            headers: vec![PathBuf::from("base/kb.h")],
        };
        write_umbrella(&layout, &scan).unwrap();

        let contents = fs::read_to_string(layout.umbrella_header()).unwrap();
        assert_eq!(contents, "#include \"base/kb.h\"\n");
    }
}
