//! CLI command implementations.

pub mod export;
pub mod inspect;
pub mod validate;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cdsf_core::KnowledgeBase;

/// Read and build a knowledge base from a TOML document on disk.
pub fn load(input: &Path) -> Result<KnowledgeBase> {
    let text =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    cdsf_kb::load_str(&text).with_context(|| format!("loading {}", input.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_missing_file_reports_path() {
        let err = load(Path::new("/no/such/kb.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/kb.toml"));
    }

    #[test]
    fn load_round_trip_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[decision_points]]
            label = "dp"

            [[decision_points.decisions]]
            label = "d"
            "#
        )
        .unwrap();

        let kb = load(file.path()).unwrap();
        assert_eq!(kb.decision_by_label("d").unwrap().id, 101);
    }
}
