//! `cdsf validate` — run the consistency rule battery.

use std::path::Path;

use anyhow::{bail, Context, Result};

/// Validate a knowledge base and print the report.
///
/// Returns exit code 0 when every rule passed, 1 when defects were found.
pub fn run(input: &Path, report_format: Option<&str>) -> Result<i32> {
    let kb = super::load(input)?;

    let report = cdsf_verify::validate(&kb)
        .context("validation aborted on an inconsistent entity tree")?;

    match report_format {
        Some("json") => println!("{}", serde_json::to_string_pretty(&report)?),
        Some("human") | None => print!("{report}"),
        Some(other) => bail!("unknown report format: '{other}'. Choose: human, json"),
    }

    Ok(if report.passed() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_doc(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    const COHERENT: &str = r#"
        [[decision_points]]
        label = "dp1"

        [[decision_points.decisions]]
        label = "d1"

        [[decision_points.decisions.outcomes]]
        label = "o1"

        [[decision_points]]
        label = "dp2"

        [[decision_points.decisions]]
        label = "d2"

        [[decision_points.decisions.outcomes]]
        label = "o2"

        [[decision_relations]]
        source = "d1"
        target = "d2"
        type = "affecting"

        [[decision_relations]]
        source = "d2"
        target = "d1"
        type = "binding"

        [[outcome_relations]]
        source = "o1"
        target = "o2"
        type = "aff"

        [[outcome_relations]]
        source = "o2"
        target = "o1"
        type = "eb"
        "#;

    #[test]
    fn coherent_base_exits_zero() {
        let file = write_doc(COHERENT);
        assert_eq!(run(file.path(), None).unwrap(), 0);
    }

    #[test]
    fn defective_base_exits_one() {
        // the aff edge loses its eb mirror
        let doc = COHERENT.replace("type = \"eb\"", "type = \"aff\"");
        let file = write_doc(&doc);
        assert_eq!(run(file.path(), Some("json")).unwrap(), 1);
    }

    #[test]
    fn unknown_report_format_is_an_error() {
        let file = write_doc(COHERENT);
        assert!(run(file.path(), Some("xml")).is_err());
    }
}
