//! `cdsf export` — validate, then serialize to JSON.
//!
//! Export only runs on a coherent knowledge base; a failed validation
//! prints the report and leaves the output untouched.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub fn run(input: &Path, output: Option<&Path>) -> Result<i32> {
    let kb = super::load(input)?;

    let report = cdsf_verify::validate(&kb)
        .context("validation aborted on an inconsistent entity tree")?;
    if !report.passed() {
        eprint!("{report}");
        eprintln!("refusing to export: knowledge base failed validation");
        return Ok(1);
    }

    let json = cdsf_kb::to_json_string(&kb).context("serializing knowledge base")?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(0)
}
