//! `cdsf inspect` — print aggregate statistics for a knowledge base.

use std::path::Path;

use anyhow::Result;
use cdsf_core::KnowledgeBaseStats;

pub fn run(input: &Path) -> Result<i32> {
    let kb = super::load(input)?;
    let stats = KnowledgeBaseStats::collect(&kb);
    print!("{stats}");
    Ok(0)
}
