//! Knowledge-base document layer: TOML in, JSON out.
//!
//! A knowledge base is authored as a declarative TOML document naming
//! entities by label:
//!
//! ```toml
//! [knowledge_base]
//! label = "CloudDSF+"
//!
//! [[decision_points]]
//! label = "Define Application Distribution"
//!
//! [[decision_points.decisions]]
//! label = "Select Application Layer"
//!
//! [[decision_points.decisions.outcomes]]
//! label = "Presentation Layer"
//!
//! [[decision_relations]]
//! source = "Select Application Layer"
//! target = "Select Cloud Deployment Model"
//! type = "Influencing"
//! ```
//!
//! The loader assigns numeric ids (decision points `1..`, decisions
//! `dp * 100 + k`, outcomes `decision * 100 + m`), resolves relation labels
//! to ids, normalizes relation-type casing, and sorts everything by id, so
//! the validator and exporter operate purely on ids. Label lookups never
//! leave this crate.

pub mod document;
pub mod export;
pub mod load;

pub use document::KbDocument;
pub use export::to_json_string;
pub use load::{build, load_str, LoadError};
