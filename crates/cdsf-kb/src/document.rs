//! Serde view of the TOML knowledge-base document.
//!
//! The document names entities by label; ids do not appear in it. Relation
//! `type` strings are kept raw here — normalization happens in the loader.

use serde::Deserialize;

/// A complete knowledge-base document.
#[derive(Debug, Clone, Deserialize)]
pub struct KbDocument {
    #[serde(default)]
    pub knowledge_base: KbMeta,
    #[serde(default)]
    pub decision_points: Vec<DecisionPointDoc>,
    #[serde(default)]
    pub decision_relations: Vec<RelationDoc>,
    #[serde(default)]
    pub outcome_relations: Vec<RelationDoc>,
}

/// Metadata of the knowledge base itself.
#[derive(Debug, Clone, Deserialize)]
pub struct KbMeta {
    #[serde(default = "KbMeta::default_label")]
    pub label: String,
    pub description: Option<String>,
}

impl KbMeta {
    fn default_label() -> String {
        "CloudDSF+".to_string()
    }
}

impl Default for KbMeta {
    fn default() -> Self {
        Self {
            label: Self::default_label(),
            description: None,
        }
    }
}

/// A decision point with its nested decisions.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionPointDoc {
    pub label: String,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub decisions: Vec<DecisionDoc>,
}

/// A decision with its nested outcomes.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionDoc {
    pub label: String,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub outcomes: Vec<OutcomeDoc>,
}

/// One outcome of a decision.
#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeDoc {
    pub label: String,
    pub description: Option<String>,
    pub abbreviation: Option<String>,
}

/// A relation referencing its endpoints by label.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationDoc {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub explanation: Option<String>,
}
