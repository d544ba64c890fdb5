//! Directed, typed relations between decisions and between outcomes.
//!
//! The two families share the same shape but are never interchangeable:
//! decision relations carry decision ids, outcome relations carry outcome
//! ids. Type strings are normalized to lower-case when parsed; a string
//! outside the closed vocabulary is preserved as `Unknown` so that the
//! validator can flag it instead of the parser refusing the document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// Which relation family an edge belongs to. Only used for reporting and
/// export; the families are kept in separate lists everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationGroup {
    Decision,
    Outcome,
}

impl RelationGroup {
    /// Group tag used in exported documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationGroup::Decision => "decRel",
            RelationGroup::Outcome => "outRel",
        }
    }
}

/// Type of a relation between two decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecisionRelationType {
    Requiring,
    Influencing,
    Affecting,
    Binding,
    /// A type outside the closed vocabulary, kept verbatim (lower-cased)
    /// for diagnostics.
    Unknown(String),
}

impl DecisionRelationType {
    /// Parse from a raw string, normalizing to lower-case.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "requiring" => DecisionRelationType::Requiring,
            "influencing" => DecisionRelationType::Influencing,
            "affecting" => DecisionRelationType::Affecting,
            "binding" => DecisionRelationType::Binding,
            other => DecisionRelationType::Unknown(other.to_string()),
        }
    }

    /// The canonical lower-case form.
    pub fn as_str(&self) -> &str {
        match self {
            DecisionRelationType::Requiring => "requiring",
            DecisionRelationType::Influencing => "influencing",
            DecisionRelationType::Affecting => "affecting",
            DecisionRelationType::Binding => "binding",
            DecisionRelationType::Unknown(raw) => raw,
        }
    }

    /// Whether the type belongs to the closed decision-relation vocabulary.
    pub fn is_valid(&self) -> bool {
        !matches!(self, DecisionRelationType::Unknown(_))
    }
}

impl From<&str> for DecisionRelationType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for DecisionRelationType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<DecisionRelationType> for String {
    fn from(kind: DecisionRelationType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for DecisionRelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a relation between two outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutcomeRelationType {
    /// `in` — including.
    Including,
    /// `ex` — excluding.
    Excluding,
    /// `a` — allowing.
    Allowing,
    /// `aff` — affecting; mirrors a decision-level `affecting` relation.
    Affecting,
    /// `eb` — exclusive binding; mirrors a decision-level `binding` relation.
    ExclusiveBinding,
    /// A type outside the closed vocabulary, kept verbatim (lower-cased)
    /// for diagnostics.
    Unknown(String),
}

impl OutcomeRelationType {
    /// Parse from a raw string, normalizing to lower-case.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "in" => OutcomeRelationType::Including,
            "ex" => OutcomeRelationType::Excluding,
            "a" => OutcomeRelationType::Allowing,
            "aff" => OutcomeRelationType::Affecting,
            "eb" => OutcomeRelationType::ExclusiveBinding,
            other => OutcomeRelationType::Unknown(other.to_string()),
        }
    }

    /// The canonical lower-case form.
    pub fn as_str(&self) -> &str {
        match self {
            OutcomeRelationType::Including => "in",
            OutcomeRelationType::Excluding => "ex",
            OutcomeRelationType::Allowing => "a",
            OutcomeRelationType::Affecting => "aff",
            OutcomeRelationType::ExclusiveBinding => "eb",
            OutcomeRelationType::Unknown(raw) => raw,
        }
    }

    /// Whether the type belongs to the closed outcome-relation vocabulary.
    pub fn is_valid(&self) -> bool {
        !matches!(self, OutcomeRelationType::Unknown(_))
    }
}

impl From<&str> for OutcomeRelationType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for OutcomeRelationType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<OutcomeRelationType> for String {
    fn from(kind: OutcomeRelationType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for OutcomeRelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, typed edge between two decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRelation {
    pub source: EntityId,
    pub target: EntityId,
    #[serde(rename = "type")]
    pub kind: DecisionRelationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl DecisionRelation {
    /// Create a decision relation.
    pub fn new(source: EntityId, target: EntityId, kind: DecisionRelationType) -> Self {
        Self {
            source,
            target,
            kind,
            explanation: None,
        }
    }

    /// Builder: set explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn group(&self) -> RelationGroup {
        RelationGroup::Decision
    }
}

/// A directed, typed edge between two outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeRelation {
    pub source: EntityId,
    pub target: EntityId,
    #[serde(rename = "type")]
    pub kind: OutcomeRelationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl OutcomeRelation {
    /// Create an outcome relation.
    pub fn new(source: EntityId, target: EntityId, kind: OutcomeRelationType) -> Self {
        Self {
            source,
            target,
            kind,
            explanation: None,
        }
    }

    /// Builder: set explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn group(&self) -> RelationGroup {
        RelationGroup::Outcome
    }
}
