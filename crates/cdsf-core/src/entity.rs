//! Entities of the knowledge base: decision points, decisions, outcomes.
//!
//! The tree is strict containment: decision points own an ordered list of
//! decisions, decisions own an ordered list of outcomes, and no entity
//! appears under two parents. Ids are assigned once by the loader; by
//! convention a decision's id embeds its decision point's id
//! (`dp * 100 + k`) and an outcome's id embeds its decision's id
//! (`decision * 100 + m`), but nothing in this crate relies on the
//! embedding.

use serde::{Deserialize, Serialize};

/// Identifier for an entity in the knowledge base.
///
/// Unique across the whole tree; assigned by the loader.
pub type EntityId = u32;

/// A top-level grouping of related architectural decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionPoint {
    pub id: EntityId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(rename = "children", default)]
    pub decisions: Vec<Decision>,
}

impl DecisionPoint {
    /// Create a decision point with no decisions yet.
    pub fn new(id: EntityId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            classification: None,
            description: None,
            abbreviation: None,
            decisions: Vec::new(),
        }
    }

    /// Builder: set classification.
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    /// Builder: set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set abbreviation.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Append a decision to this decision point.
    pub fn add_decision(&mut self, decision: Decision) {
        self.decisions.push(decision);
    }

    /// Find a decision of this decision point by id.
    pub fn decision(&self, id: EntityId) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.id == id)
    }

    /// Find a decision of this decision point by label.
    pub fn decision_by_label(&self, label: &str) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.label == label)
    }

    /// Sort decisions (and their outcomes) by id ascending.
    pub fn sort_decisions(&mut self) {
        for decision in &mut self.decisions {
            decision.sort_outcomes();
        }
        self.decisions.sort_by_key(|d| d.id);
    }
}

/// A single architectural choice with several named outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: EntityId,
    pub label: String,
    /// Id of the owning decision point.
    pub parent: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(rename = "children", default)]
    pub outcomes: Vec<Outcome>,
}

impl Decision {
    /// Create a decision with no outcomes yet.
    pub fn new(id: EntityId, label: impl Into<String>, parent: EntityId) -> Self {
        Self {
            id,
            label: label.into(),
            parent,
            classification: None,
            description: None,
            abbreviation: None,
            outcomes: Vec::new(),
        }
    }

    /// Builder: set classification.
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    /// Builder: set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set abbreviation.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Append an outcome to this decision.
    pub fn add_outcome(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// Find an outcome of this decision by id.
    pub fn outcome(&self, id: EntityId) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.id == id)
    }

    /// Find an outcome of this decision by label.
    pub fn outcome_by_label(&self, label: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.label == label)
    }

    /// Sort outcomes by id ascending.
    pub fn sort_outcomes(&mut self) {
        self.outcomes.sort_by_key(|o| o.id);
    }
}

/// One possible resolution of a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub id: EntityId,
    pub label: String,
    /// Id of the owning decision.
    pub parent: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

impl Outcome {
    /// Create an outcome.
    pub fn new(id: EntityId, label: impl Into<String>, parent: EntityId) -> Self {
        Self {
            id,
            label: label.into(),
            parent,
            description: None,
            abbreviation: None,
        }
    }

    /// Builder: set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set abbreviation.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }
}
