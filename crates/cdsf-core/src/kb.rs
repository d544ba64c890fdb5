//! The knowledge-base container: entity tree plus relation store.
//!
//! Lookups are deterministic, side-effect-free scans of the tree. At
//! realistic knowledge-base sizes (tens of decision points, hundreds of
//! outcomes) an id index buys nothing, so none is kept.

use serde::{Deserialize, Serialize};

use crate::entity::{Decision, DecisionPoint, EntityId, Outcome};
use crate::error::ModelError;
use crate::store::RelationStore;

/// A complete knowledge base: the three-level entity tree and the two
/// relation lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "children", default)]
    decision_points: Vec<DecisionPoint>,
    #[serde(skip)]
    relations: RelationStore,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            decision_points: Vec::new(),
            relations: RelationStore::new(),
        }
    }

    /// Builder: set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a decision point.
    pub fn add_decision_point(&mut self, decision_point: DecisionPoint) {
        self.decision_points.push(decision_point);
    }

    /// All decision points, in tree order.
    pub fn decision_points(&self) -> &[DecisionPoint] {
        &self.decision_points
    }

    /// The relation store.
    pub fn relations(&self) -> &RelationStore {
        &self.relations
    }

    /// Mutable access to the relation store (loader only; the validator
    /// never mutates).
    pub fn relations_mut(&mut self) -> &mut RelationStore {
        &mut self.relations
    }

    // --- Lookups ---

    /// Find a decision point by id.
    pub fn decision_point(&self, id: EntityId) -> Option<&DecisionPoint> {
        self.decision_points.iter().find(|dp| dp.id == id)
    }

    /// Find a decision point by label.
    pub fn decision_point_by_label(&self, label: &str) -> Option<&DecisionPoint> {
        self.decision_points.iter().find(|dp| dp.label == label)
    }

    /// Find a decision anywhere in the tree by id.
    pub fn decision(&self, id: EntityId) -> Option<&Decision> {
        self.decision_points.iter().find_map(|dp| dp.decision(id))
    }

    /// Find a decision anywhere in the tree by label.
    pub fn decision_by_label(&self, label: &str) -> Option<&Decision> {
        self.decision_points
            .iter()
            .find_map(|dp| dp.decision_by_label(label))
    }

    /// Find an outcome anywhere in the tree by id.
    pub fn outcome(&self, id: EntityId) -> Option<&Outcome> {
        self.decisions().find_map(|d| d.outcome(id))
    }

    /// Find an outcome anywhere in the tree by label.
    pub fn outcome_by_label(&self, label: &str) -> Option<&Outcome> {
        self.decisions().find_map(|d| d.outcome_by_label(label))
    }

    /// Like [`Self::decision`] but failing loudly on an unknown id.
    pub fn try_decision(&self, id: EntityId) -> Result<&Decision, ModelError> {
        self.decision(id).ok_or(ModelError::UnknownDecision(id))
    }

    /// Like [`Self::outcome`] but failing loudly on an unknown id.
    pub fn try_outcome(&self, id: EntityId) -> Result<&Outcome, ModelError> {
        self.outcome(id).ok_or(ModelError::UnknownOutcome(id))
    }

    /// Iterate over every decision in the tree.
    pub fn decisions(&self) -> impl Iterator<Item = &Decision> {
        self.decision_points.iter().flat_map(|dp| dp.decisions.iter())
    }

    /// Iterate over every outcome in the tree.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.decisions().flat_map(|d| d.outcomes.iter())
    }

    /// Sort the whole tree and both relation lists by id ascending, for
    /// reproducible reporting and export.
    pub fn sort_entities(&mut self) {
        for dp in &mut self.decision_points {
            dp.sort_decisions();
        }
        self.decision_points.sort_by_key(|dp| dp.id);
        self.relations.sort();
    }
}
