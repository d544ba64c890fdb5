//! Ordered storage for the two relation families.
//!
//! Relations are appended without deduplication — duplicate edges are a
//! validity question answered by the rule engine, not an insertion error.
//! Ordering by (source, target) ascending exists for reproducible
//! reporting and export only; it carries no semantics.

use serde::{Deserialize, Serialize};

use crate::relation::{
    DecisionRelation, DecisionRelationType, OutcomeRelation, OutcomeRelationType,
};

/// Holds the full set of decision relations and outcome relations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationStore {
    decision_relations: Vec<DecisionRelation>,
    outcome_relations: Vec<OutcomeRelation>,
}

impl RelationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision relation.
    pub fn add_decision_relation(&mut self, relation: DecisionRelation) {
        self.decision_relations.push(relation);
    }

    /// Append an outcome relation.
    pub fn add_outcome_relation(&mut self, relation: OutcomeRelation) {
        self.outcome_relations.push(relation);
    }

    /// All decision relations, in store order.
    pub fn decision_relations(&self) -> &[DecisionRelation] {
        &self.decision_relations
    }

    /// All outcome relations, in store order.
    pub fn outcome_relations(&self) -> &[OutcomeRelation] {
        &self.outcome_relations
    }

    /// Decision relations of a given type.
    pub fn decision_relations_of_kind(
        &self,
        kind: DecisionRelationType,
    ) -> impl Iterator<Item = &DecisionRelation> {
        self.decision_relations
            .iter()
            .filter(move |r| r.kind == kind)
    }

    /// Outcome relations of a given type.
    pub fn outcome_relations_of_kind(
        &self,
        kind: OutcomeRelationType,
    ) -> impl Iterator<Item = &OutcomeRelation> {
        self.outcome_relations.iter().filter(move |r| r.kind == kind)
    }

    /// Sort both lists by (source, target) ascending.
    pub fn sort(&mut self) {
        self.decision_relations
            .sort_by_key(|r| (r.source, r.target));
        self.outcome_relations.sort_by_key(|r| (r.source, r.target));
    }

    /// Number of decision relations.
    pub fn decision_relation_count(&self) -> usize {
        self.decision_relations.len()
    }

    /// Number of outcome relations.
    pub fn outcome_relation_count(&self) -> usize {
        self.outcome_relations.len()
    }

    /// Whether the store holds no relations at all.
    pub fn is_empty(&self) -> bool {
        self.decision_relations.is_empty() && self.outcome_relations.is_empty()
    }
}
