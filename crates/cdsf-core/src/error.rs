//! Error types for the knowledge-base model.

use thiserror::Error;

use crate::entity::EntityId;

/// Referential failures raised by id-based lookups.
///
/// A relation or parent pointer naming an id absent from the entity tree is
/// a loader bug, not a data-quality defect: no consistency rule can be
/// evaluated against such a tree, so callers abort the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("decision point {0} not found")]
    UnknownDecisionPoint(EntityId),

    #[error("decision {0} not found")]
    UnknownDecision(EntityId),

    #[error("outcome {0} not found")]
    UnknownOutcome(EntityId),
}
