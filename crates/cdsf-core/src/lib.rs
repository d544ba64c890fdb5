//! Core entity and relation model for the CloudDSF+ knowledge base.
//!
//! A knowledge base is a three-level tree — decision points own decisions,
//! decisions own outcomes — plus two families of directed, typed relations:
//! decision relations and outcome relations. This crate owns the data
//! structures, id and label lookups, and aggregate statistics. The
//! consistency rules that keep the two relation graphs mutually coherent
//! live in `cdsf-verify`; reading and writing knowledge-base documents
//! lives in `cdsf-kb`.

pub mod entity;
pub mod error;
pub mod kb;
pub mod relation;
pub mod stats;
pub mod store;

pub use entity::{Decision, DecisionPoint, EntityId, Outcome};
pub use error::ModelError;
pub use kb::KnowledgeBase;
pub use relation::{
    DecisionRelation, DecisionRelationType, OutcomeRelation, OutcomeRelationType, RelationGroup,
};
pub use stats::{DecisionRelationCounts, KnowledgeBaseStats, OutcomeRelationCounts};
pub use store::RelationStore;
