//! Relation-consistency rule engine for the CloudDSF+ knowledge base.
//!
//! The decision-relation graph and the outcome-relation graph must stay
//! mutually coherent before a knowledge base is published: affecting and
//! binding edges mirror each other, every non-requiring decision relation
//! is backed by a full cross-product of outcome relations of the matching
//! type, outcomes never relate to themselves or their siblings, and no
//! pair of outcomes carries parallel edges.
//!
//! Each rule is an independent, pure, read-only function over the model
//! returning a structured [`RuleVerdict`]; [`engine::validate`] runs the
//! whole battery exhaustively so one invocation surfaces every defect.
//! A relation referencing an id absent from the entity tree aborts the
//! run with a [`cdsf_core::ModelError`] — no verdict can be trusted when
//! the tree itself is inconsistent.
//!
//! Validation is a synchronous, read-only batch pass with no state carried
//! between invocations; the caller must keep the model unchanged for the
//! duration of a run.

pub mod engine;
pub mod report;
pub mod rules;

#[cfg(test)]
pub(crate) mod testkb;

pub use engine::{check_sanity, validate};
pub use report::{Rule, RuleVerdict, ValidationReport, Violation};
