//! The consistency rule battery.
//!
//! Every rule has the same shape: a pure function over the knowledge base
//! returning a [`RuleVerdict`](crate::report::RuleVerdict) with every
//! violation it found, or a [`ModelError`](cdsf_core::ModelError) when a
//! relation references an id absent from the entity tree. Rules share no
//! state and may run in any order.

mod combination;
mod coverage;
mod exclusivity;
mod symmetry;
mod types;

pub use combination::decision_relation_combination;
pub use coverage::{
    decision_support_for_outcome_relation, outcome_amount_per_decision_relation,
    outcome_type_per_decision_relation,
};
pub use exclusivity::{single_outcome_relation, xor_outcomes};
pub use symmetry::{
    affecting_binding_symmetry_decisions, affecting_binding_symmetry_outcomes,
    inclusion_allowance_reciprocity,
};
pub use types::{decision_relation_types, outcome_relation_types};
