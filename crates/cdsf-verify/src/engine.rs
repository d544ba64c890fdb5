//! Runs the full rule battery and aggregates verdicts.
//!
//! The battery is exhaustive: every rule runs even after earlier failures,
//! so one invocation reports everything wrong with the knowledge base.
//! Only a referential defect — a relation naming an id absent from the
//! tree — aborts the run, because no verdict is meaningful against an
//! inconsistent tree.

use cdsf_core::{KnowledgeBase, ModelError};

use crate::report::ValidationReport;
use crate::rules;

/// Run every consistency rule and collect the verdicts.
pub fn validate(kb: &KnowledgeBase) -> Result<ValidationReport, ModelError> {
    let verdicts = vec![
        rules::decision_relation_types(kb)?,
        rules::outcome_relation_types(kb)?,
        rules::decision_relation_combination(kb)?,
        rules::outcome_amount_per_decision_relation(kb)?,
        rules::outcome_type_per_decision_relation(kb)?,
        rules::decision_support_for_outcome_relation(kb)?,
        rules::affecting_binding_symmetry_decisions(kb)?,
        rules::affecting_binding_symmetry_outcomes(kb)?,
        rules::inclusion_allowance_reciprocity(kb)?,
        rules::xor_outcomes(kb)?,
        rules::single_outcome_relation(kb)?,
    ];
    Ok(ValidationReport::new(verdicts))
}

/// Conjunction of all rules: true iff the knowledge base is coherent.
pub fn check_sanity(kb: &KnowledgeBase) -> Result<bool, ModelError> {
    Ok(validate(kb)?.passed())
}
