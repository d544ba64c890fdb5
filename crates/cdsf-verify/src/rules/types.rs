//! Type-closure rules: every relation carries a type from the closed
//! vocabulary of its family.

use cdsf_core::{KnowledgeBase, ModelError};

use crate::report::{Rule, RuleVerdict, Violation};

/// Decision relations may only be requiring, influencing, affecting or
/// binding.
pub fn decision_relation_types(kb: &KnowledgeBase) -> Result<RuleVerdict, ModelError> {
    let violations: Vec<Violation> = kb
        .relations()
        .decision_relations()
        .iter()
        .filter(|rel| !rel.kind.is_valid())
        .map(|rel| {
            Violation::new(rel.source, rel.target)
                .observed(rel.kind.as_str())
                .expected("requiring, influencing, affecting or binding")
        })
        .collect();

    let summary = if violations.is_empty() {
        "all decision relation types are valid".to_string()
    } else {
        format!(
            "{} decision relation(s) carry an unrecognized type",
            violations.len()
        )
    };
    Ok(RuleVerdict::new(
        Rule::DecisionRelationTypes,
        violations,
        summary,
    ))
}

/// Outcome relations may only be in, ex, a, aff or eb.
pub fn outcome_relation_types(kb: &KnowledgeBase) -> Result<RuleVerdict, ModelError> {
    let violations: Vec<Violation> = kb
        .relations()
        .outcome_relations()
        .iter()
        .filter(|rel| !rel.kind.is_valid())
        .map(|rel| {
            Violation::new(rel.source, rel.target)
                .observed(rel.kind.as_str())
                .expected("in, ex, a, aff or eb")
        })
        .collect();

    let summary = if violations.is_empty() {
        "all outcome relation types are valid".to_string()
    } else {
        format!(
            "{} outcome relation(s) carry an unrecognized type",
            violations.len()
        )
    };
    Ok(RuleVerdict::new(
        Rule::OutcomeRelationTypes,
        violations,
        summary,
    ))
}
