//! Mirror rules: affecting/binding are mutual inverses, and in/a edges may
//! not face a contradictory reverse edge.

use cdsf_core::{
    DecisionRelation, DecisionRelationType, KnowledgeBase, ModelError, OutcomeRelation,
    OutcomeRelationType,
};

use crate::report::{Rule, RuleVerdict, Violation};

/// Forward decision relations of `forward` kind lacking a reverse relation
/// of `reverse` kind.
fn unmirrored_decisions(
    relations: &[DecisionRelation],
    forward: DecisionRelationType,
    reverse: DecisionRelationType,
) -> Vec<Violation> {
    relations
        .iter()
        .filter(|rel| rel.kind == forward)
        .filter(|rel| {
            !relations
                .iter()
                .any(|c| c.source == rel.target && c.target == rel.source && c.kind == reverse)
        })
        .map(|rel| {
            Violation::new(rel.source, rel.target)
                .observed(forward.as_str())
                .expected(format!("{reverse} relation {} -> {}", rel.target, rel.source))
        })
        .collect()
}

/// Forward outcome relations of `forward` kind lacking a reverse relation
/// of `reverse` kind.
fn unmirrored_outcomes(
    relations: &[OutcomeRelation],
    forward: OutcomeRelationType,
    reverse: OutcomeRelationType,
) -> Vec<Violation> {
    relations
        .iter()
        .filter(|rel| rel.kind == forward)
        .filter(|rel| {
            !relations
                .iter()
                .any(|c| c.source == rel.target && c.target == rel.source && c.kind == reverse)
        })
        .map(|rel| {
            Violation::new(rel.source, rel.target)
                .observed(forward.as_str())
                .expected(format!("{reverse} relation {} -> {}", rel.target, rel.source))
        })
        .collect()
}

/// Every affecting decision relation must be mirrored by a binding relation
/// in the opposite direction, and vice versa.
pub fn affecting_binding_symmetry_decisions(
    kb: &KnowledgeBase,
) -> Result<RuleVerdict, ModelError> {
    let relations = kb.relations().decision_relations();
    let mut violations = unmirrored_decisions(
        relations,
        DecisionRelationType::Affecting,
        DecisionRelationType::Binding,
    );
    violations.extend(unmirrored_decisions(
        relations,
        DecisionRelationType::Binding,
        DecisionRelationType::Affecting,
    ));

    let summary = if violations.is_empty() {
        "affecting and binding decision relations mirror each other".to_string()
    } else {
        format!("{} unmirrored decision relation(s)", violations.len())
    };
    Ok(RuleVerdict::new(
        Rule::AffectingBindingSymmetryDecisions,
        violations,
        summary,
    ))
}

/// Every aff outcome relation must be mirrored by an eb relation in the
/// opposite direction, and vice versa.
pub fn affecting_binding_symmetry_outcomes(
    kb: &KnowledgeBase,
) -> Result<RuleVerdict, ModelError> {
    let relations = kb.relations().outcome_relations();
    let mut violations = unmirrored_outcomes(
        relations,
        OutcomeRelationType::Affecting,
        OutcomeRelationType::ExclusiveBinding,
    );
    violations.extend(unmirrored_outcomes(
        relations,
        OutcomeRelationType::ExclusiveBinding,
        OutcomeRelationType::Affecting,
    ));

    let summary = if violations.is_empty() {
        "aff and eb outcome relations mirror each other".to_string()
    } else {
        format!("{} unmirrored outcome relation(s)", violations.len())
    };
    Ok(RuleVerdict::new(
        Rule::AffectingBindingSymmetryOutcomes,
        violations,
        summary,
    ))
}

/// For an in/a outcome relation, an existing reverse edge must itself be in
/// or a. A missing reverse edge is left unconstrained; the cross-product
/// amount rule already accounts for it when a decision relation governs the
/// pair.
pub fn inclusion_allowance_reciprocity(kb: &KnowledgeBase) -> Result<RuleVerdict, ModelError> {
    let relations = kb.relations().outcome_relations();
    let mut violations = Vec::new();

    for rel in relations {
        if !matches!(
            rel.kind,
            OutcomeRelationType::Including | OutcomeRelationType::Allowing
        ) {
            continue;
        }
        for reverse in relations
            .iter()
            .filter(|c| c.source == rel.target && c.target == rel.source)
        {
            if !matches!(
                reverse.kind,
                OutcomeRelationType::Including | OutcomeRelationType::Allowing
            ) {
                violations.push(
                    Violation::new(rel.source, rel.target)
                        .observed(format!("{} with reverse {}", rel.kind, reverse.kind))
                        .expected("reverse relation typed in or a"),
                );
            }
        }
    }

    let summary = if violations.is_empty() {
        "no in/a outcome relation faces a contradictory reverse edge".to_string()
    } else {
        format!("{} contradictory reverse edge(s)", violations.len())
    };
    Ok(RuleVerdict::new(
        Rule::InclusionAllowanceReciprocity,
        violations,
        summary,
    ))
}
