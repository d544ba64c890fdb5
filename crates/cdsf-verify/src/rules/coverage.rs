//! Correspondence rules between the decision graph and the outcome graph.
//!
//! A non-requiring decision relation governs the full cross-product of its
//! decisions' outcomes: every outcome pair must be related (amount), the
//! outcome relation types must agree with the governing decision relation
//! (type), and conversely no outcome relation may exist without a
//! supporting decision relation between the parent decisions.

use cdsf_core::{
    DecisionRelationType, KnowledgeBase, ModelError, OutcomeRelation, OutcomeRelationType,
};

use crate::report::{Rule, RuleVerdict, Violation};

/// Between two non-requiring-related decisions, exactly
/// `|outcomes(source)| x |outcomes(target)|` outcome relations must cover
/// the cross-product.
pub fn outcome_amount_per_decision_relation(
    kb: &KnowledgeBase,
) -> Result<RuleVerdict, ModelError> {
    let mut violations = Vec::new();

    for rel in kb.relations().decision_relations() {
        if rel.kind == DecisionRelationType::Requiring {
            continue;
        }
        let source = kb.try_decision(rel.source)?;
        let target = kb.try_decision(rel.target)?;

        let expected = source.outcomes.len() * target.outcomes.len();
        let mut found = 0usize;
        for out_source in &source.outcomes {
            for out_target in &target.outcomes {
                found += kb
                    .relations()
                    .outcome_relations()
                    .iter()
                    .filter(|o| o.source == out_source.id && o.target == out_target.id)
                    .count();
            }
        }

        if found != expected {
            violations.push(
                Violation::new(rel.source, rel.target)
                    .observed(format!("{found} outcome relation(s) in the cross-product"))
                    .expected(format!("exactly {expected}")),
            );
        }
    }

    let summary = if violations.is_empty() {
        "every non-requiring decision relation is fully covered by outcome relations".to_string()
    } else {
        format!(
            "{} decision relation(s) with incomplete or surplus outcome coverage",
            violations.len()
        )
    };
    Ok(RuleVerdict::new(
        Rule::OutcomeAmountPerDecisionRelation,
        violations,
        summary,
    ))
}

/// Outcome relations inside a governed cross-product must agree with the
/// decision relation's type: affecting => aff, binding => eb, influencing
/// => anything but aff/eb.
pub fn outcome_type_per_decision_relation(kb: &KnowledgeBase) -> Result<RuleVerdict, ModelError> {
    let mut violations = Vec::new();

    for rel in kb.relations().decision_relations() {
        if rel.kind == DecisionRelationType::Requiring {
            continue;
        }
        let source = kb.try_decision(rel.source)?;
        let target = kb.try_decision(rel.target)?;

        for out_source in &source.outcomes {
            for out_target in &target.outcomes {
                let governed = kb
                    .relations()
                    .outcome_relations()
                    .iter()
                    .filter(|o| o.source == out_source.id && o.target == out_target.id);
                for out_rel in governed {
                    if let Some(expected) = mismatch(&rel.kind, out_rel) {
                        violations.push(
                            Violation::new(out_rel.source, out_rel.target)
                                .observed(out_rel.kind.as_str())
                                .expected(format!("{expected} (decision relation is {})", rel.kind)),
                        );
                    }
                }
            }
        }
    }

    let summary = if violations.is_empty() {
        "all outcome relations agree with their governing decision relation".to_string()
    } else {
        format!(
            "{} outcome relation(s) disagree with their governing decision relation",
            violations.len()
        )
    };
    Ok(RuleVerdict::new(
        Rule::OutcomeTypePerDecisionRelation,
        violations,
        summary,
    ))
}

/// What the governing decision relation requires of `out_rel`, when the
/// observed type does not satisfy it.
fn mismatch(decision_kind: &DecisionRelationType, out_rel: &OutcomeRelation) -> Option<&'static str> {
    match decision_kind {
        DecisionRelationType::Affecting => {
            (out_rel.kind != OutcomeRelationType::Affecting).then_some("aff")
        }
        DecisionRelationType::Binding => {
            (out_rel.kind != OutcomeRelationType::ExclusiveBinding).then_some("eb")
        }
        DecisionRelationType::Influencing => matches!(
            out_rel.kind,
            OutcomeRelationType::Affecting | OutcomeRelationType::ExclusiveBinding
        )
        .then_some("in, ex or a"),
        // requiring is skipped by the callers; unknown types are the
        // type-closure rule's concern
        _ => None,
    }
}

/// Every outcome relation needs a decision relation between the parent
/// decisions of its endpoints.
pub fn decision_support_for_outcome_relation(
    kb: &KnowledgeBase,
) -> Result<RuleVerdict, ModelError> {
    let mut violations = Vec::new();

    for out_rel in kb.relations().outcome_relations() {
        let source_parent = kb.try_outcome(out_rel.source)?.parent;
        let target_parent = kb.try_outcome(out_rel.target)?.parent;

        let supported = kb
            .relations()
            .decision_relations()
            .iter()
            .any(|d| d.source == source_parent && d.target == target_parent);
        if !supported {
            violations.push(
                Violation::new(out_rel.source, out_rel.target)
                    .observed(out_rel.kind.as_str())
                    .expected(format!(
                        "a decision relation {source_parent} -> {target_parent}"
                    )),
            );
        }
    }

    let summary = if violations.is_empty() {
        "every outcome relation is backed by a decision relation".to_string()
    } else {
        format!("{} unsupported outcome relation(s)", violations.len())
    };
    Ok(RuleVerdict::new(
        Rule::DecisionSupportForOutcomeRelation,
        violations,
        summary,
    ))
}
