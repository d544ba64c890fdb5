//! Combination rule: which decision-relation types may coexist between the
//! same ordered pair of decisions.
//!
//! `requiring` may pair with any single other type; two differing
//! non-requiring types on the same ordered pair contradict each other.
//! Two relations of the same type are treated as one relation (their
//! duplication is not this rule's concern).

use cdsf_core::{DecisionRelationType, KnowledgeBase, ModelError};

use crate::report::{Rule, RuleVerdict, Violation};

pub fn decision_relation_combination(kb: &KnowledgeBase) -> Result<RuleVerdict, ModelError> {
    let relations = kb.relations().decision_relations();
    let mut violations = Vec::new();

    for (i, first) in relations.iter().enumerate() {
        for second in &relations[i + 1..] {
            if first.source != second.source || first.target != second.target {
                continue;
            }
            if first.kind == second.kind {
                continue;
            }
            if first.kind == DecisionRelationType::Requiring
                || second.kind == DecisionRelationType::Requiring
            {
                continue;
            }
            violations.push(
                Violation::new(first.source, first.target)
                    .observed(format!("{} together with {}", first.kind, second.kind))
                    .expected("at most one non-requiring type per ordered pair"),
            );
        }
    }

    let summary = if violations.is_empty() {
        "decision relations only combine as requiring plus one other type".to_string()
    } else {
        format!("{} conflicting relation pair(s)", violations.len())
    };
    Ok(RuleVerdict::new(
        Rule::DecisionRelationCombination,
        violations,
        summary,
    ))
}

#[cfg(test)]
mod tests {
    use cdsf_core::{DecisionRelation, DecisionRelationType};

    use super::*;
    use crate::testkb;

    fn add_decision_relation(kb: &mut KnowledgeBase, kind: &str) {
        kb.relations_mut().add_decision_relation(DecisionRelation::new(
            testkb::APP_LAYER,
            testkb::DEPLOYMENT_MODEL,
            DecisionRelationType::parse(kind),
        ));
    }

    #[test]
    fn clean_kb_passes() {
        let kb = testkb::sample();
        assert!(decision_relation_combination(&kb).unwrap().passed);
    }

    #[test]
    fn two_non_requiring_types_conflict() {
        let mut kb = testkb::sample();
        // affecting already exists on this pair; influencing contradicts it
        add_decision_relation(&mut kb, "influencing");

        let verdict = decision_relation_combination(&kb).unwrap();
        assert!(!verdict.passed);
        assert_eq!(verdict.violations[0].source, testkb::APP_LAYER);
        assert_eq!(verdict.violations[0].target, testkb::DEPLOYMENT_MODEL);
    }

    #[test]
    fn requiring_pairs_with_any_other_type() {
        let mut kb = testkb::sample();
        add_decision_relation(&mut kb, "requiring");

        assert!(decision_relation_combination(&kb).unwrap().passed);
    }

    #[test]
    fn duplicate_same_type_is_not_a_combination_conflict() {
        let mut kb = testkb::sample();
        add_decision_relation(&mut kb, "affecting");

        assert!(decision_relation_combination(&kb).unwrap().passed);
    }

    #[test]
    fn opposite_direction_does_not_conflict() {
        // affecting 101 -> 201 and binding 201 -> 101 are distinct ordered
        // pairs; the fixture already holds both and must pass.
        let kb = testkb::sample();
        assert!(decision_relation_combination(&kb).unwrap().passed);
    }
}
