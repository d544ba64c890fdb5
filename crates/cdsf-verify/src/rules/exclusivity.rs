//! Exclusivity rules: outcomes of one decision are alternatives, so they
//! never relate to themselves or to each other, and any two outcomes carry
//! at most one edge per direction.

use std::collections::HashSet;

use cdsf_core::{EntityId, KnowledgeBase, ModelError};

use crate::report::{Rule, RuleVerdict, Violation};

/// No outcome relates to itself or to an outcome of the same decision.
pub fn xor_outcomes(kb: &KnowledgeBase) -> Result<RuleVerdict, ModelError> {
    let mut violations = Vec::new();

    for rel in kb.relations().outcome_relations() {
        let source = kb.try_outcome(rel.source)?;
        if rel.source == rel.target {
            violations.push(
                Violation::new(rel.source, rel.target).observed("relation to itself"),
            );
            continue;
        }
        let target = kb.try_outcome(rel.target)?;
        if source.parent == target.parent {
            violations.push(
                Violation::new(rel.source, rel.target)
                    .observed("relation to an outcome of the same decision"),
            );
        }
    }

    let summary = if violations.is_empty() {
        "no outcome relates to itself or to a sibling".to_string()
    } else {
        format!("{} self or sibling relation(s)", violations.len())
    };
    Ok(RuleVerdict::new(Rule::XorOutcomes, violations, summary))
}

/// At most one directed relation between any two outcomes.
pub fn single_outcome_relation(kb: &KnowledgeBase) -> Result<RuleVerdict, ModelError> {
    let mut seen: HashSet<(EntityId, EntityId)> = HashSet::new();
    let mut violations = Vec::new();

    for rel in kb.relations().outcome_relations() {
        if !seen.insert((rel.source, rel.target)) {
            violations.push(
                Violation::new(rel.source, rel.target)
                    .observed(rel.kind.as_str())
                    .expected("a single relation per direction"),
            );
        }
    }

    let summary = if violations.is_empty() {
        "every outcome pair carries at most one relation per direction".to_string()
    } else {
        format!("{} parallel edge(s)", violations.len())
    };
    Ok(RuleVerdict::new(
        Rule::SingleOutcomeRelation,
        violations,
        summary,
    ))
}

#[cfg(test)]
mod tests {
    use cdsf_core::{OutcomeRelation, OutcomeRelationType};

    use super::*;
    use crate::testkb;

    fn add_outcome(kb: &mut KnowledgeBase, source: u32, target: u32, kind: &str) {
        kb.relations_mut().add_outcome_relation(OutcomeRelation::new(
            source,
            target,
            OutcomeRelationType::parse(kind),
        ));
    }

    #[test]
    fn clean_kb_passes_both_rules() {
        let kb = testkb::sample();
        assert!(xor_outcomes(&kb).unwrap().passed);
        assert!(single_outcome_relation(&kb).unwrap().passed);
    }

    #[test]
    fn self_relation_fails_xor() {
        let mut kb = testkb::sample();
        add_outcome(&mut kb, testkb::PRESENTATION, testkb::PRESENTATION, "a");

        let verdict = xor_outcomes(&kb).unwrap();
        assert!(!verdict.passed);
        assert_eq!(
            verdict.violations[0].observed.as_deref(),
            Some("relation to itself")
        );
    }

    #[test]
    fn sibling_relation_fails_xor() {
        let mut kb = testkb::sample();
        add_outcome(&mut kb, testkb::PRESENTATION, testkb::BUSINESS, "a");

        let verdict = xor_outcomes(&kb).unwrap();
        assert!(!verdict.passed);
        assert_eq!(verdict.violations.len(), 1);
    }

    #[test]
    fn cross_decision_relation_passes_xor() {
        // the fixture relates outcomes across the two decisions only
        let kb = testkb::sample();
        assert!(xor_outcomes(&kb).unwrap().passed);
    }

    #[test]
    fn unknown_outcome_id_aborts_xor() {
        let mut kb = testkb::sample();
        add_outcome(&mut kb, testkb::PRESENTATION, 42, "a");

        assert_eq!(
            xor_outcomes(&kb).unwrap_err(),
            ModelError::UnknownOutcome(42)
        );
    }

    #[test]
    fn parallel_edges_fail_single_rule() {
        let mut kb = testkb::sample();
        // second edge on an existing pair, different type
        add_outcome(&mut kb, testkb::PRESENTATION, testkb::PUBLIC_CLOUD, "ex");

        let verdict = single_outcome_relation(&kb).unwrap();
        assert!(!verdict.passed);
        assert_eq!(verdict.violations.len(), 1);
        assert_eq!(verdict.violations[0].source, testkb::PRESENTATION);
        assert_eq!(verdict.violations[0].target, testkb::PUBLIC_CLOUD);
    }

    #[test]
    fn same_pair_opposite_directions_passes_single_rule() {
        let kb = testkb::sample();
        // aff forward and eb backward share endpoints but not direction
        assert!(single_outcome_relation(&kb).unwrap().passed);
    }
}
