//! Aggregate counts over a knowledge base.
//!
//! Collected in a single pure pass; nothing here mutates the model or
//! keeps state between calls.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kb::KnowledgeBase;
use crate::relation::{DecisionRelationType, OutcomeRelationType};

/// Decision-relation counts by type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRelationCounts {
    pub requiring: usize,
    pub influencing: usize,
    pub affecting: usize,
    pub binding: usize,
    pub unknown: usize,
}

impl DecisionRelationCounts {
    pub fn total(&self) -> usize {
        self.requiring + self.influencing + self.affecting + self.binding + self.unknown
    }
}

/// Outcome-relation counts by type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRelationCounts {
    pub including: usize,
    pub excluding: usize,
    pub allowing: usize,
    pub affecting: usize,
    pub exclusive_binding: usize,
    pub unknown: usize,
}

impl OutcomeRelationCounts {
    pub fn total(&self) -> usize {
        self.including
            + self.excluding
            + self.allowing
            + self.affecting
            + self.exclusive_binding
            + self.unknown
    }
}

/// Summary statistics for a knowledge base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseStats {
    pub decision_points: usize,
    pub decisions: usize,
    pub outcomes: usize,
    pub decision_relations: DecisionRelationCounts,
    pub outcome_relations: OutcomeRelationCounts,
}

impl KnowledgeBaseStats {
    /// Collect statistics from a knowledge base.
    pub fn collect(kb: &KnowledgeBase) -> Self {
        let mut stats = Self {
            decision_points: kb.decision_points().len(),
            decisions: kb.decisions().count(),
            outcomes: kb.outcomes().count(),
            ..Self::default()
        };

        for rel in kb.relations().decision_relations() {
            match rel.kind {
                DecisionRelationType::Requiring => stats.decision_relations.requiring += 1,
                DecisionRelationType::Influencing => stats.decision_relations.influencing += 1,
                DecisionRelationType::Affecting => stats.decision_relations.affecting += 1,
                DecisionRelationType::Binding => stats.decision_relations.binding += 1,
                DecisionRelationType::Unknown(_) => stats.decision_relations.unknown += 1,
            }
        }

        for rel in kb.relations().outcome_relations() {
            match rel.kind {
                OutcomeRelationType::Including => stats.outcome_relations.including += 1,
                OutcomeRelationType::Excluding => stats.outcome_relations.excluding += 1,
                OutcomeRelationType::Allowing => stats.outcome_relations.allowing += 1,
                OutcomeRelationType::Affecting => stats.outcome_relations.affecting += 1,
                OutcomeRelationType::ExclusiveBinding => {
                    stats.outcome_relations.exclusive_binding += 1
                }
                OutcomeRelationType::Unknown(_) => stats.outcome_relations.unknown += 1,
            }
        }

        stats
    }
}

impl fmt::Display for KnowledgeBaseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decision points: {}", self.decision_points)?;
        writeln!(f, "Decisions:       {}", self.decisions)?;
        writeln!(f, "Outcomes:        {}", self.outcomes)?;
        writeln!(
            f,
            "Decision relations: {} (requiring {}, influencing {}, affecting {}, binding {})",
            self.decision_relations.total(),
            self.decision_relations.requiring,
            self.decision_relations.influencing,
            self.decision_relations.affecting,
            self.decision_relations.binding,
        )?;
        writeln!(
            f,
            "Outcome relations:  {} (in {}, ex {}, a {}, aff {}, eb {})",
            self.outcome_relations.total(),
            self.outcome_relations.including,
            self.outcome_relations.excluding,
            self.outcome_relations.allowing,
            self.outcome_relations.affecting,
            self.outcome_relations.exclusive_binding,
        )?;
        if self.decision_relations.unknown + self.outcome_relations.unknown > 0 {
            writeln!(
                f,
                "Unrecognized relation types: {} decision, {} outcome",
                self.decision_relations.unknown, self.outcome_relations.unknown,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Decision, DecisionPoint, Outcome};
    use crate::relation::{DecisionRelation, OutcomeRelation};

    #[test]
    fn counts_agree_with_model() {
        let mut kb = KnowledgeBase::new("kb");
        let mut dp = DecisionPoint::new(1, "dp");
        let mut d1 = Decision::new(101, "d1", 1);
        d1.add_outcome(Outcome::new(10101, "o1", 101));
        d1.add_outcome(Outcome::new(10102, "o2", 101));
        let d2 = Decision::new(102, "d2", 1);
        dp.add_decision(d1);
        dp.add_decision(d2);
        kb.add_decision_point(dp);

        kb.relations_mut().add_decision_relation(DecisionRelation::new(
            101,
            102,
            DecisionRelationType::Influencing,
        ));
        kb.relations_mut().add_decision_relation(DecisionRelation::new(
            101,
            102,
            DecisionRelationType::Requiring,
        ));
        kb.relations_mut().add_outcome_relation(OutcomeRelation::new(
            10101,
            10102,
            OutcomeRelationType::Allowing,
        ));

        let stats = KnowledgeBaseStats::collect(&kb);
        assert_eq!(stats.decision_points, 1);
        assert_eq!(stats.decisions, 2);
        assert_eq!(stats.outcomes, 2);
        assert_eq!(stats.decision_relations.influencing, 1);
        assert_eq!(stats.decision_relations.requiring, 1);
        assert_eq!(stats.decision_relations.total(), 2);
        assert_eq!(stats.outcome_relations.allowing, 1);
        assert_eq!(stats.outcome_relations.total(), 1);
    }

    #[test]
    fn unknown_types_are_counted_separately() {
        let mut kb = KnowledgeBase::new("kb");
        kb.relations_mut().add_decision_relation(DecisionRelation::new(
            101,
            102,
            DecisionRelationType::parse("test"),
        ));

        let stats = KnowledgeBaseStats::collect(&kb);
        assert_eq!(stats.decision_relations.unknown, 1);
        let rendered = stats.to_string();
        assert!(rendered.contains("Unrecognized relation types"));
    }

    #[test]
    fn empty_kb_renders() {
        let stats = KnowledgeBaseStats::collect(&KnowledgeBase::new("empty"));
        let rendered = stats.to_string();
        assert!(rendered.contains("Decision points: 0"));
        assert!(!rendered.contains("Unrecognized"));
    }
}
