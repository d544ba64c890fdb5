//! Builds a [`KnowledgeBase`] from a parsed document.
//!
//! Id assignment follows the embedding convention: decision points are
//! numbered `1..`, the k-th decision of decision point `p` gets
//! `p * 100 + k`, the m-th outcome of decision `d` gets `d * 100 + m`.
//! Decision and outcome labels must be unique knowledge-base-wide because
//! relation endpoints reference them by label.

use std::collections::HashSet;

use thiserror::Error;

use cdsf_core::{
    Decision, DecisionPoint, DecisionRelation, DecisionRelationType, EntityId, KnowledgeBase,
    Outcome, OutcomeRelation, OutcomeRelationType,
};

use crate::document::KbDocument;

/// Failures while turning a document into a knowledge base.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid knowledge-base document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate {kind} label: {label}")]
    DuplicateLabel { kind: &'static str, label: String },

    #[error("unknown decision label in relation: {0}")]
    UnknownDecisionLabel(String),

    #[error("unknown outcome label in relation: {0}")]
    UnknownOutcomeLabel(String),
}

/// Parse a TOML document and build the knowledge base.
pub fn load_str(input: &str) -> Result<KnowledgeBase, LoadError> {
    let doc: KbDocument = toml::from_str(input)?;
    build(doc)
}

/// Build the knowledge base from an already parsed document.
pub fn build(doc: KbDocument) -> Result<KnowledgeBase, LoadError> {
    let mut kb = KnowledgeBase::new(doc.knowledge_base.label);
    kb.description = doc.knowledge_base.description;

    let mut dp_labels = HashSet::new();
    let mut decision_labels = HashSet::new();
    let mut outcome_labels = HashSet::new();

    let mut dp_id: EntityId = 0;
    for dp_doc in doc.decision_points {
        dp_id += 1;
        if !dp_labels.insert(dp_doc.label.clone()) {
            return Err(LoadError::DuplicateLabel {
                kind: "decision point",
                label: dp_doc.label,
            });
        }

        let mut dp = DecisionPoint::new(dp_id, dp_doc.label);
        dp.classification = dp_doc.classification;
        dp.description = dp_doc.description;
        dp.abbreviation = dp_doc.abbreviation;

        let mut decision_id = dp_id * 100;
        for dec_doc in dp_doc.decisions {
            decision_id += 1;
            if !decision_labels.insert(dec_doc.label.clone()) {
                return Err(LoadError::DuplicateLabel {
                    kind: "decision",
                    label: dec_doc.label,
                });
            }

            let mut decision = Decision::new(decision_id, dec_doc.label, dp_id);
            decision.classification = dec_doc.classification;
            decision.description = dec_doc.description;
            decision.abbreviation = dec_doc.abbreviation;

            let mut outcome_id = decision_id * 100;
            for out_doc in dec_doc.outcomes {
                outcome_id += 1;
                if !outcome_labels.insert(out_doc.label.clone()) {
                    return Err(LoadError::DuplicateLabel {
                        kind: "outcome",
                        label: out_doc.label,
                    });
                }

                let mut outcome = Outcome::new(outcome_id, out_doc.label, decision_id);
                outcome.description = out_doc.description;
                outcome.abbreviation = out_doc.abbreviation;
                decision.add_outcome(outcome);
            }
            dp.add_decision(decision);
        }
        kb.add_decision_point(dp);
    }

    for rel_doc in doc.decision_relations {
        let source = kb
            .decision_by_label(&rel_doc.source)
            .ok_or_else(|| LoadError::UnknownDecisionLabel(rel_doc.source.clone()))?
            .id;
        let target = kb
            .decision_by_label(&rel_doc.target)
            .ok_or_else(|| LoadError::UnknownDecisionLabel(rel_doc.target.clone()))?
            .id;
        let mut relation =
            DecisionRelation::new(source, target, DecisionRelationType::parse(&rel_doc.kind));
        if let Some(explanation) = rel_doc.explanation {
            relation = relation.with_explanation(explanation);
        }
        kb.relations_mut().add_decision_relation(relation);
    }

    for rel_doc in doc.outcome_relations {
        let source = kb
            .outcome_by_label(&rel_doc.source)
            .ok_or_else(|| LoadError::UnknownOutcomeLabel(rel_doc.source.clone()))?
            .id;
        let target = kb
            .outcome_by_label(&rel_doc.target)
            .ok_or_else(|| LoadError::UnknownOutcomeLabel(rel_doc.target.clone()))?
            .id;
        let mut relation =
            OutcomeRelation::new(source, target, OutcomeRelationType::parse(&rel_doc.kind));
        if let Some(explanation) = rel_doc.explanation {
            relation = relation.with_explanation(explanation);
        }
        kb.relations_mut().add_outcome_relation(relation);
    }

    kb.sort_entities();
    Ok(kb)
}
