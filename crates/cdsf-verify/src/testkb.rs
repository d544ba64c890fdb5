//! Shared test fixture: a small, fully coherent knowledge base.
//!
//! Two decision points, one decision each, two outcomes per decision.
//! `Select Application Layer` (101) affects `Select Cloud Deployment Model`
//! (201); the reverse binding relation and the full aff/eb cross-products
//! over the four outcomes are present, so every rule passes on the
//! untouched fixture. Tests then poke one defect at a time.

use cdsf_core::{
    Decision, DecisionPoint, DecisionRelation, DecisionRelationType, KnowledgeBase, Outcome,
    OutcomeRelation, OutcomeRelationType,
};

pub const APP_LAYER: u32 = 101;
pub const DEPLOYMENT_MODEL: u32 = 201;

pub const PRESENTATION: u32 = 10101;
pub const BUSINESS: u32 = 10102;
pub const PUBLIC_CLOUD: u32 = 20101;
pub const PRIVATE_CLOUD: u32 = 20102;

/// Build the coherent fixture knowledge base.
pub fn sample() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new("TestKB");

    let mut dp1 = DecisionPoint::new(1, "Define Application Distribution");
    let mut app_layer = Decision::new(APP_LAYER, "Select Application Layer", 1);
    app_layer.add_outcome(Outcome::new(PRESENTATION, "Presentation Layer", APP_LAYER));
    app_layer.add_outcome(Outcome::new(BUSINESS, "Business Layer", APP_LAYER));
    dp1.add_decision(app_layer);
    kb.add_decision_point(dp1);

    let mut dp2 = DecisionPoint::new(2, "Define Cloud Deployment");
    let mut deployment = Decision::new(DEPLOYMENT_MODEL, "Select Cloud Deployment Model", 2);
    deployment.add_outcome(Outcome::new(PUBLIC_CLOUD, "Public Cloud", DEPLOYMENT_MODEL));
    deployment.add_outcome(Outcome::new(PRIVATE_CLOUD, "Private Cloud", DEPLOYMENT_MODEL));
    dp2.add_decision(deployment);
    kb.add_decision_point(dp2);

    let relations = kb.relations_mut();
    relations.add_decision_relation(DecisionRelation::new(
        APP_LAYER,
        DEPLOYMENT_MODEL,
        DecisionRelationType::Affecting,
    ));
    relations.add_decision_relation(DecisionRelation::new(
        DEPLOYMENT_MODEL,
        APP_LAYER,
        DecisionRelationType::Binding,
    ));

    // Full cross-products: aff forward, eb backward.
    for source in [PRESENTATION, BUSINESS] {
        for target in [PUBLIC_CLOUD, PRIVATE_CLOUD] {
            relations.add_outcome_relation(OutcomeRelation::new(
                source,
                target,
                OutcomeRelationType::Affecting,
            ));
            relations.add_outcome_relation(OutcomeRelation::new(
                target,
                source,
                OutcomeRelationType::ExclusiveBinding,
            ));
        }
    }

    kb
}

/// The fixture with the affecting/binding pair replaced by an influencing
/// relation and its `in`/`a` cross-products, for rules about the
/// non-mirrored relation types.
pub fn sample_influencing() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new("TestKB");

    let mut dp1 = DecisionPoint::new(1, "Define Application Distribution");
    let mut app_layer = Decision::new(APP_LAYER, "Select Application Layer", 1);
    app_layer.add_outcome(Outcome::new(PRESENTATION, "Presentation Layer", APP_LAYER));
    app_layer.add_outcome(Outcome::new(BUSINESS, "Business Layer", APP_LAYER));
    dp1.add_decision(app_layer);
    kb.add_decision_point(dp1);

    let mut dp2 = DecisionPoint::new(2, "Define Cloud Deployment");
    let mut deployment = Decision::new(DEPLOYMENT_MODEL, "Select Cloud Deployment Model", 2);
    deployment.add_outcome(Outcome::new(PUBLIC_CLOUD, "Public Cloud", DEPLOYMENT_MODEL));
    deployment.add_outcome(Outcome::new(PRIVATE_CLOUD, "Private Cloud", DEPLOYMENT_MODEL));
    dp2.add_decision(deployment);
    kb.add_decision_point(dp2);

    let relations = kb.relations_mut();
    relations.add_decision_relation(DecisionRelation::new(
        APP_LAYER,
        DEPLOYMENT_MODEL,
        DecisionRelationType::Influencing,
    ));
    relations.add_decision_relation(DecisionRelation::new(
        DEPLOYMENT_MODEL,
        APP_LAYER,
        DecisionRelationType::Influencing,
    ));

    for source in [PRESENTATION, BUSINESS] {
        for target in [PUBLIC_CLOUD, PRIVATE_CLOUD] {
            relations.add_outcome_relation(OutcomeRelation::new(
                source,
                target,
                OutcomeRelationType::Including,
            ));
            relations.add_outcome_relation(OutcomeRelation::new(
                target,
                source,
                OutcomeRelationType::Allowing,
            ));
        }
    }

    kb
}
