//! JSON export of a validated knowledge base.
//!
//! The document carries the entity tree under `decisionTree` (nested
//! `children` arrays) and the two relation families as flat, id-sorted
//! link arrays. Callers are expected to run the consistency rules first;
//! this module serializes whatever it is given.

use serde::Serialize;

use cdsf_core::{DecisionRelation, EntityId, KnowledgeBase, OutcomeRelation};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    decision_tree: &'a KnowledgeBase,
    links_array: Vec<LinkDoc<'a>>,
    links_array_outcomes: Vec<LinkDoc<'a>>,
}

/// One relation in the export, tagged with its family.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkDoc<'a> {
    source: EntityId,
    target: EntityId,
    #[serde(rename = "type")]
    kind: &'a str,
    relation_group: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<&'a str>,
}

impl<'a> From<&'a DecisionRelation> for LinkDoc<'a> {
    fn from(rel: &'a DecisionRelation) -> Self {
        Self {
            source: rel.source,
            target: rel.target,
            kind: rel.kind.as_str(),
            relation_group: rel.group().as_str(),
            explanation: rel.explanation.as_deref(),
        }
    }
}

impl<'a> From<&'a OutcomeRelation> for LinkDoc<'a> {
    fn from(rel: &'a OutcomeRelation) -> Self {
        Self {
            source: rel.source,
            target: rel.target,
            kind: rel.kind.as_str(),
            relation_group: rel.group().as_str(),
            explanation: rel.explanation.as_deref(),
        }
    }
}

/// Serialize a knowledge base as a pretty-printed JSON document.
pub fn to_json_string(kb: &KnowledgeBase) -> Result<String, serde_json::Error> {
    let doc = ExportDocument {
        decision_tree: kb,
        links_array: kb
            .relations()
            .decision_relations()
            .iter()
            .map(LinkDoc::from)
            .collect(),
        links_array_outcomes: kb
            .relations()
            .outcome_relations()
            .iter()
            .map(LinkDoc::from)
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::load_str;

    const SAMPLE: &str = r#"
        [[decision_points]]
        label = "Define Application Distribution"

        [[decision_points.decisions]]
        label = "Select Application Layer"

        [[decision_points.decisions.outcomes]]
        label = "Presentation Layer"

        [[decision_points.decisions.outcomes]]
        label = "Business Layer"

        [[decision_relations]]
        source = "Select Application Layer"
        target = "Select Application Layer"
        type = "requiring"
        "#;

    #[test]
    fn export_shape() {
        let kb = load_str(SAMPLE).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&to_json_string(&kb).unwrap()).unwrap();

        assert_eq!(json["decisionTree"]["label"], "CloudDSF+");
        assert_eq!(json["decisionTree"]["children"][0]["id"], 1);
        assert_eq!(
            json["decisionTree"]["children"][0]["children"][0]["children"][0]["id"],
            10101
        );
        assert_eq!(json["linksArray"][0]["type"], "requiring");
        assert_eq!(json["linksArray"][0]["relationGroup"], "decRel");
        assert_eq!(json["linksArrayOutcomes"], serde_json::json!([]));
    }

    #[test]
    fn explanations_are_omitted_when_absent() {
        let kb = load_str(SAMPLE).unwrap();
        let text = to_json_string(&kb).unwrap();
        assert!(!text.contains("explanation"));
    }

    #[test]
    fn link_arrays_are_id_sorted() {
        let doc = r#"
            [[decision_points]]
            label = "dp"

            [[decision_points.decisions]]
            label = "b"

            [[decision_points.decisions]]
            label = "a"

            [[decision_relations]]
            source = "b"
            target = "a"
            type = "requiring"

            [[decision_relations]]
            source = "a"
            target = "b"
            type = "requiring"
            "#;
        let kb = load_str(doc).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&to_json_string(&kb).unwrap()).unwrap();

        assert_eq!(json["linksArray"][0]["source"], 101);
        assert_eq!(json["linksArray"][1]["source"], 102);
    }
}
