//! SVS `RetrieveMultipleValueSets` response parsing.
//!
//! The retrieval service answers with a namespaced XML document rooted at
//! `RetrieveMultipleValueSetsResponse`, one `DescribedValueSet` element per
//! requested value set. Matching is on local tag names only because the
//! namespace prefix (`ns0:` and friends) varies between deployments.

use roxmltree::{Document, Node};
use terbium_vsac_models::{Concept, DescribedValueSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvsError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("missing {0} element")]
    MissingElement(&'static str),

    #[error("missing attribute {attribute} on {element}")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
}

/// Parse a retrieval response body into raw value-set records.
pub fn parse_retrieve_multiple_value_sets(xml: &str) -> Result<Vec<DescribedValueSet>, SvsError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    if root.tag_name().name() != "RetrieveMultipleValueSetsResponse" {
        return Err(SvsError::MissingElement("RetrieveMultipleValueSetsResponse"));
    }

    root.children()
        .filter(|n| n.is_element() && n.tag_name().name() == "DescribedValueSet")
        .map(parse_described_value_set)
        .collect()
}

fn parse_described_value_set(node: Node) -> Result<DescribedValueSet, SvsError> {
    let mut value_set = DescribedValueSet {
        id: required_attribute(&node, "DescribedValueSet", "ID")?,
        display_name: required_attribute(&node, "DescribedValueSet", "displayName")?,
        version: node.attribute("version").map(str::to_string),
        source: None,
        definition_type: None,
        status: None,
        revision_date: None,
        purpose: None,
        concepts: Vec::new(),
    };

    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "Source" => value_set.source = element_text(&child),
            "Purpose" => value_set.purpose = element_text(&child),
            "Type" => value_set.definition_type = element_text(&child),
            "Status" => value_set.status = element_text(&child),
            "RevisionDate" => value_set.revision_date = element_text(&child),
            "ConceptList" => value_set.concepts = parse_concept_list(&child)?,
            _ => {}
        }
    }

    Ok(value_set)
}

fn parse_concept_list(node: &Node) -> Result<Vec<Concept>, SvsError> {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Concept")
        .map(|concept| {
            Ok(Concept {
                code: required_attribute(&concept, "Concept", "code")?,
                code_system: concept.attribute("codeSystem").map(str::to_string),
                code_system_name: required_attribute(&concept, "Concept", "codeSystemName")?,
                code_system_version: concept.attribute("codeSystemVersion").map(str::to_string),
                display_name: concept.attribute("displayName").map(str::to_string),
            })
        })
        .collect()
}

fn required_attribute(
    node: &Node,
    element: &'static str,
    attribute: &'static str,
) -> Result<String, SvsError> {
    node.attribute(attribute)
        .map(str::to_string)
        .ok_or(SvsError::MissingAttribute { element, attribute })
}

fn element_text(node: &Node) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
