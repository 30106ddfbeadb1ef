//! FHIR `ValueSet` rendition of a raw record.

use serde::Serialize;
use terbium_vsac_models::DescribedValueSet;

const CANONICAL_URL_BASE: &str = "http://cts.nlm.nih.gov/fhir/ValueSet";

/// FHIR ValueSet resource, trimmed to the fields this artifact carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetResource {
    /// Resource type - always "ValueSet"
    pub resource_type: String,

    /// Logical id; the registry OID.
    pub id: String,

    /// Generated narrative wrapping the description.
    pub text: Narrative,

    /// Canonical identifier.
    pub url: String,

    /// Name (computer friendly)
    pub name: String,

    /// Name (human friendly)
    pub title: String,

    /// Publication status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Content logical definition
    pub compose: Compose,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narrative {
    pub status: String,
    pub div: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compose {
    pub include: Vec<Include>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Include {
    /// The system the codes come from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Specific version of the code system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Specific codes from the system. Not populated by this conversion
    /// path; codes ride in the tabular artifact instead.
    pub concept: Vec<ConceptReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptReference {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Map a raw record onto the FHIR resource shape.
///
/// Deterministic: no time-dependent fields, so equal input records yield
/// byte-identical serialized output. The single `compose.include` entry
/// carries the first concept's code system and version with an empty
/// concept list.
pub fn to_fhir(record: &DescribedValueSet) -> ValueSetResource {
    let first_concept = record.concepts.first();
    let description = record.purpose.clone();

    ValueSetResource {
        resource_type: "ValueSet".to_string(),
        id: record.id.clone(),
        text: Narrative {
            status: "generated".to_string(),
            div: format!(
                "<div xmlns=\"http://www.w3.org/1999/xhtml\">{}</div>",
                description.as_deref().unwrap_or_default()
            ),
        },
        url: format!("{CANONICAL_URL_BASE}/{}", record.id),
        name: record.display_name.clone(),
        title: record.display_name.clone(),
        status: record.status.as_ref().map(|s| s.to_lowercase()),
        description,
        compose: Compose {
            include: vec![Include {
                system: first_concept.and_then(|c| c.code_system.clone()),
                version: first_concept.and_then(|c| c.code_system_version.clone()),
                concept: Vec::new(),
            }],
        },
    }
}
