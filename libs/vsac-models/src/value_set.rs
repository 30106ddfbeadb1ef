//! Raw value-set records as described by the retrieval service.

use crate::purpose::{PurposeClauses, PurposeError};
use serde::{Deserialize, Serialize};

/// A value set as returned by the terminology service.
///
/// Records are read-only once parsed; every downstream artifact is derived
/// from this shape without mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribedValueSet {
    /// Registry OID identifying the value set.
    pub id: String,

    /// Human-facing display name.
    pub display_name: String,

    /// Definition version label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Steward organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Definition type (e.g. "Extensional").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_type: Option<String>,

    /// Publication status as reported upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Date of the last revision, verbatim from the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_date: Option<String>,

    /// Semi-structured purpose text; see [`PurposeClauses`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Member concepts, possibly drawn from several code systems.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<Concept>,
}

/// One coded concept inside a value set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Code within its code system.
    pub code: String,

    /// Code system OID or URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_system: Option<String>,

    /// Code system name (e.g. "SNOMEDCT", "ICD10CM").
    pub code_system_name: String,

    /// Code system version the code was drawn from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_system_version: Option<String>,

    /// Display text for the code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl DescribedValueSet {
    /// Parse the purpose text attached to this record.
    pub fn purpose_clauses(&self) -> Result<PurposeClauses, PurposeError> {
        PurposeClauses::parse(self.purpose.as_deref().unwrap_or_default())
    }

    /// Code system names in first-seen concept order, deduplicated.
    pub fn code_system_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for concept in &self.concepts {
            if !names.iter().any(|n| n == &concept.code_system_name) {
                names.push(concept.code_system_name.clone());
            }
        }
        names
    }
}
