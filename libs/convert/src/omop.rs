//! OMOP-style concept-set rendition of a raw record.
//!
//! Field names follow the concept-set layout of the OMOP tooling this
//! artifact feeds, hence the spaced `"Concept Set Name"`-style keys.

use crate::ConvertError;
use chrono::NaiveDateTime;
use serde::Serialize;
use terbium_vsac_models::DescribedValueSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OmopConceptSet {
    #[serde(rename = "Concept Set Name")]
    pub concept_set_name: String,

    /// Conversion date and upstream revision, e.g.
    /// `vsacToOmopConversion:2021/02/20; vsacRevision:2021-02-19`.
    #[serde(rename = "Created At")]
    pub created_at: String,

    #[serde(rename = "Created By")]
    pub created_by: String,

    #[serde(rename = "Intention")]
    pub intention: Intention,

    #[serde(rename = "Limitations")]
    pub limitations: Limitations,

    #[serde(rename = "Provenance")]
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intention {
    #[serde(rename = "Clinical Focus")]
    pub clinical_focus: String,

    #[serde(rename = "Inclusion Criteria")]
    pub inclusion_criteria: String,

    #[serde(rename = "Data Element Scope")]
    pub data_element_scope: String,

    #[serde(rename = "Exclusion Criteria")]
    pub exclusion_criteria: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Limitations {
    #[serde(rename = "Exclusion Criteria")]
    pub exclusion_criteria: String,

    /// Upstream note attached by the registry; absent for most sets.
    #[serde(rename = "VSAC Note")]
    pub vsac_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provenance {
    #[serde(rename = "VSAC Steward")]
    pub steward: String,

    #[serde(rename = "OID")]
    pub oid: String,

    #[serde(rename = "Code System(s)")]
    pub code_systems: Vec<String>,

    #[serde(rename = "Definition Type")]
    pub definition_type: String,

    #[serde(rename = "Definition Version")]
    pub definition_version: String,
}

/// Map a raw record onto the OMOP concept-set shape.
///
/// The access timestamp is an input so the conversion stays a pure
/// function of its arguments. Malformed purpose text fails here, once,
/// instead of at each field extraction.
pub fn to_omop(
    record: &DescribedValueSet,
    accessed: NaiveDateTime,
) -> Result<OmopConceptSet, ConvertError> {
    let purpose = record.purpose_clauses()?;

    Ok(OmopConceptSet {
        concept_set_name: record.display_name.clone(),
        created_at: format!(
            "vsacToOmopConversion:{}; vsacRevision:{}",
            accessed.format("%Y/%m/%d"),
            record.revision_date.as_deref().unwrap_or_default()
        ),
        created_by: record.source.clone().unwrap_or_default(),
        intention: Intention {
            clinical_focus: purpose.clinical_focus.clone(),
            inclusion_criteria: purpose.inclusion_criteria.clone(),
            data_element_scope: purpose.data_element_scope.clone(),
            exclusion_criteria: purpose.exclusion_criteria.clone(),
        },
        limitations: Limitations {
            exclusion_criteria: purpose.exclusion_criteria,
            vsac_note: None,
        },
        provenance: Provenance {
            steward: record.source.clone().unwrap_or_default(),
            oid: record.id.clone(),
            code_systems: record.code_system_names(),
            definition_type: record.definition_type.clone().unwrap_or_default(),
            definition_version: record.version.clone().unwrap_or_default(),
        },
    })
}
