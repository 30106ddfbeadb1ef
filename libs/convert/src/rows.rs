//! Denormalized one-row-per-(value set, code system) listing.

use crate::ConvertError;
use chrono::NaiveDateTime;
use serde::Serialize;
use terbium_vsac_models::DescribedValueSet;

/// Default separator between codes inside one table cell.
pub const DEFAULT_CODE_DELIMITER: char = '|';

/// One row of the flattened code table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeRow {
    pub name: String,

    #[serde(rename = "nameVSAC")]
    pub name_vsac: String,

    pub oid: String,

    #[serde(rename = "codeSystem")]
    pub code_system: String,

    /// Codes of this row's code system only, delimiter-joined.
    pub codes: String,

    /// Fourth purpose clause.
    pub limitations: String,

    /// First two purpose clauses.
    pub intention: String,

    /// JSON-encoded [`RowProvenance`]; the table cell carries it as text.
    pub provenance: String,
}

/// Provenance sub-structure embedded in each row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowProvenance {
    #[serde(rename = "VSAC Steward")]
    pub steward: String,

    #[serde(rename = "OID")]
    pub oid: String,

    /// Comma-joined names of every code system in the record, not just the
    /// row's own.
    #[serde(rename = "Code System(s)")]
    pub code_systems: String,

    #[serde(rename = "Definition Type")]
    pub definition_type: String,

    #[serde(rename = "Definition Version")]
    pub definition_version: String,

    /// Access timestamp truncated to whole seconds.
    #[serde(rename = "Accessed")]
    pub accessed: String,
}

/// Flatten records into one row per (record, code system) pair.
///
/// Concept grouping preserves first-seen code-system order, so row order is
/// deterministic for a given input.
pub fn flatten_to_rows(
    records: &[DescribedValueSet],
    accessed: NaiveDateTime,
    code_delimiter: char,
) -> Result<Vec<CodeRow>, ConvertError> {
    let accessed_stamp = accessed.format("%Y-%m-%d %H:%M:%S").to_string();
    let delimiter = code_delimiter.to_string();
    let mut rows = Vec::new();

    for record in records {
        let purpose = record.purpose_clauses()?;
        let limitations = purpose.clause(3).unwrap_or_default().to_string();
        let intention = purpose.clauses()[..2].join("; ");

        let code_system_names = record.code_system_names();
        let all_systems = code_system_names.join(",");

        for system in &code_system_names {
            let codes: Vec<&str> = record
                .concepts
                .iter()
                .filter(|concept| &concept.code_system_name == system)
                .map(|concept| concept.code.as_str())
                .collect();

            let provenance = RowProvenance {
                steward: record.source.clone().unwrap_or_default(),
                oid: record.id.clone(),
                code_systems: all_systems.clone(),
                definition_type: record.definition_type.clone().unwrap_or_default(),
                definition_version: record.version.clone().unwrap_or_default(),
                accessed: accessed_stamp.clone(),
            };

            rows.push(CodeRow {
                name: record.display_name.clone(),
                name_vsac: format!("[VSAC] {}", record.display_name),
                oid: record.id.clone(),
                code_system: system.clone(),
                codes: codes.join(&delimiter),
                limitations: limitations.clone(),
                intention: intention.clone(),
                provenance: serde_json::to_string(&provenance)?,
            });
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use terbium_vsac_models::Concept;

    fn concept(code: &str, system: &str) -> Concept {
        Concept {
            code: code.to_string(),
            code_system: None,
            code_system_name: system.to_string(),
            code_system_version: None,
            display_name: None,
        }
    }

    fn record() -> DescribedValueSet {
        DescribedValueSet {
            id: "2.16.840.1.113762.1.4.1034.65".to_string(),
            display_name: "Asthma SCT".to_string(),
            version: Some("20210220".to_string()),
            source: Some("Joint Commission".to_string()),
            definition_type: Some("Extensional".to_string()),
            status: Some("Active".to_string()),
            revision_date: Some("2021-02-19".to_string()),
            purpose: Some("(Clinical Focus: asthma),(Inclusion Criteria: snomed),(Data Element Scope: condition),(Exclusion Criteria: none)".to_string()),
            concepts: vec![
                concept("195967001", "SNOMEDCT"),
                concept("J45.909", "ICD10CM"),
                concept("31387002", "SNOMEDCT"),
            ],
        }
    }

    fn accessed() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 2, 20)
            .unwrap()
            .and_hms_opt(10, 30, 45)
            .unwrap()
    }

    #[test]
    fn one_row_per_code_system_with_only_its_codes() {
        let rows = flatten_to_rows(&[record()], accessed(), '|').unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].code_system, "SNOMEDCT");
        assert_eq!(rows[0].codes, "195967001|31387002");
        assert_eq!(rows[1].code_system, "ICD10CM");
        assert_eq!(rows[1].codes, "J45.909");
    }

    #[test]
    fn names_and_positional_purpose_fields() {
        let rows = flatten_to_rows(&[record()], accessed(), '|').unwrap();
        let row = &rows[0];
        assert_eq!(row.name, "Asthma SCT");
        assert_eq!(row.name_vsac, "[VSAC] Asthma SCT");
        assert_eq!(row.oid, "2.16.840.1.113762.1.4.1034.65");
        assert_eq!(row.limitations, "Exclusion Criteria: none");
        assert_eq!(
            row.intention,
            "Clinical Focus: asthma; Inclusion Criteria: snomed"
        );
    }

    #[test]
    fn provenance_cell_is_json_with_truncated_timestamp() {
        let rows = flatten_to_rows(&[record()], accessed(), '|').unwrap();
        let provenance: serde_json::Value = serde_json::from_str(&rows[0].provenance).unwrap();
        assert_eq!(provenance["VSAC Steward"], "Joint Commission");
        assert_eq!(provenance["OID"], "2.16.840.1.113762.1.4.1034.65");
        assert_eq!(provenance["Code System(s)"], "SNOMEDCT,ICD10CM");
        assert_eq!(provenance["Definition Type"], "Extensional");
        assert_eq!(provenance["Definition Version"], "20210220");
        assert_eq!(provenance["Accessed"], "2021-02-20 10:30:45");
    }

    #[test]
    fn respects_the_code_delimiter() {
        let rows = flatten_to_rows(&[record()], accessed(), ';').unwrap();
        assert_eq!(rows[0].codes, "195967001;31387002");
    }
}
