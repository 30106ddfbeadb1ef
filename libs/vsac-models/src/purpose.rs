//! Parser for the semi-structured `Purpose` text of a value set.
//!
//! The service packs four labeled fields into one human-authored string:
//!
//! ```text
//! (Clinical Focus: asthma),(Data Element Scope: condition),(Inclusion Criteria: snomed),(Exclusion Criteria: none)
//! ```
//!
//! Clauses are separated by the literal `"),"` and each clause opens with
//! `(<Label>: `. All extraction goes through [`PurposeClauses::parse`], so
//! drift in the upstream punctuation surfaces as one diagnosable error
//! instead of slicing panics at every call site.

use thiserror::Error;

/// Literal separator between purpose clauses.
pub const CLAUSE_DELIMITER: &str = "),";

const LABEL_CLINICAL_FOCUS: &str = "Clinical Focus";
const LABEL_DATA_ELEMENT_SCOPE: &str = "Data Element Scope";
const LABEL_INCLUSION_CRITERIA: &str = "Inclusion Criteria";
const LABEL_EXCLUSION_CRITERIA: &str = "Exclusion Criteria";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurposeError {
    #[error("purpose text is empty")]
    Empty,

    #[error("purpose text has no `({label}: ...)` clause")]
    MissingLabel { label: &'static str },
}

/// The four labeled purpose fields plus the ordered clause list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurposeClauses {
    pub clinical_focus: String,
    pub data_element_scope: String,
    pub inclusion_criteria: String,
    pub exclusion_criteria: String,
    clauses: Vec<String>,
}

impl PurposeClauses {
    /// Split the purpose text into clauses and pull out the four labeled
    /// fields. Labels are matched per clause, wherever the clause sits.
    pub fn parse(text: &str) -> Result<Self, PurposeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PurposeError::Empty);
        }

        let clauses: Vec<String> = text
            .split(CLAUSE_DELIMITER)
            .map(|clause| {
                clause
                    .trim()
                    .trim_start_matches('(')
                    .trim_end_matches(')')
                    .to_string()
            })
            .collect();

        Ok(Self {
            clinical_focus: labeled_field(&clauses, LABEL_CLINICAL_FOCUS)?,
            data_element_scope: labeled_field(&clauses, LABEL_DATA_ELEMENT_SCOPE)?,
            inclusion_criteria: labeled_field(&clauses, LABEL_INCLUSION_CRITERIA)?,
            exclusion_criteria: labeled_field(&clauses, LABEL_EXCLUSION_CRITERIA)?,
            clauses,
        })
    }

    /// Clause texts in document order, outer parentheses stripped.
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    /// Clause at `index`, if present. The tabular flattener addresses
    /// clauses positionally.
    pub fn clause(&self, index: usize) -> Option<&str> {
        self.clauses.get(index).map(String::as_str)
    }
}

fn labeled_field(clauses: &[String], label: &'static str) -> Result<String, PurposeError> {
    let prefix = format!("{label}: ");
    clauses
        .iter()
        .find_map(|clause| clause.strip_prefix(&prefix))
        .map(str::to_string)
        .ok_or(PurposeError::MissingLabel { label })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PURPOSE: &str = "(Clinical Focus: asthma),(Inclusion Criteria: snomed),\
(Data Element Scope: condition),(Exclusion Criteria: none)";

    #[test]
    fn parses_all_four_labels() {
        let parsed = PurposeClauses::parse(PURPOSE).unwrap();
        assert_eq!(parsed.clinical_focus, "asthma");
        assert_eq!(parsed.inclusion_criteria, "snomed");
        assert_eq!(parsed.data_element_scope, "condition");
        assert_eq!(parsed.exclusion_criteria, "none");
    }

    #[test]
    fn keeps_clause_order() {
        let parsed = PurposeClauses::parse(PURPOSE).unwrap();
        assert_eq!(
            parsed.clauses(),
            &[
                "Clinical Focus: asthma",
                "Inclusion Criteria: snomed",
                "Data Element Scope: condition",
                "Exclusion Criteria: none",
            ]
        );
        assert_eq!(parsed.clause(3), Some("Exclusion Criteria: none"));
    }

    #[test]
    fn field_is_substring_up_to_next_delimiter() {
        // Parenthesized text inside a clause survives as long as it is not
        // followed by a comma.
        let text = "(Clinical Focus: guidelines for asthma (2007) update),\
(Data Element Scope: FHIR Condition.code),\
(Inclusion Criteria: SNOMEDCT concepts in \"Asthma SCT\" valuesets.),\
(Exclusion Criteria: none)";
        let parsed = PurposeClauses::parse(text).unwrap();
        assert_eq!(parsed.clinical_focus, "guidelines for asthma (2007) update");
        assert_eq!(parsed.data_element_scope, "FHIR Condition.code");
        assert_eq!(
            parsed.inclusion_criteria,
            "SNOMEDCT concepts in \"Asthma SCT\" valuesets."
        );
    }

    #[test]
    fn missing_label_names_the_label() {
        let err = PurposeClauses::parse("(Clinical Focus: asthma)").unwrap_err();
        assert_eq!(
            err,
            PurposeError::MissingLabel {
                label: "Data Element Scope"
            }
        );
    }

    #[test]
    fn empty_text_is_an_error() {
        assert_eq!(PurposeClauses::parse("  "), Err(PurposeError::Empty));
    }
}
