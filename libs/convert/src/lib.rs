//! Pure conversions from raw value-set records to output artifacts.
//!
//! Three artifact shapes are supported: a FHIR `ValueSet` resource, an
//! OMOP-style concept-set document, and a denormalized code table. Every
//! converter is a deterministic function of the record plus, where
//! provenance needs it, an access timestamp supplied by the caller.

mod fhir;
mod omop;
mod rows;

pub use fhir::{to_fhir, Compose, ConceptReference, Include, Narrative, ValueSetResource};
pub use omop::{to_omop, Intention, Limitations, OmopConceptSet, Provenance};
pub use rows::{flatten_to_rows, CodeRow, RowProvenance, DEFAULT_CODE_DELIMITER};

use terbium_vsac_models::PurposeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("purpose text: {0}")]
    Purpose(#[from] PurposeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
