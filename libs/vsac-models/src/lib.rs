//! VSAC value-set models
//!
//! Version-agnostic models for the records returned by the VSAC retrieval
//! service, plus the parser for the semi-structured `Purpose` text that
//! rides along with every record.

pub mod purpose;
pub mod value_set;

pub use purpose::{PurposeClauses, PurposeError};
pub use value_set::{Concept, DescribedValueSet};
