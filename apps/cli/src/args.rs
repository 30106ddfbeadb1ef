use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "terbium")]
#[command(about = "Fetch VSAC value sets and convert them to FHIR, OMOP, or tabular artifacts")]
pub struct Args {
    /// CSV file listing the value-set OIDs to retrieve (column: OID).
    #[arg(long)]
    pub oid_file: PathBuf,

    /// Artifact to produce.
    #[arg(long, value_enum, default_value_t = Artifact::Codes)]
    pub artifact: Artifact,

    /// UMLS API key. Falls back to the UMLS_API_KEY environment variable.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Output directory; artifacts land in a date-stamped subdirectory.
    #[arg(long, default_value = "output")]
    pub out_dir: PathBuf,

    /// Directory holding the fetched-records snapshot.
    #[arg(long, default_value = "cache")]
    pub cache_dir: PathBuf,

    /// Skip the snapshot cache and always fetch.
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,

    /// Field delimiter for the codes table (use a tab for .tsv output).
    #[arg(long, default_value_t = ',')]
    pub field_delimiter: char,

    /// Delimiter joining codes within one table cell.
    #[arg(long, default_value_t = terbium_convert::DEFAULT_CODE_DELIMITER)]
    pub code_delimiter: char,

    /// Indentation for JSON artifacts; 0 writes compact JSON.
    #[arg(long, default_value_t = 4)]
    pub json_indent: usize,

    /// UTS authentication base URL.
    #[arg(long, default_value = "https://utslogin.nlm.nih.gov")]
    pub uts_base_url: String,

    /// VSAC retrieval base URL.
    #[arg(long, default_value = "https://vsac.nlm.nih.gov")]
    pub vsac_base_url: String,
}

/// Output artifact choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Artifact {
    /// One FHIR ValueSet JSON file per value set.
    Fhir,
    /// One OMOP concept-set JSON file per value set.
    Omop,
    /// A single delimited table, one row per (value set, code system).
    Codes,
}
