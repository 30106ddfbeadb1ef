//! OID list input.

use anyhow::{Context, Result};
use std::path::Path;

/// Read the `OID` column from a spreadsheet-exported CSV, skipping blank
/// values. The header is located case-insensitively.
pub fn read_oids(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed opening OID file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed reading headers from {}", path.display()))?
        .clone();
    let oid_idx = headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case("OID"))
        .with_context(|| format!("{} has no OID column", path.display()))?;

    let mut oids = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("Failed reading row from {}", path.display()))?;
        let oid = row.get(oid_idx).map(str::trim).unwrap_or("");
        if !oid.is_empty() {
            oids.push(oid.to_string());
        }
    }
    Ok(oids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp_csv(tag: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "terbium-oids-test-{tag}-{}.csv",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_oid_column_and_skips_blanks() {
        let path = write_temp_csv(
            "basic",
            "name,OID,notes\nAsthma,2.16.840.1.113762.1.4.1034.65,x\nBlank,,y\nDiabetes, 1.2.3 ,z\n",
        );
        let oids = read_oids(&path).unwrap();
        assert_eq!(oids, vec!["2.16.840.1.113762.1.4.1034.65", "1.2.3"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let path = write_temp_csv("case", "oid\n9.8.7\n");
        assert_eq!(read_oids(&path).unwrap(), vec!["9.8.7"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_oid_column_is_an_error() {
        let path = write_temp_csv("missing", "name,code\nAsthma,123\n");
        let err = read_oids(&path).unwrap_err();
        assert!(err.to_string().contains("no OID column"));
        fs::remove_file(path).unwrap();
    }
}
