//! Artifact file writing.

use anyhow::{ensure, Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use terbium_convert::CodeRow;

/// Create (on demand) and return the date-stamped directory for this run.
pub fn run_dir(out_dir: &Path, accessed: NaiveDateTime) -> Result<PathBuf> {
    let dir = out_dir.join(accessed.format("%Y.%m.%d").to_string());
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed creating output directory {}", dir.display()))?;
    Ok(dir)
}

/// Write one JSON artifact named after the value set it came from.
pub fn write_json_artifact<T: Serialize>(
    dir: &Path,
    name: &str,
    artifact: &T,
    indent: usize,
) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", file_stem(name)));

    let bytes = if indent == 0 {
        serde_json::to_vec(artifact).context("Failed serializing artifact")?
    } else {
        let spacer = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(spacer.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        artifact
            .serialize(&mut serializer)
            .context("Failed serializing artifact")?;
        buf
    };

    fs::write(&path, bytes).with_context(|| format!("Failed writing {}", path.display()))?;
    Ok(path)
}

/// Write the flattened code table as one delimited file.
pub fn write_codes_table(dir: &Path, rows: &[CodeRow], field_delimiter: char) -> Result<PathBuf> {
    ensure!(
        field_delimiter.is_ascii(),
        "field delimiter must be a single ASCII character"
    );

    let file_name = if field_delimiter == '\t' {
        "codes.tsv"
    } else {
        "codes.csv"
    };
    let path = dir.join(file_name);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(field_delimiter as u8)
        .from_path(&path)
        .with_context(|| format!("Failed creating {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .context("Failed writing code table row")?;
    }
    writer.flush().context("Failed flushing code table")?;
    Ok(path)
}

/// Display names become file names; keep them but defang path separators.
fn file_stem(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn run_dir_is_date_stamped() {
        let accessed = NaiveDate::from_ymd_opt(2021, 2, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let base = std::env::temp_dir().join(format!("terbium-out-test-{}", std::process::id()));
        let dir = run_dir(&base, accessed).unwrap();
        assert!(dir.ends_with("2021.02.20"));
        assert!(dir.is_dir());
        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn file_stem_defangs_separators() {
        assert_eq!(file_stem("Asthma SCT"), "Asthma SCT");
        assert_eq!(file_stem("A/B\\C"), "A-B-C");
    }
}
