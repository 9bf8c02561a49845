//! CSV export of prediction results.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::consts::DEFAULT_CSV_PREFIX;
use crate::models::PredictionResult;

/// Render a result as `Antibiotic,Status` CSV, one row per antibiotic.
pub fn to_csv(result: &PredictionResult) -> String {
    let mut rows = vec!["Antibiotic,Status".to_string()];
    rows.extend(result.iter().map(|(a, s)| format!("{},{}", a.key(), s)));
    rows.join("\n")
}

///
/// Default export file name for a given day, e.g.
/// `antibiotic-resistance-results-2024-05-01.csv`.
///
/// # Arguments
/// - date: ISO date string (`YYYY-MM-DD`)
///
pub fn default_csv_filename(date: &str) -> PathBuf {
    PathBuf::from(format!("{}-{}.csv", DEFAULT_CSV_PREFIX, date))
}

/// Write the CSV rendering of `result` to `path`, overwriting it.
pub fn write_csv<P: AsRef<Path>>(result: &PredictionResult, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file =
        File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    file.write_all(to_csv(result).as_bytes())
        .with_context(|| format!("Failed to write file: {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Antibiotic, ResistanceStatus};

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn result() -> PredictionResult {
        PredictionResult::from_statuses(Antibiotic::ALL.into_iter().map(|a| {
            let status = if a == Antibiotic::Isoniazid {
                ResistanceStatus::Resistant
            } else {
                ResistanceStatus::Susceptible
            };
            (a, status)
        }))
        .unwrap()
    }

    #[rstest]
    fn test_csv_layout(result: PredictionResult) {
        let csv = to_csv(&result);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Antibiotic,Status");
        assert_eq!(lines[1], "amikacin,Susceptible");
        assert_eq!(lines[6], "isoniazid,Resistant");
        assert_eq!(lines[11], "streptomycin,Susceptible");
    }

    #[rstest]
    fn test_write_csv(result: PredictionResult) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join(default_csv_filename("2024-05-01"));
        write_csv(&result, &path).unwrap();

        assert!(path.ends_with("antibiotic-resistance-results-2024-05-01.csv"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), to_csv(&result));
    }
}
