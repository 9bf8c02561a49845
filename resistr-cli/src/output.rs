use tabled::{Table, Tabled};

use resistr_core::PredictionResult;
use resistr_core::catalog::{AntibioticInfo, SampleSequence};

#[derive(Tabled)]
pub struct PredictionRow {
    #[tabled(rename = "Antibiotic")]
    antibiotic: &'static str,
    #[tabled(rename = "Class")]
    class: &'static str,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
pub struct AntibioticRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Class")]
    class: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

#[derive(Tabled)]
pub struct SampleRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "Sequence")]
    sequence: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

pub fn prediction_table(result: &PredictionResult) -> String {
    let rows: Vec<PredictionRow> = result
        .iter()
        .map(|(antibiotic, status)| {
            let info = antibiotic.info();
            PredictionRow {
                antibiotic: info.name,
                class: info.class,
                status: status.to_string(),
            }
        })
        .collect();
    Table::new(rows).to_string()
}

/// Two-line overall verdict, e.g. `Overall resistance rate: 9% (1/11)`.
pub fn summary_text(result: &PredictionResult) -> String {
    let summary = result.summary();
    format!(
        "Overall resistance rate: {}% ({}/{})\n{}",
        summary.percentage,
        summary.resistant,
        summary.resistant + summary.susceptible,
        summary.level
    )
}

pub fn antibiotics_table(catalog: &[AntibioticInfo]) -> String {
    let rows: Vec<AntibioticRow> = catalog
        .iter()
        .map(|info| AntibioticRow {
            key: info.antibiotic.key(),
            name: info.name,
            class: info.class,
            description: info.description,
        })
        .collect();
    Table::new(rows).to_string()
}

pub fn samples_table(samples: &[SampleSequence]) -> String {
    let rows: Vec<SampleRow> = samples
        .iter()
        .map(|sample| SampleRow {
            name: sample.name,
            length: sample.sequence.len(),
            sequence: sample.sequence,
            description: sample.description,
        })
        .collect();
    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use resistr_core::{Antibiotic, ResistanceStatus};
    use rstest::*;

    #[fixture]
    fn result() -> PredictionResult {
        PredictionResult::from_statuses(Antibiotic::ALL.into_iter().map(|a| {
            let status = if a == Antibiotic::Rifampin {
                ResistanceStatus::Resistant
            } else {
                ResistanceStatus::Susceptible
            };
            (a, status)
        }))
        .unwrap()
    }

    #[rstest]
    fn test_prediction_table_lists_every_antibiotic(result: PredictionResult) {
        let table = prediction_table(&result);
        for antibiotic in Antibiotic::ALL {
            assert!(table.contains(antibiotic.info().name));
        }
        assert!(table.contains("Rifamycin"));
        assert_eq!(table.matches("Resistant").count(), 1);
    }

    #[rstest]
    fn test_summary_text(result: PredictionResult) {
        let text = summary_text(&result);
        assert!(text.starts_with("Overall resistance rate: 9% (1/11)"));
        assert!(text.ends_with("Low resistance detected"));
    }
}
