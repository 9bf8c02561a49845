use serde::Serialize;
use std::fmt::{self, Display};

use super::prediction::PredictionResult;

/// Coarse bucket of the overall resistance rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResistanceLevel {
    Low,
    Moderate,
    High,
}

impl ResistanceLevel {
    /// High above 50 %, moderate above 20 %, low otherwise.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage > 50 {
            ResistanceLevel::High
        } else if percentage > 20 {
            ResistanceLevel::Moderate
        } else {
            ResistanceLevel::Low
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ResistanceLevel::High => "High resistance detected across multiple antibiotics",
            ResistanceLevel::Moderate => "Moderate resistance detected",
            ResistanceLevel::Low => "Low resistance detected",
        }
    }
}

impl Display for ResistanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

///
/// Resistant/susceptible counts of a prediction and the overall resistance
/// rate, rounded to the nearest whole percent (halves round up).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResistanceSummary {
    pub resistant: usize,
    pub susceptible: usize,
    pub percentage: u8,
    pub level: ResistanceLevel,
}

impl ResistanceSummary {
    pub fn new(resistant: usize, susceptible: usize) -> Self {
        let total = resistant + susceptible;
        let percentage = if total == 0 {
            0
        } else {
            ((resistant * 200 + total) / (total * 2)) as u8
        };
        ResistanceSummary {
            resistant,
            susceptible,
            percentage,
            level: ResistanceLevel::from_percentage(percentage),
        }
    }
}

impl From<&PredictionResult> for ResistanceSummary {
    fn from(result: &PredictionResult) -> Self {
        let resistant = result.iter().filter(|(_, s)| s.is_resistant()).count();
        ResistanceSummary::new(resistant, result.iter().count() - resistant)
    }
}
