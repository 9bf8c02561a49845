use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::ANTIBIOTIC_COUNT;
use crate::errors::PredictionResultError;

///
/// The antibiotics the prediction service classifies a sequence against.
///
/// Variants are declared in the service's key order (alphabetical), which is
/// also the order used when iterating a [`crate::PredictionResult`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Antibiotic {
    Amikacin,
    Amoxicillin,
    Capreomycin,
    Ciprofloxacin,
    Ethambutol,
    Isoniazid,
    Kanamycin,
    Moxifloxacin,
    Pyrazinamide,
    Rifampin,
    Streptomycin,
}

impl Antibiotic {
    pub const ALL: [Antibiotic; ANTIBIOTIC_COUNT] = [
        Antibiotic::Amikacin,
        Antibiotic::Amoxicillin,
        Antibiotic::Capreomycin,
        Antibiotic::Ciprofloxacin,
        Antibiotic::Ethambutol,
        Antibiotic::Isoniazid,
        Antibiotic::Kanamycin,
        Antibiotic::Moxifloxacin,
        Antibiotic::Pyrazinamide,
        Antibiotic::Rifampin,
        Antibiotic::Streptomycin,
    ];

    /// Key used for this antibiotic in the service's JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Antibiotic::Amikacin => "amikacin",
            Antibiotic::Amoxicillin => "amoxicillin",
            Antibiotic::Capreomycin => "capreomycin",
            Antibiotic::Ciprofloxacin => "ciprofloxacin",
            Antibiotic::Ethambutol => "ethambutol",
            Antibiotic::Isoniazid => "isoniazid",
            Antibiotic::Kanamycin => "kanamycin",
            Antibiotic::Moxifloxacin => "moxifloxacin",
            Antibiotic::Pyrazinamide => "pyrazinamide",
            Antibiotic::Rifampin => "rifampin",
            Antibiotic::Streptomycin => "streptomycin",
        }
    }
}

impl Display for Antibiotic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Antibiotic {
    type Err = PredictionResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Antibiotic::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| PredictionResultError::UnknownAntibiotic(s.to_string()))
    }
}

/// Per-antibiotic label returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResistanceStatus {
    Resistant,
    Susceptible,
}

impl ResistanceStatus {
    pub fn is_resistant(&self) -> bool {
        matches!(self, ResistanceStatus::Resistant)
    }
}

impl Display for ResistanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResistanceStatus::Resistant => write!(f, "Resistant"),
            ResistanceStatus::Susceptible => write!(f, "Susceptible"),
        }
    }
}

impl FromStr for ResistanceStatus {
    type Err = PredictionResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Resistant" => Ok(ResistanceStatus::Resistant),
            "Susceptible" => Ok(ResistanceStatus::Susceptible),
            _ => Err(PredictionResultError::UnknownStatus(s.to_string())),
        }
    }
}
