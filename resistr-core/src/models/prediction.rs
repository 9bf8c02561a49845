use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::antibiotic::{Antibiotic, ResistanceStatus};
use super::summary::ResistanceSummary;
use crate::consts::ANTIBIOTIC_COUNT;
use crate::errors::PredictionResultError;

///
/// Body of a successful `POST /predict` response, as sent over the wire.
///
/// Keys are kept as strings so that an unknown antibiotic added by the service
/// does not break decoding; completeness is checked when converting into a
/// [`PredictionResult`].
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predictions: BTreeMap<String, ResistanceStatus>,
}

///
/// A complete classification: one status for every [`Antibiotic`].
///
/// A result can only be built when all antibiotics are present; partial
/// responses are never accepted as a success.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    statuses: [ResistanceStatus; ANTIBIOTIC_COUNT],
}

impl PredictionResult {
    ///
    /// Build a result from `(antibiotic, status)` pairs.
    ///
    /// Later pairs overwrite earlier ones for the same antibiotic.
    ///
    /// # Returns
    /// - the result, or an error listing every antibiotic that was not covered
    ///
    pub fn from_statuses<I>(statuses: I) -> Result<Self, PredictionResultError>
    where
        I: IntoIterator<Item = (Antibiotic, ResistanceStatus)>,
    {
        let mut slots: [Option<ResistanceStatus>; ANTIBIOTIC_COUNT] = [None; ANTIBIOTIC_COUNT];
        for (antibiotic, status) in statuses {
            slots[antibiotic as usize] = Some(status);
        }

        let missing: Vec<&str> = Antibiotic::ALL
            .iter()
            .filter(|a| slots[**a as usize].is_none())
            .map(|a| a.key())
            .collect();
        if !missing.is_empty() {
            return Err(PredictionResultError::MissingAntibiotics(missing.join(", ")));
        }

        // every slot is filled at this point
        let statuses = slots.map(|s| s.unwrap_or(ResistanceStatus::Susceptible));
        Ok(PredictionResult { statuses })
    }

    /// Parse the JSON body of a successful prediction response.
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        let response: PredictionResponse = serde_json::from_str(body)?;
        Ok(PredictionResult::try_from(response)?)
    }

    pub fn get(&self, antibiotic: Antibiotic) -> ResistanceStatus {
        self.statuses[antibiotic as usize]
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Antibiotic, ResistanceStatus)> + '_ {
        Antibiotic::ALL
            .into_iter()
            .map(move |a| (a, self.statuses[a as usize]))
    }

    pub fn resistant(&self) -> Vec<Antibiotic> {
        self.iter()
            .filter(|(_, s)| s.is_resistant())
            .map(|(a, _)| a)
            .collect()
    }

    pub fn summary(&self) -> ResistanceSummary {
        ResistanceSummary::from(self)
    }

    pub fn to_response(&self) -> PredictionResponse {
        PredictionResponse {
            predictions: self
                .iter()
                .map(|(a, s)| (a.key().to_string(), s))
                .collect(),
        }
    }
}

impl TryFrom<PredictionResponse> for PredictionResult {
    type Error = PredictionResultError;

    fn try_from(response: PredictionResponse) -> Result<Self, Self::Error> {
        // unknown keys are skipped; missing ones are reported by from_statuses
        let known = response
            .predictions
            .into_iter()
            .filter_map(|(key, status)| key.parse::<Antibiotic>().ok().map(|a| (a, status)));
        PredictionResult::from_statuses(known)
    }
}

impl Serialize for PredictionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_response().serialize(serializer)
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}
