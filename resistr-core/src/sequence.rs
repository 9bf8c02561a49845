//! Validation and normalization of raw epitope input.
//!
//! Two filtering policies live side by side here:
//!
//! - [`validate`] rejects input containing anything outside the amino-acid
//!   alphabet (after whitespace is removed).
//! - [`normalize`] silently drops anything outside the alphabet.
//!
//! A sequence is validated first and the outgoing payload is then built from
//! the normalized text, so for every input that passes [`validate`] both
//! policies yield the same string.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::consts::{AMINO_ACIDS, MAX_SEQUENCE_LENGTH, MIN_SEQUENCE_LENGTH, SEQUENCE_FIELD};
use crate::errors::ValidationError;

/// Returns true if `c` is one of the 20 standard amino-acid codes (uppercase).
pub fn is_amino_acid(c: char) -> bool {
    c.is_ascii() && AMINO_ACIDS.contains(&(c as u8))
}

///
/// An epitope sequence that is safe to send to the prediction service.
///
/// Only the 20 standard amino-acid letters, uppercase, no whitespace, and a
/// length within `[MIN_SEQUENCE_LENGTH, MAX_SEQUENCE_LENGTH]`. The only way to
/// obtain one is through [`validate`].
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalSequence(String);

impl CanonicalSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CanonicalSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CanonicalSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CanonicalSequence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<&str> for CanonicalSequence {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value)
    }
}

///
/// Validate a raw user input and turn it into a [`CanonicalSequence`].
///
/// Whitespace is stripped from anywhere in the input and the rest is
/// uppercased. Checks run in a fixed order and only the first failure is
/// reported: emptiness, then the character set, then the length bounds.
///
/// # Arguments
/// - raw: untrusted text as typed by the user
///
/// # Returns
/// - the canonical sequence, or the reason it was rejected
///
pub fn validate(raw: &str) -> Result<CanonicalSequence, ValidationError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !cleaned.chars().all(is_amino_acid) {
        return Err(ValidationError::InvalidCharacters);
    }

    // every char is ASCII at this point, so byte length == residue count
    let length = cleaned.len();
    if length < MIN_SEQUENCE_LENGTH {
        return Err(ValidationError::TooShort(length));
    }
    if length > MAX_SEQUENCE_LENGTH {
        return Err(ValidationError::TooLong(length));
    }

    Ok(CanonicalSequence(normalize(&cleaned)))
}

///
/// Uppercase the input and drop every character that is not a standard amino
/// acid. Never fails and does not check length.
///
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| is_amino_acid(*c))
        .collect()
}

/// Residue count shown while the user is still typing.
pub fn residue_count(raw: &str) -> usize {
    normalize(raw).len()
}

///
/// Body of a `POST /predict` call. Immutable once built.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    epitope_sequence: CanonicalSequence,
}

impl PredictionRequest {
    pub fn new(sequence: CanonicalSequence) -> Self {
        PredictionRequest {
            epitope_sequence: sequence,
        }
    }

    pub fn sequence(&self) -> &CanonicalSequence {
        &self.epitope_sequence
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(
            SEQUENCE_FIELD.to_string(),
            serde_json::Value::String(self.epitope_sequence.as_str().to_string()),
        );
        serde_json::Value::Object(body)
    }
}

impl From<CanonicalSequence> for PredictionRequest {
    fn from(sequence: CanonicalSequence) -> Self {
        PredictionRequest::new(sequence)
    }
}
