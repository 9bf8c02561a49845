use thiserror::Error;

/// Reasons a raw input is rejected by [`crate::sequence::validate`].
///
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a sequence")]
    Empty,

    #[error("Sequence contains invalid characters. Only standard amino acid letters are allowed.")]
    InvalidCharacters,

    #[error("Sequence is too short. Please enter at least 5 amino acids.")]
    TooShort(usize),

    #[error("Sequence is too long. Maximum length is 5000 amino acids.")]
    TooLong(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionResultError {
    #[error("Prediction is missing antibiotics: {0}")]
    MissingAntibiotics(String),

    #[error("Unknown resistance status: {0}")]
    UnknownStatus(String),

    #[error("Unknown antibiotic: {0}")]
    UnknownAntibiotic(String),
}
