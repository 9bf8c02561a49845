//! Constants shared by the validator and the prediction models.

/// The 20 standard amino-acid single-letter codes, in alphabetical order.
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Shortest sequence (in residues) the prediction service accepts.
pub const MIN_SEQUENCE_LENGTH: usize = 5;

/// Longest sequence (in residues) the prediction service accepts.
pub const MAX_SEQUENCE_LENGTH: usize = 5000;

/// JSON field carrying the sequence in a prediction request.
pub const SEQUENCE_FIELD: &str = "epitope_sequence";

/// Number of antibiotics every prediction result covers.
pub const ANTIBIOTIC_COUNT: usize = 11;

/// Prefix of the default CSV export file name; the date and `.csv` are appended.
pub const DEFAULT_CSV_PREFIX: &str = "antibiotic-resistance-results";
