//! # Core library for resistr
//!
//! Everything here is synchronous and free of network I/O:
//!
//! - `sequence` - validation and normalization of raw epitope input
//! - `models` - antibiotics, resistance labels, prediction results and summaries
//! - `catalog` - display metadata for antibiotics and bundled sample sequences
//! - `export` - CSV rendering of prediction results
//!
//! The HTTP side lives in `resistr-client`.

pub mod catalog;
pub mod consts;
pub mod errors;
pub mod export;
pub mod models;
pub mod sequence;

pub use errors::{PredictionResultError, ValidationError};
pub use models::{
    Antibiotic, HealthStatus, PredictionResult, ResistanceLevel, ResistanceStatus,
    ResistanceSummary,
};
pub use sequence::{CanonicalSequence, PredictionRequest, normalize, residue_count, validate};
