pub mod antibiotic;
pub mod prediction;
pub mod summary;

// re-export for cleaner imports
pub use self::antibiotic::{Antibiotic, ResistanceStatus};
pub use self::prediction::{HealthStatus, PredictionResponse, PredictionResult};
pub use self::summary::{ResistanceLevel, ResistanceSummary};
