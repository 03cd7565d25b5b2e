pub mod prediction;
pub mod training;

pub use prediction::PredictionResult;
pub use training::{AdvancedTrainingInput, Gender, TrainingInput, TrainingPayload, Variant};
