pub mod models;
pub mod services;

pub use models::{Confidence, DeductionAnalysis, DeductionSuggestion, ReliefCategory};
pub use services::DeductionAnalyzer;
