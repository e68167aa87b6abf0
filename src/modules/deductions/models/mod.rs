pub mod suggestion;

pub use suggestion::{Confidence, DeductionAnalysis, DeductionSuggestion, ReliefCategory};
