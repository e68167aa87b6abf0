pub mod deduction_analyzer;

pub use deduction_analyzer::DeductionAnalyzer;
