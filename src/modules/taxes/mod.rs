pub mod models;
pub mod services;

pub use models::{BracketTax, RawStatutoryDeductions, StatutoryDeductions, TaxComputationResult};
pub use services::TaxEngine;
