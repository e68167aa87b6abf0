pub mod computation;

pub use computation::{
    BracketTax, RawStatutoryDeductions, StatutoryDeductions, TaxComputationResult,
};
