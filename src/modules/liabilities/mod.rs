pub mod models;
pub mod services;

pub use models::{TaxInstrument, VatDirection, VatPosition, VatTransaction, WhtTransaction};
pub use services::{LiabilityAggregator, PeriodRecords};
