pub mod liability_aggregator;

pub use liability_aggregator::{LiabilityAggregator, PeriodRecords};
