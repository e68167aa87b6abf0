pub mod reconciliation_engine;

pub use reconciliation_engine::ReconciliationEngine;
