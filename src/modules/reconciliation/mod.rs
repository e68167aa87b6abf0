pub mod models;
pub mod services;

pub use models::{ConfirmationStatus, LiabilityItem, Payment, SettlementStatus};
pub use services::ReconciliationEngine;
