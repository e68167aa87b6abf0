pub mod liability_item;
pub mod payment;

pub use liability_item::{LiabilityItem, SettlementStatus};
pub use payment::{ConfirmationStatus, Payment};
