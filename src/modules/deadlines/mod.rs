pub mod models;
pub mod services;

pub use models::{FilingDeadline, Urgency};
pub use services::DeadlineTracker;
