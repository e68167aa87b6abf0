pub mod deadline;

pub use deadline::{FilingDeadline, Urgency};
