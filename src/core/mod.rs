pub mod error;
pub mod money;
pub mod period;
pub mod telemetry;

pub use error::{AppError, Result};
pub use money::Currency;
pub use period::Period;
pub use telemetry::init_tracing;
