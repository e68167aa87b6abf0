pub mod instrument;
pub mod vat;
pub mod wht;

pub use instrument::TaxInstrument;
pub use vat::{VatDirection, VatPosition, VatTransaction};
pub use wht::WhtTransaction;
