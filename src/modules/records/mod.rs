pub mod models;

pub use models::{ExpenseCategory, ExpenseRecord, IncomeCategory, IncomeRecord};
