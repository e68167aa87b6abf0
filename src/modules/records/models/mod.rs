pub mod expense;
pub mod income;

pub use expense::{ExpenseCategory, ExpenseRecord};
pub use income::{IncomeCategory, IncomeRecord};
