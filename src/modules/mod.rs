pub mod deadlines;
pub mod deductions;
pub mod liabilities;
pub mod reconciliation;
pub mod records;
pub mod taxes;
