//! TaxTrust Computation & Reconciliation Engine Library
//!
//! This library computes statutory tax liabilities from raw income and
//! deduction inputs, infers additional eligible deductions from expense
//! records, reconciles liabilities per tax instrument against recorded
//! payments, and derives filing deadlines with an urgency classification.
//!
//! Every component is a pure, synchronous transform over its inputs: no
//! I/O, no shared mutable state. Persistence, transport and presentation
//! belong to the surrounding application.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use config::{DeductionCaps, RegimeSet, TaxBracket, TaxRegime};
pub use self::core::{AppError, Currency, Period, Result};
pub use modules::deadlines::{DeadlineTracker, FilingDeadline, Urgency};
pub use modules::deductions::{
    Confidence, DeductionAnalysis, DeductionAnalyzer, DeductionSuggestion, ReliefCategory,
};
pub use modules::liabilities::{
    LiabilityAggregator, PeriodRecords, TaxInstrument, VatDirection, VatPosition, VatTransaction,
    WhtTransaction,
};
pub use modules::reconciliation::{
    ConfirmationStatus, LiabilityItem, Payment, ReconciliationEngine, SettlementStatus,
};
pub use modules::records::{ExpenseCategory, ExpenseRecord, IncomeCategory, IncomeRecord};
pub use modules::taxes::{
    BracketTax, RawStatutoryDeductions, StatutoryDeductions, TaxComputationResult, TaxEngine,
};
