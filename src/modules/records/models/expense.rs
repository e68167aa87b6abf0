use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Expense record category
///
/// Stable keys only; display labels belong to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Rent,
    Utilities,
    Insurance,
    Medical,
    Training,
    Transport,
    OfficeSupplies,
    Salaries,
    Marketing,
    BankCharges,
    ProfessionalServices,
    Other,
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseCategory::Rent => write!(f, "rent"),
            ExpenseCategory::Utilities => write!(f, "utilities"),
            ExpenseCategory::Insurance => write!(f, "insurance"),
            ExpenseCategory::Medical => write!(f, "medical"),
            ExpenseCategory::Training => write!(f, "training"),
            ExpenseCategory::Transport => write!(f, "transport"),
            ExpenseCategory::OfficeSupplies => write!(f, "office_supplies"),
            ExpenseCategory::Salaries => write!(f, "salaries"),
            ExpenseCategory::Marketing => write!(f, "marketing"),
            ExpenseCategory::BankCharges => write!(f, "bank_charges"),
            ExpenseCategory::ProfessionalServices => write!(f, "professional_services"),
            ExpenseCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "rent" => Ok(ExpenseCategory::Rent),
            "utilities" => Ok(ExpenseCategory::Utilities),
            "insurance" => Ok(ExpenseCategory::Insurance),
            "medical" => Ok(ExpenseCategory::Medical),
            "training" => Ok(ExpenseCategory::Training),
            "transport" => Ok(ExpenseCategory::Transport),
            "office_supplies" => Ok(ExpenseCategory::OfficeSupplies),
            "salaries" => Ok(ExpenseCategory::Salaries),
            "marketing" => Ok(ExpenseCategory::Marketing),
            "bank_charges" => Ok(ExpenseCategory::BankCharges),
            "professional_services" => Ok(ExpenseCategory::ProfessionalServices),
            "other" => Ok(ExpenseCategory::Other),
            _ => Err(format!("Invalid expense category: {}", s)),
        }
    }
}

/// A single recorded expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    /// Free-text description or vendor line, scanned by the deduction
    /// inference heuristics
    pub description: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ExpenseRecord {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: ExpenseCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            category,
            description: description.into(),
            vendor: None,
            notes: None,
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    /// Amount with negatives clamped to zero; records are declared
    /// non-negative but the engine never trusts that blindly
    pub fn effective_amount(&self) -> Decimal {
        self.amount.max(Decimal::ZERO)
    }
}
