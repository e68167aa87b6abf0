use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Income record category
///
/// Stable keys only; display labels belong to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeCategory {
    Sales,
    Services,
    Investment,
    Employment,
    Other,
}

impl std::fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncomeCategory::Sales => write!(f, "sales"),
            IncomeCategory::Services => write!(f, "services"),
            IncomeCategory::Investment => write!(f, "investment"),
            IncomeCategory::Employment => write!(f, "employment"),
            IncomeCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for IncomeCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sales" => Ok(IncomeCategory::Sales),
            "services" => Ok(IncomeCategory::Services),
            "investment" => Ok(IncomeCategory::Investment),
            "employment" => Ok(IncomeCategory::Employment),
            "other" => Ok(IncomeCategory::Other),
            _ => Err(format!("Invalid income category: {}", s)),
        }
    }
}

/// A single recorded income entry
///
/// Read-only input to the engine; ownership and mutability rules are
/// application policy enforced upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: IncomeCategory,
    pub description: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl IncomeRecord {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: IncomeCategory,
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
}
