use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Period;
use crate::modules::liabilities::TaxInstrument;

/// Time-based urgency of a filing obligation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// The due date has passed and the liability is not settled
    Overdue,
    /// Inside the instrument's urgency window before the due date
    DueSoon,
    Upcoming,
    /// The matching liability is fully paid or overpaid, regardless of date
    Satisfied,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Overdue => write!(f, "overdue"),
            Urgency::DueSoon => write!(f, "due_soon"),
            Urgency::Upcoming => write!(f, "upcoming"),
            Urgency::Satisfied => write!(f, "satisfied"),
        }
    }
}

impl std::str::FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "overdue" => Ok(Urgency::Overdue),
            "due_soon" => Ok(Urgency::DueSoon),
            "upcoming" => Ok(Urgency::Upcoming),
            "satisfied" => Ok(Urgency::Satisfied),
            _ => Err(format!("Invalid urgency: {}", s)),
        }
    }
}

/// A filing obligation with its due date and urgency classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingDeadline {
    pub instrument: TaxInstrument,
    pub period: Period,
    pub due_date: NaiveDate,
    /// Signed day count from the classification date to the due date
    pub days_until_due: i64,
    pub urgency: Urgency,
}
