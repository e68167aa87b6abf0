use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Period;
use crate::modules::liabilities::TaxInstrument;

/// Confirmation state of a recorded payment
///
/// Only confirmed payments settle a liability; pending and rejected
/// payments are excluded from the paid total but retained by callers for
/// audit display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl Default for ConfirmationStatus {
    fn default() -> Self {
        ConfirmationStatus::Pending
    }
}

impl std::fmt::Display for ConfirmationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmationStatus::Pending => write!(f, "pending"),
            ConfirmationStatus::Confirmed => write!(f, "confirmed"),
            ConfirmationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ConfirmationStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ConfirmationStatus::Pending),
            "confirmed" => Ok(ConfirmationStatus::Confirmed),
            "rejected" => Ok(ConfirmationStatus::Rejected),
            _ => Err(format!("Invalid confirmation status: {}", s)),
        }
    }
}

/// A payment recorded against an instrument and period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub instrument: TaxInstrument,
    pub period: Period,
    pub amount: Decimal,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    pub date: NaiveDate,
    /// Bank or remittance reference
    pub reference: String,
}

impl Payment {
    pub fn new(
        instrument: TaxInstrument,
        period: Period,
        amount: Decimal,
        date: NaiveDate,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument,
            period,
            amount,
            confirmation_status: ConfirmationStatus::Pending,
            date,
            reference: reference.into(),
        }
    }

    pub fn confirmed(mut self) -> Self {
        self.confirmation_status = ConfirmationStatus::Confirmed;
        self
    }

    pub fn rejected(mut self) -> Self {
        self.confirmation_status = ConfirmationStatus::Rejected;
        self
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmation_status == ConfirmationStatus::Confirmed
    }
}
