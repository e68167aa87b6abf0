use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Period;
use crate::modules::liabilities::TaxInstrument;

/// Settlement state of a reconciled liability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    /// Something is owed and nothing confirmed against it
    Unpaid,
    /// Confirmed payments cover part of the liability
    Partial,
    /// Confirmed payments cover the liability exactly, or nothing was owed
    FullyPaid,
    /// Confirmed payments exceed the liability
    Overpaid,
}

impl std::fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettlementStatus::Unpaid => write!(f, "unpaid"),
            SettlementStatus::Partial => write!(f, "partial"),
            SettlementStatus::FullyPaid => write!(f, "fully_paid"),
            SettlementStatus::Overpaid => write!(f, "overpaid"),
        }
    }
}

impl std::str::FromStr for SettlementStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(SettlementStatus::Unpaid),
            "partial" => Ok(SettlementStatus::Partial),
            "fully_paid" => Ok(SettlementStatus::FullyPaid),
            "overpaid" => Ok(SettlementStatus::Overpaid),
            _ => Err(format!("Invalid settlement status: {}", s)),
        }
    }
}

/// One instrument's computed-versus-paid position for a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiabilityItem {
    pub instrument: TaxInstrument,
    pub period: Period,
    pub computed_amount: Decimal,
    /// Sum of confirmed payments only
    pub paid_amount: Decimal,
    /// `computed − paid`; negative means credit and is never clamped here
    pub balance: Decimal,
    pub status: SettlementStatus,
}

impl LiabilityItem {
    /// Amount still owed, clamped for UI summaries; the signed figure
    /// stays in `balance`
    pub fn amount_due(&self) -> Decimal {
        self.balance.max(Decimal::ZERO)
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self.status,
            SettlementStatus::FullyPaid | SettlementStatus::Overpaid
        )
    }
}
