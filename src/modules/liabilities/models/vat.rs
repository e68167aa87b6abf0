use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Period;

/// Whether a VAT transaction collects or pays tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatDirection {
    /// VAT charged on sales
    Output,
    /// VAT paid on purchases
    Input,
}

impl std::fmt::Display for VatDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VatDirection::Output => write!(f, "output"),
            VatDirection::Input => write!(f, "input"),
        }
    }
}

impl std::str::FromStr for VatDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "output" => Ok(VatDirection::Output),
            "input" => Ok(VatDirection::Input),
            _ => Err(format!("Invalid VAT direction: {}", s)),
        }
    }
}

/// One VAT-bearing transaction, tagged with its filing month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VatTransaction {
    pub id: Uuid,
    pub direction: VatDirection,
    /// Base transaction amount, before VAT
    pub amount: Decimal,
    /// VAT charged or paid on the transaction
    pub vat_amount: Decimal,
    /// Exempt transactions never enter the netting
    #[serde(default)]
    pub exempt: bool,
    pub year: i32,
    pub month: u32,
}

impl VatTransaction {
    pub fn new(
        direction: VatDirection,
        amount: Decimal,
        vat_amount: Decimal,
        year: i32,
        month: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            direction,
            amount,
            vat_amount,
            exempt: false,
            year,
            month,
        }
    }

    pub fn exempted(mut self) -> Self {
        self.exempt = true;
        self
    }

    /// Whether this transaction files under the given period
    pub fn in_period(&self, period: &Period) -> bool {
        match period {
            Period::Monthly { year, month } => self.year == *year && self.month == *month,
            Period::Annual { year } => self.year == *year,
        }
    }
}

/// Netted VAT figures for one period
///
/// `net` keeps its sign: a negative value is a refund position, reported
/// for itself and never netted against other instruments. `liability` is
/// the payable side, floored at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatPosition {
    pub period: Period,
    pub output_vat: Decimal,
    pub input_vat: Decimal,
    pub net: Decimal,
    pub liability: Decimal,
}

impl VatPosition {
    pub fn is_refund_position(&self) -> bool {
        self.net < Decimal::ZERO
    }
}
