use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A payment with tax withheld at source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhtTransaction {
    pub id: Uuid,
    /// Gross amount of the underlying payment
    pub gross_amount: Decimal,
    /// Tax deducted at source, remitted for the period containing
    /// `payment_date`
    pub wht_amount: Decimal,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub beneficiary: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

impl WhtTransaction {
    pub fn new(gross_amount: Decimal, wht_amount: Decimal, payment_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            gross_amount,
            wht_amount,
            payment_date,
            beneficiary: None,
            reference: None,
        }
    }
}
