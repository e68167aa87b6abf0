use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxBracket;
use crate::core::money::require_finite;
use crate::core::Result;

/// The nine statutory deduction fields a taxpayer declares for a year
///
/// All amounts are annual and non-negative; unset fields default to zero.
/// Rent contributes a relief (capped fraction of rent paid), not a full
/// deduction. Compensation, gifts and pension benefits received are exempt
/// income adjustments rather than expenses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatutoryDeductions {
    pub pension_contribution: Decimal,
    pub nhis_contribution: Decimal,
    pub nhf_contribution: Decimal,
    pub life_insurance_premium: Decimal,
    pub housing_loan_interest: Decimal,
    pub annual_rent_paid: Decimal,
    pub compensation_received: Decimal,
    pub gifts_received: Decimal,
    pub pension_benefits_received: Decimal,
}

impl StatutoryDeductions {
    /// Copy with every field clamped to zero when negative.
    /// A negative declared amount never produces negative tax.
    pub fn sanitized(&self) -> Self {
        Self {
            pension_contribution: self.pension_contribution.max(Decimal::ZERO),
            nhis_contribution: self.nhis_contribution.max(Decimal::ZERO),
            nhf_contribution: self.nhf_contribution.max(Decimal::ZERO),
            life_insurance_premium: self.life_insurance_premium.max(Decimal::ZERO),
            housing_loan_interest: self.housing_loan_interest.max(Decimal::ZERO),
            annual_rent_paid: self.annual_rent_paid.max(Decimal::ZERO),
            compensation_received: self.compensation_received.max(Decimal::ZERO),
            gifts_received: self.gifts_received.max(Decimal::ZERO),
            pension_benefits_received: self.pension_benefits_received.max(Decimal::ZERO),
        }
    }
}

/// Statutory deductions as they arrive from callers: raw JSON floats.
///
/// Conversion is the finite-input boundary: NaN or infinite values are
/// rejected field-by-field before anything is computed.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct RawStatutoryDeductions {
    pub pension_contribution: f64,
    pub nhis_contribution: f64,
    pub nhf_contribution: f64,
    pub life_insurance_premium: f64,
    pub housing_loan_interest: f64,
    pub annual_rent_paid: f64,
    pub compensation_received: f64,
    pub gifts_received: f64,
    pub pension_benefits_received: f64,
}

impl TryFrom<RawStatutoryDeductions> for StatutoryDeductions {
    type Error = crate::core::AppError;

    fn try_from(raw: RawStatutoryDeductions) -> Result<Self> {
        Ok(Self {
            pension_contribution: require_finite(raw.pension_contribution, "pension_contribution")?,
            nhis_contribution: require_finite(raw.nhis_contribution, "nhis_contribution")?,
            nhf_contribution: require_finite(raw.nhf_contribution, "nhf_contribution")?,
            life_insurance_premium: require_finite(
                raw.life_insurance_premium,
                "life_insurance_premium",
            )?,
            housing_loan_interest: require_finite(
                raw.housing_loan_interest,
                "housing_loan_interest",
            )?,
            annual_rent_paid: require_finite(raw.annual_rent_paid, "annual_rent_paid")?,
            compensation_received: require_finite(
                raw.compensation_received,
                "compensation_received",
            )?,
            gifts_received: require_finite(raw.gifts_received, "gifts_received")?,
            pension_benefits_received: require_finite(
                raw.pension_benefits_received,
                "pension_benefits_received",
            )?,
        })
    }
}

/// Income and tax attributed to one bracket of the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTax {
    pub bracket: TaxBracket,
    pub income_in_bracket: Decimal,
    pub tax_in_bracket: Decimal,
}

/// Full result of one statutory tax computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComputationResult {
    /// Gross income minus total relief, floored at zero
    pub taxable_income: Decimal,
    /// Total relief applied (statutory deductions, rent relief, exempt income)
    pub total_relief: Decimal,
    /// Whether the exemption threshold zeroed the liability
    pub is_exempt: bool,
    /// Per-bracket breakdown in ascending bracket order. Exempt results keep
    /// their income split but carry zero tax per row.
    pub tax_by_bracket: Vec<BracketTax>,
    pub gross_tax: Decimal,
    pub net_tax_payable: Decimal,
    /// `gross_tax / taxable_income`, zero when taxable income is zero
    pub effective_rate: Decimal,
}

impl TaxComputationResult {
    /// A result with nothing taxable and nothing payable
    pub fn zero() -> Self {
        Self {
            taxable_income: Decimal::ZERO,
            total_relief: Decimal::ZERO,
            is_exempt: true,
            tax_by_bracket: Vec::new(),
            gross_tax: Decimal::ZERO,
            net_tax_payable: Decimal::ZERO,
            effective_rate: Decimal::ZERO,
        }
    }

    /// Sum of the per-bracket income figures
    pub fn income_across_brackets(&self) -> Decimal {
        self.tax_by_bracket
            .iter()
            .map(|row| row.income_in_bracket)
            .sum()
    }

    /// Sum of the per-bracket tax figures; equals `gross_tax` by construction
    pub fn tax_across_brackets(&self) -> Decimal {
        self.tax_by_bracket
            .iter()
            .map(|row| row.tax_in_bracket)
            .sum()
    }
}
