use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Currency, Result};

/// A contiguous income band taxed at a single marginal rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower edge of the band
    pub lower: Decimal,
    /// Exclusive upper edge; `None` marks the unbounded final band
    pub upper: Option<Decimal>,
    /// Marginal rate as a fraction (0.07 for 7%)
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> Self {
        Self { lower, upper, rate }
    }

    /// Band width, `None` for the unbounded tail
    pub fn width(&self) -> Option<Decimal> {
        self.upper.map(|upper| upper - self.lower)
    }

    pub fn is_unbounded(&self) -> bool {
        self.upper.is_none()
    }
}

/// Per-category annual caps for inferred deductions.
///
/// `None` means the category is uncapped. Caps bound what the inference
/// engine may suggest on top of what the taxpayer already declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionCaps {
    pub life_insurance: Option<Decimal>,
    pub medical: Option<Decimal>,
    pub training: Option<Decimal>,
    pub home_office: Option<Decimal>,
}

/// Statutory constants for one tax year
///
/// Regimes are versioned wholesale: when regulation changes, a new value is
/// loaded for the new year and older years keep their own constants. Every
/// engine call receives the regime explicitly, so multiple tax years can be
/// computed side-by-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRegime {
    /// Tax year this schedule applies to
    pub year: i32,
    #[serde(default)]
    pub currency: Currency,
    /// Taxable income at or below this amount is fully exempt
    pub exemption_threshold: Decimal,
    /// Progressive bands, ascending, contiguous, final band unbounded
    pub brackets: Vec<TaxBracket>,
    /// Fraction of annual rent that converts into a relief
    pub rent_relief_rate: Decimal,
    /// Ceiling on the rent relief amount
    pub rent_relief_cap: Decimal,
    /// Maximum pension contribution as a fraction of gross income
    pub pension_rate_cap: Decimal,
    /// Employment compensation stays exempt up to this amount; the excess
    /// remains taxable. `None` means fully exempt.
    #[serde(default)]
    pub compensation_exemption_cap: Option<Decimal>,
    /// Yearly utility spend at or above this triggers the home-office pattern
    #[serde(default)]
    pub home_office_utility_floor: Decimal,
    /// Fraction of utility spend claimable as home-office relief
    #[serde(default)]
    pub home_office_claim_rate: Decimal,
    #[serde(default)]
    pub caps: DeductionCaps,
}

impl TaxRegime {
    /// Validates the schedule before any computation runs.
    ///
    /// A malformed bracket table (gap, overlap, descending rates, missing
    /// unbounded tail) is refused here; silently computing against a wrong
    /// schedule is worse than refusing to compute.
    pub fn validate(&self) -> Result<()> {
        if self.brackets.is_empty() {
            return Err(AppError::configuration(format!(
                "Regime {}: bracket table is empty",
                self.year
            )));
        }

        let first = &self.brackets[0];
        if first.lower != Decimal::ZERO {
            return Err(AppError::configuration(format!(
                "Regime {}: first bracket must start at 0, starts at {}",
                self.year, first.lower
            )));
        }

        let mut previous: Option<&TaxBracket> = None;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(AppError::configuration(format!(
                    "Regime {}: bracket {} rate {} is outside [0, 1]",
                    self.year, index, bracket.rate
                )));
            }

            if let Some(upper) = bracket.upper {
                if upper < bracket.lower {
                    return Err(AppError::configuration(format!(
                        "Regime {}: bracket {} upper edge {} is below lower edge {}",
                        self.year, index, upper, bracket.lower
                    )));
                }
            } else if index != self.brackets.len() - 1 {
                return Err(AppError::configuration(format!(
                    "Regime {}: only the final bracket may be unbounded (bracket {})",
                    self.year, index
                )));
            }

            if let Some(prev) = previous {
                match prev.upper {
                    Some(prev_upper) if prev_upper == bracket.lower => {}
                    Some(prev_upper) => {
                        return Err(AppError::configuration(format!(
                            "Regime {}: gap or overlap between {} and {} at bracket {}",
                            self.year, prev_upper, bracket.lower, index
                        )));
                    }
                    None => unreachable!("unbounded bracket is always last"),
                }
                if bracket.rate < prev.rate {
                    return Err(AppError::configuration(format!(
                        "Regime {}: rates must be non-decreasing, bracket {} drops from {} to {}",
                        self.year, index, prev.rate, bracket.rate
                    )));
                }
            }

            previous = Some(bracket);
        }

        if self.brackets[self.brackets.len() - 1].upper.is_some() {
            return Err(AppError::configuration(format!(
                "Regime {}: final bracket must be unbounded",
                self.year
            )));
        }

        for (name, value) in [
            ("exemption_threshold", self.exemption_threshold),
            ("rent_relief_rate", self.rent_relief_rate),
            ("rent_relief_cap", self.rent_relief_cap),
            ("pension_rate_cap", self.pension_rate_cap),
            ("home_office_utility_floor", self.home_office_utility_floor),
            ("home_office_claim_rate", self.home_office_claim_rate),
        ] {
            if value < Decimal::ZERO {
                return Err(AppError::configuration(format!(
                    "Regime {}: {} cannot be negative",
                    self.year, name
                )));
            }
        }

        Ok(())
    }

    /// Rent relief: `min(cap, rent_paid × relief_rate)`
    pub fn rent_relief(&self, rent_paid: Decimal) -> Decimal {
        (rent_paid.max(Decimal::ZERO) * self.rent_relief_rate).min(self.rent_relief_cap)
    }

    /// Exempt share of employment compensation received
    pub fn exempt_compensation(&self, compensation: Decimal) -> Decimal {
        let compensation = compensation.max(Decimal::ZERO);
        match self.compensation_exemption_cap {
            Some(cap) => compensation.min(cap),
            None => compensation,
        }
    }
}
