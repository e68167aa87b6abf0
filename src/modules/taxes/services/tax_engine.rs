use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxRegime;
use crate::core::money::require_finite;
use crate::core::Result;
use crate::modules::taxes::models::{
    BracketTax, RawStatutoryDeductions, StatutoryDeductions, TaxComputationResult,
};

/// Statutory tax computation over a progressive bracket schedule
///
/// A pure transform: the same inputs always produce bit-identical results.
/// All arithmetic is `Decimal`, so repeated calls never drift at the kobo
/// level.
pub struct TaxEngine;

impl TaxEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute statutory liability for a year's gross income and declared
    /// deductions.
    ///
    /// Negative inputs are clamped to zero; there is no negative tax. The
    /// regime is validated before the walk; a malformed schedule is refused
    /// rather than computed against.
    pub fn compute(
        &self,
        gross_income: Decimal,
        deductions: &StatutoryDeductions,
        regime: &TaxRegime,
    ) -> Result<TaxComputationResult> {
        self.compute_with_additional_relief(gross_income, deductions, Decimal::ZERO, regime)
    }

    /// Same computation with extra relief on top of the declared fields.
    ///
    /// The deduction inference engine uses this to price candidate
    /// deductions: tax with declared fields only versus tax with the
    /// candidate set added, in one combined adjustment.
    pub fn compute_with_additional_relief(
        &self,
        gross_income: Decimal,
        deductions: &StatutoryDeductions,
        additional_relief: Decimal,
        regime: &TaxRegime,
    ) -> Result<TaxComputationResult> {
        regime.validate()?;

        let gross = gross_income.max(Decimal::ZERO);
        let declared = deductions.sanitized();
        let additional = additional_relief.max(Decimal::ZERO);

        let rent_relief = regime.rent_relief(declared.annual_rent_paid);
        let exempt_income = declared.gifts_received
            + declared.pension_benefits_received
            + regime.exempt_compensation(declared.compensation_received);
        let total_relief = declared.pension_contribution
            + declared.nhis_contribution
            + declared.nhf_contribution
            + declared.life_insurance_premium
            + declared.housing_loan_interest
            + rent_relief
            + exempt_income
            + additional;

        let taxable_income = (gross - total_relief).max(Decimal::ZERO);
        let is_exempt = taxable_income <= regime.exemption_threshold;

        // Walk the schedule in ascending order. Exempt results keep their
        // income split so callers can still render the band breakdown, but
        // every tax row is zero.
        let mut remaining = taxable_income;
        let mut tax_by_bracket = Vec::with_capacity(regime.brackets.len());
        let mut gross_tax = Decimal::ZERO;

        for bracket in &regime.brackets {
            if remaining <= Decimal::ZERO {
                break;
            }
            let width = bracket.width();
            if width == Some(Decimal::ZERO) {
                continue;
            }

            let income_in_bracket = width.map_or(remaining, |w| remaining.min(w));
            let tax_in_bracket = if is_exempt {
                Decimal::ZERO
            } else {
                regime.currency.round(income_in_bracket * bracket.rate)
            };

            gross_tax += tax_in_bracket;
            remaining -= income_in_bracket;
            tax_by_bracket.push(BracketTax {
                bracket: bracket.clone(),
                income_in_bracket,
                tax_in_bracket,
            });
        }

        let net_tax_payable = gross_tax;
        let effective_rate = if taxable_income > Decimal::ZERO {
            (gross_tax / taxable_income).round_dp(6)
        } else {
            Decimal::ZERO
        };

        debug!(
            year = regime.year,
            %taxable_income,
            %gross_tax,
            is_exempt,
            "computed statutory tax"
        );

        Ok(TaxComputationResult {
            taxable_income,
            total_relief,
            is_exempt,
            tax_by_bracket,
            gross_tax,
            net_tax_payable,
            effective_rate,
        })
    }

    /// Boundary entry point for callers holding raw floats.
    /// Rejects non-finite gross income or deduction fields with
    /// `InvalidInput` before anything is computed.
    pub fn compute_from_raw(
        &self,
        gross_income: f64,
        raw_deductions: RawStatutoryDeductions,
        regime: &TaxRegime,
    ) -> Result<TaxComputationResult> {
        let gross = require_finite(gross_income, "gross_income")?;
        let deductions = StatutoryDeductions::try_from(raw_deductions)?;
        self.compute(gross, &deductions, regime)
    }
}

impl Default for TaxEngine {
    fn default() -> Self {
        Self::new()
    }
}
