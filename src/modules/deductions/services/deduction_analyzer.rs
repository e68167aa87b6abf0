use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::TaxRegime;
use crate::core::Result;
use crate::modules::deductions::models::{
    Confidence, DeductionAnalysis, DeductionSuggestion, ReliefCategory,
};
use crate::modules::records::{ExpenseCategory, ExpenseRecord};
use crate::modules::taxes::{StatutoryDeductions, TaxEngine};

const INSURANCE_KEYWORDS: &[&str] = &["insurance", "premium", "policy", "assurance"];
const MEDICAL_KEYWORDS: &[&str] = &["hospital", "clinic", "pharmacy", "medical", "health"];
const TRAINING_KEYWORDS: &[&str] = &[
    "training",
    "course",
    "certification",
    "workshop",
    "conference",
    "tuition",
];

/// Infers unclaimed deductions from the year's expense history
///
/// Three detection tiers, in descending certainty: exact category matches,
/// description/vendor keyword heuristics, and aggregate spending patterns.
/// Savings are priced through the tax engine with one combined
/// before/after computation.
pub struct DeductionAnalyzer {
    engine: TaxEngine,
}

impl DeductionAnalyzer {
    pub fn new() -> Self {
        Self {
            engine: TaxEngine::new(),
        }
    }

    /// Analyze a year's records against the declared deductions.
    ///
    /// Zero or negative yearly income returns the empty analysis; there is
    /// no liability to optimise and no savings delta to divide.
    pub fn analyze(
        &self,
        yearly_income: Decimal,
        expenses: &[ExpenseRecord],
        regime: &TaxRegime,
        declared: &StatutoryDeductions,
    ) -> Result<DeductionAnalysis> {
        regime.validate()?;

        if yearly_income <= Decimal::ZERO {
            return Ok(DeductionAnalysis::empty());
        }

        let declared = declared.sanitized();
        let auto_exemptions = self.auto_exemptions(&declared, regime);
        let mut detected = self.detect_from_expenses(expenses, &declared, regime);

        // One combined before/after pass prices the whole candidate set.
        // Summing per-category deltas would overstate savings once the
        // combined relief crosses a bracket boundary.
        let base = self.engine.compute(yearly_income, &declared, regime)?;
        let candidate_total: Decimal = detected.iter().map(|s| s.suggested_amount).sum();
        let combined = self.engine.compute_with_additional_relief(
            yearly_income,
            &declared,
            candidate_total,
            regime,
        )?;
        let total_potential_savings = base.net_tax_payable - combined.net_tax_payable;

        for suggestion in &mut detected {
            let alone = self.engine.compute_with_additional_relief(
                yearly_income,
                &declared,
                suggestion.suggested_amount,
                regime,
            )?;
            suggestion.estimated_savings = base.net_tax_payable - alone.net_tax_payable;
        }

        let tax_optimization_tips = self.optimization_tips(yearly_income, expenses, &declared, regime);
        let recommended_actions = Self::recommended_actions(&detected);

        info!(
            detected = detected.len(),
            auto = auto_exemptions.len(),
            %total_potential_savings,
            "deduction analysis complete"
        );

        Ok(DeductionAnalysis {
            auto_exemptions,
            detected_deductions: detected,
            total_potential_savings,
            tax_optimization_tips,
            recommended_actions,
        })
    }

    /// Reliefs the rules already grant with certainty from declared fields
    fn auto_exemptions(
        &self,
        declared: &StatutoryDeductions,
        regime: &TaxRegime,
    ) -> Vec<DeductionSuggestion> {
        let mut exemptions = Vec::new();

        if declared.annual_rent_paid > Decimal::ZERO {
            let relief = regime.rent_relief(declared.annual_rent_paid);
            if relief > Decimal::ZERO {
                exemptions.push(DeductionSuggestion {
                    category: ReliefCategory::RentRelief,
                    suggested_amount: relief,
                    confidence: Confidence::High,
                    rationale: format!(
                        "Declared annual rent of {} grants a relief of {}",
                        declared.annual_rent_paid, relief
                    ),
                    document_required: false,
                    estimated_savings: Decimal::ZERO,
                });
            }
        }

        if declared.pension_contribution > Decimal::ZERO {
            exemptions.push(DeductionSuggestion {
                category: ReliefCategory::Pension,
                suggested_amount: declared.pension_contribution,
                confidence: Confidence::High,
                rationale: format!(
                    "Declared pension contribution of {} is deductible in full",
                    declared.pension_contribution
                ),
                document_required: false,
                estimated_savings: Decimal::ZERO,
            });
        }

        exemptions
    }

    /// Pattern detection over the expense history
    fn detect_from_expenses(
        &self,
        expenses: &[ExpenseRecord],
        declared: &StatutoryDeductions,
        regime: &TaxRegime,
    ) -> Vec<DeductionSuggestion> {
        let mut insurance_exact = Decimal::ZERO;
        let mut medical_exact = Decimal::ZERO;
        let mut training_exact = Decimal::ZERO;
        let mut insurance_keyword = Decimal::ZERO;
        let mut medical_keyword = Decimal::ZERO;
        let mut training_keyword = Decimal::ZERO;
        let mut utilities_total = Decimal::ZERO;

        for expense in expenses {
            let amount = expense.effective_amount();
            if amount.is_zero() {
                continue;
            }
            match expense.category {
                ExpenseCategory::Insurance => insurance_exact += amount,
                ExpenseCategory::Medical => medical_exact += amount,
                ExpenseCategory::Training => training_exact += amount,
                ExpenseCategory::Utilities => utilities_total += amount,
                _ => {
                    // Fall back to the free-text heuristics; first match wins
                    // so a record is never counted into two categories.
                    let text = Self::search_text(expense);
                    if Self::matches_any(&text, INSURANCE_KEYWORDS) {
                        insurance_keyword += amount;
                    } else if Self::matches_any(&text, MEDICAL_KEYWORDS) {
                        medical_keyword += amount;
                    } else if Self::matches_any(&text, TRAINING_KEYWORDS) {
                        training_keyword += amount;
                    }
                }
            }
        }

        debug!(
            %insurance_exact,
            %medical_exact,
            %training_exact,
            %utilities_total,
            "expense pattern scan"
        );

        let mut detected = Vec::new();

        // Life insurance headroom is reduced by what is already declared;
        // exact matches consume the headroom before keyword matches.
        let mut insurance_headroom =
            Self::headroom(regime.caps.life_insurance, declared.life_insurance_premium);
        for (total, confidence, basis) in [
            (insurance_exact, Confidence::High, "expenses categorised as insurance"),
            (insurance_keyword, Confidence::Medium, "expense descriptions mentioning insurance terms"),
        ] {
            let amount = Self::capped(total, &mut insurance_headroom);
            if amount > Decimal::ZERO {
                detected.push(DeductionSuggestion {
                    category: ReliefCategory::LifeInsurance,
                    suggested_amount: amount,
                    confidence,
                    rationale: format!("{} of {} appear deductible as premiums", basis, total),
                    document_required: true,
                    estimated_savings: Decimal::ZERO,
                });
            }
        }

        let mut medical_headroom = Self::headroom(regime.caps.medical, Decimal::ZERO);
        for (total, confidence, basis) in [
            (medical_exact, Confidence::High, "expenses categorised as medical"),
            (medical_keyword, Confidence::Medium, "expense descriptions mentioning medical providers"),
        ] {
            let amount = Self::capped(total, &mut medical_headroom);
            if amount > Decimal::ZERO {
                detected.push(DeductionSuggestion {
                    category: ReliefCategory::Medical,
                    suggested_amount: amount,
                    confidence,
                    rationale: format!("{} of {} appear deductible", basis, total),
                    document_required: true,
                    estimated_savings: Decimal::ZERO,
                });
            }
        }

        let mut training_headroom = Self::headroom(regime.caps.training, Decimal::ZERO);
        for (total, confidence, basis) in [
            (training_exact, Confidence::High, "expenses categorised as training"),
            (training_keyword, Confidence::Medium, "expense descriptions mentioning professional development"),
        ] {
            let amount = Self::capped(total, &mut training_headroom);
            if amount > Decimal::ZERO {
                detected.push(DeductionSuggestion {
                    category: ReliefCategory::Training,
                    suggested_amount: amount,
                    confidence,
                    rationale: format!("{} of {} appear deductible as professional development", basis, total),
                    document_required: true,
                    estimated_savings: Decimal::ZERO,
                });
            }
        }

        // Aggregate pattern: sustained utility spend implies home-office use
        if regime.home_office_utility_floor > Decimal::ZERO
            && utilities_total >= regime.home_office_utility_floor
        {
            let mut home_office_headroom = Self::headroom(regime.caps.home_office, Decimal::ZERO);
            let claimable = utilities_total * regime.home_office_claim_rate;
            let amount = Self::capped(claimable, &mut home_office_headroom);
            if amount > Decimal::ZERO {
                detected.push(DeductionSuggestion {
                    category: ReliefCategory::HomeOffice,
                    suggested_amount: amount,
                    confidence: Confidence::Low,
                    rationale: format!(
                        "Yearly utility spend of {} suggests a claimable home-office share",
                        utilities_total
                    ),
                    document_required: true,
                    estimated_savings: Decimal::ZERO,
                });
            }
        }

        detected
    }

    fn optimization_tips(
        &self,
        yearly_income: Decimal,
        expenses: &[ExpenseRecord],
        declared: &StatutoryDeductions,
        regime: &TaxRegime,
    ) -> Vec<String> {
        let mut tips = Vec::new();

        let pension_allowance = yearly_income * regime.pension_rate_cap;
        if declared.pension_contribution < pension_allowance {
            tips.push(format!(
                "Pension contributions of {} are below the deductible allowance of {}; contributing the difference reduces taxable income",
                declared.pension_contribution, pension_allowance
            ));
        }

        let has_rent_expenses = expenses
            .iter()
            .any(|e| e.category == ExpenseCategory::Rent && e.effective_amount() > Decimal::ZERO);
        if declared.annual_rent_paid.is_zero() && has_rent_expenses {
            tips.push(
                "Rent expenses were recorded but no annual rent is declared; declaring it unlocks the rent relief".to_string(),
            );
        }

        if let Some(cap) = regime.caps.life_insurance {
            if declared.life_insurance_premium < cap {
                tips.push(format!(
                    "Life insurance premiums of {} leave {} of deductible headroom unused",
                    declared.life_insurance_premium,
                    cap - declared.life_insurance_premium
                ));
            }
        }

        tips
    }

    fn recommended_actions(detected: &[DeductionSuggestion]) -> Vec<String> {
        detected
            .iter()
            .filter(|s| s.document_required)
            .map(|s| {
                format!(
                    "Gather supporting documents for the {} claim of {} before filing",
                    s.category, s.suggested_amount
                )
            })
            .collect()
    }

    fn search_text(expense: &ExpenseRecord) -> String {
        match &expense.vendor {
            Some(vendor) => format!("{} {}", expense.description, vendor).to_lowercase(),
            None => expense.description.to_lowercase(),
        }
    }

    fn matches_any(text: &str, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| text.contains(keyword))
    }

    /// Remaining cap room for a category, `None` cap meaning unlimited
    fn headroom(cap: Option<Decimal>, already_declared: Decimal) -> Option<Decimal> {
        cap.map(|cap| (cap - already_declared).max(Decimal::ZERO))
    }

    /// Takes as much of `amount` as the headroom allows, consuming it
    fn capped(amount: Decimal, headroom: &mut Option<Decimal>) -> Decimal {
        match headroom {
            Some(room) => {
                let granted = amount.min(*room);
                *room -= granted;
                granted
            }
            None => amount,
        }
    }
}

impl Default for DeductionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
