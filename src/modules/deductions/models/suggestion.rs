use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Qualitative certainty attached to an inferred deduction
///
/// Exact category matches are high, description heuristics are medium,
/// aggregate-pattern inferences are low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            _ => Err(format!("Invalid confidence: {}", s)),
        }
    }
}

/// Relief category a suggestion settles into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliefCategory {
    Pension,
    RentRelief,
    LifeInsurance,
    Medical,
    Training,
    HomeOffice,
}

impl std::fmt::Display for ReliefCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReliefCategory::Pension => write!(f, "pension"),
            ReliefCategory::RentRelief => write!(f, "rent_relief"),
            ReliefCategory::LifeInsurance => write!(f, "life_insurance"),
            ReliefCategory::Medical => write!(f, "medical"),
            ReliefCategory::Training => write!(f, "training"),
            ReliefCategory::HomeOffice => write!(f, "home_office"),
        }
    }
}

/// A single inferred deduction the taxpayer has not claimed yet
///
/// Derived, never persisted by the engine. Amounts are already capped
/// against the regime's per-category limits and whatever the taxpayer
/// declared, so acting on a suggestion can never drive a declared field
/// negative or breach a cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionSuggestion {
    pub category: ReliefCategory,
    pub suggested_amount: Decimal,
    pub confidence: Confidence,
    pub rationale: String,
    /// Whether supporting documentation must be produced to claim this
    pub document_required: bool,
    /// Tax delta if this suggestion alone were applied
    pub estimated_savings: Decimal,
}

/// Full output of one deduction inference pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionAnalysis {
    /// Reliefs the rules already grant from declared fields
    pub auto_exemptions: Vec<DeductionSuggestion>,
    /// Reliefs inferred from the expense history
    pub detected_deductions: Vec<DeductionSuggestion>,
    /// Tax delta for the combined detected set: a single before/after
    /// computation, not a per-category sum, since marginal rates make
    /// deductions non-additive across bracket boundaries
    pub total_potential_savings: Decimal,
    pub tax_optimization_tips: Vec<String>,
    pub recommended_actions: Vec<String>,
}

impl DeductionAnalysis {
    /// The well-defined result for a year with no income
    pub fn empty() -> Self {
        Self {
            auto_exemptions: Vec::new(),
            detected_deductions: Vec::new(),
            total_potential_savings: Decimal::ZERO,
            tax_optimization_tips: Vec::new(),
            recommended_actions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.auto_exemptions.is_empty()
            && self.detected_deductions.is_empty()
            && self.tax_optimization_tips.is_empty()
    }
}
