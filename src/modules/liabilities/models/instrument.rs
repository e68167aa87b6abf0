use serde::{Deserialize, Serialize};

/// Tax instrument a liability or payment is recorded against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxInstrument {
    /// Personal income tax, annual, progressive brackets
    Pit,
    /// Companies income tax, annual, progressive brackets
    Cit,
    /// Value-added tax, monthly, output minus input
    Vat,
    /// Withholding tax, monthly, deducted at source
    Wht,
}

impl TaxInstrument {
    /// Monthly instruments file per calendar month; the rest are annual
    pub fn is_monthly(&self) -> bool {
        matches!(self, TaxInstrument::Vat | TaxInstrument::Wht)
    }

    /// Days before the due date at which an obligation becomes `due_soon`
    pub fn urgency_window_days(&self) -> i64 {
        if self.is_monthly() {
            7
        } else {
            30
        }
    }
}

impl std::fmt::Display for TaxInstrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxInstrument::Pit => write!(f, "pit"),
            TaxInstrument::Cit => write!(f, "cit"),
            TaxInstrument::Vat => write!(f, "vat"),
            TaxInstrument::Wht => write!(f, "wht"),
        }
    }
}

impl std::str::FromStr for TaxInstrument {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pit" => Ok(TaxInstrument::Pit),
            "cit" => Ok(TaxInstrument::Cit),
            "vat" => Ok(TaxInstrument::Vat),
            "wht" => Ok(TaxInstrument::Wht),
            _ => Err(format!("Invalid tax instrument: {}", s)),
        }
    }
}
