use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::info;

use crate::core::{AppError, Result};

pub mod regime;

pub use regime::{DeductionCaps, TaxBracket, TaxRegime};

/// Tax regimes keyed by year
///
/// Looking up a year that has no loaded regime is a configuration error:
/// silently falling back to another year's rules is worse than refusing
/// to compute.
#[derive(Debug, Clone, Default)]
pub struct RegimeSet {
    regimes: BTreeMap<i32, TaxRegime>,
}

#[derive(Deserialize)]
struct RegimeFile {
    regimes: Vec<TaxRegime>,
}

impl RegimeSet {
    /// Builds a set from already-parsed regimes, validating each schedule
    pub fn new(regimes: Vec<TaxRegime>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for regime in regimes {
            regime.validate()?;
            let year = regime.year;
            if map.insert(year, regime).is_some() {
                return Err(AppError::configuration(format!(
                    "Duplicate regime for year {}",
                    year
                )));
            }
        }
        info!("Loaded {} tax regime(s)", map.len());
        Ok(Self { regimes: map })
    }

    /// Parses a JSON document of the form `{"regimes": [...]}`
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: RegimeFile = serde_json::from_str(raw)
            .map_err(|e| AppError::configuration(format!("Invalid regime JSON: {}", e)))?;
        Self::new(file.regimes)
    }

    /// Parses a YAML document of the form `regimes: [...]`
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let file: RegimeFile = serde_yaml::from_str(raw)
            .map_err(|e| AppError::configuration(format!("Invalid regime YAML: {}", e)))?;
        Self::new(file.regimes)
    }

    /// The regime for the requested tax year
    pub fn regime_for(&self, year: i32) -> Result<&TaxRegime> {
        self.regimes.get(&year).ok_or_else(|| {
            AppError::configuration(format!("No tax regime loaded for year {}", year))
        })
    }

    /// Years with a loaded regime, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.regimes.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.regimes.is_empty()
    }
}
