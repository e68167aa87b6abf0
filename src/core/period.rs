use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tax reporting period
///
/// Monthly periods drive VAT and WHT obligations, annual periods drive
/// PIT and CIT. Containment is decided on the calendar date alone: a
/// transaction dated exactly on a period boundary belongs to the period
/// containing that date, with no time-of-day ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Period {
    Monthly { year: i32, month: u32 },
    Annual { year: i32 },
}

impl Period {
    /// Monthly period for the given calendar month (1-12)
    pub fn monthly(year: i32, month: u32) -> Self {
        Period::Monthly { year, month }
    }

    /// Annual period for the given tax year
    pub fn annual(year: i32) -> Self {
        Period::Annual { year }
    }

    /// The tax year this period belongs to
    pub fn year(&self) -> i32 {
        match self {
            Period::Monthly { year, .. } | Period::Annual { year } => *year,
        }
    }

    pub fn is_monthly(&self) -> bool {
        matches!(self, Period::Monthly { .. })
    }

    /// First calendar day of the period, `None` for an out-of-range month
    pub fn start_date(&self) -> Option<NaiveDate> {
        match self {
            Period::Monthly { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1),
            Period::Annual { year } => NaiveDate::from_ymd_opt(*year, 1, 1),
        }
    }

    /// Last calendar day of the period, `None` for an out-of-range month
    pub fn end_date(&self) -> Option<NaiveDate> {
        match self {
            Period::Monthly { .. } => self
                .start_date()?
                .checked_add_months(Months::new(1))?
                .checked_sub_days(Days::new(1)),
            Period::Annual { year } => NaiveDate::from_ymd_opt(*year, 12, 31),
        }
    }

    /// Whether the given calendar date falls inside this period.
    /// Boundary dates are inclusive; a malformed month contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start_date(), self.end_date()) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// The period containing the given date, at this period's granularity
    pub fn monthly_of(date: NaiveDate) -> Self {
        Period::Monthly {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Monthly { year, month } => write!(f, "{:04}-{:02}", year, month),
            Period::Annual { year } => write!(f, "{:04}", year),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((y, m)) => {
                let year = y.parse().map_err(|_| format!("Invalid period: {}", s))?;
                let month: u32 = m.parse().map_err(|_| format!("Invalid period: {}", s))?;
                if !(1..=12).contains(&month) {
                    return Err(format!("Invalid period month: {}", s));
                }
                Ok(Period::Monthly { year, month })
            }
            None => {
                let year = s.parse().map_err(|_| format!("Invalid period: {}", s))?;
                Ok(Period::Annual { year })
            }
        }
    }
}
