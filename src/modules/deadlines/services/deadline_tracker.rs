use chrono::{NaiveDate, Utc};

use crate::core::{AppError, Period, Result};
use crate::modules::deadlines::models::{FilingDeadline, Urgency};
use crate::modules::liabilities::TaxInstrument;
use crate::modules::reconciliation::{LiabilityItem, SettlementStatus};

/// Day of the month monthly obligations fall due, in the month after the
/// period month
const MONTHLY_DUE_DAY: u32 = 21;

/// Derives filing deadlines and their urgency per instrument and period
///
/// The classification date is always passed in, so the tracker itself is
/// deterministic; only the `_now` convenience wrapper reads the system
/// clock.
pub struct DeadlineTracker;

impl DeadlineTracker {
    pub fn new() -> Self {
        Self
    }

    /// Statutory due date for one instrument and period.
    ///
    /// VAT and WHT fall due on the 21st of the month following the period
    /// month. PIT is due March 31 of the following year, CIT June 30 of the
    /// following year. A monthly instrument paired with an annual period
    /// (or the reverse) is a caller mistake, not a computable state.
    pub fn due_date_for(&self, instrument: TaxInstrument, period: &Period) -> Result<NaiveDate> {
        match (instrument, period) {
            (TaxInstrument::Vat | TaxInstrument::Wht, Period::Monthly { year, month }) => {
                if !(1..=12).contains(month) {
                    return Err(AppError::invalid_input(format!(
                        "Period month {} is out of range",
                        month
                    )));
                }
                let (due_year, due_month) = if *month == 12 {
                    (year + 1, 1)
                } else {
                    (*year, month + 1)
                };
                NaiveDate::from_ymd_opt(due_year, due_month, MONTHLY_DUE_DAY).ok_or_else(|| {
                    AppError::invalid_input(format!("No due date for period {}", period))
                })
            }
            (TaxInstrument::Pit, Period::Annual { year }) => {
                NaiveDate::from_ymd_opt(year + 1, 3, 31).ok_or_else(|| {
                    AppError::invalid_input(format!("No due date for year {}", year))
                })
            }
            (TaxInstrument::Cit, Period::Annual { year }) => {
                NaiveDate::from_ymd_opt(year + 1, 6, 30).ok_or_else(|| {
                    AppError::invalid_input(format!("No due date for year {}", year))
                })
            }
            (instrument, period) => Err(AppError::invalid_input(format!(
                "Instrument {} does not file for period {}",
                instrument, period
            ))),
        }
    }

    /// Deadline with urgency, classified against the given date.
    ///
    /// A settled liability is `satisfied` no matter the date. Otherwise the
    /// obligation is `overdue` past the due date, `due_soon` within the
    /// instrument's window (7 days for monthly obligations, 30 for annual),
    /// and `upcoming` before that.
    pub fn deadline_for(
        &self,
        instrument: TaxInstrument,
        period: &Period,
        today: NaiveDate,
        settlement: Option<SettlementStatus>,
    ) -> Result<FilingDeadline> {
        let due_date = self.due_date_for(instrument, period)?;
        let days_until_due = (due_date - today).num_days();

        let settled = matches!(
            settlement,
            Some(SettlementStatus::FullyPaid) | Some(SettlementStatus::Overpaid)
        );
        let urgency = if settled {
            Urgency::Satisfied
        } else if days_until_due < 0 {
            Urgency::Overdue
        } else if days_until_due <= instrument.urgency_window_days() {
            Urgency::DueSoon
        } else {
            Urgency::Upcoming
        };

        Ok(FilingDeadline {
            instrument,
            period: *period,
            due_date,
            days_until_due,
            urgency,
        })
    }

    /// Deadline for a reconciled liability, classified against the given date
    pub fn deadline_for_item(
        &self,
        item: &LiabilityItem,
        today: NaiveDate,
    ) -> Result<FilingDeadline> {
        self.deadline_for(item.instrument, &item.period, today, Some(item.status))
    }

    /// Convenience wrapper over the system clock; everything else in the
    /// tracker takes `today` explicitly
    pub fn deadline_for_item_now(&self, item: &LiabilityItem) -> Result<FilingDeadline> {
        self.deadline_for_item(item, Utc::now().date_naive())
    }
}

impl Default for DeadlineTracker {
    fn default() -> Self {
        Self::new()
    }
}
