use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxRegime;
use crate::core::{Period, Result};
use crate::modules::liabilities::models::{
    TaxInstrument, VatDirection, VatPosition, VatTransaction, WhtTransaction,
};
use crate::modules::records::IncomeRecord;
use crate::modules::taxes::{StatutoryDeductions, TaxEngine};

/// The period's raw records, bundled as plain data
///
/// Income and declared deductions feed PIT/CIT; the transaction lists feed
/// VAT and WHT. The aggregator filters by period itself, so callers may
/// pass unscoped lists.
#[derive(Debug, Clone, Default)]
pub struct PeriodRecords {
    pub gross_income: Decimal,
    pub deductions: StatutoryDeductions,
    pub vat_transactions: Vec<VatTransaction>,
    pub wht_transactions: Vec<WhtTransaction>,
}

/// Computes the liability per tax instrument for a period
pub struct LiabilityAggregator {
    engine: TaxEngine,
}

impl LiabilityAggregator {
    pub fn new() -> Self {
        Self {
            engine: TaxEngine::new(),
        }
    }

    /// Computed liability for one instrument and period.
    ///
    /// PIT/CIT run the statutory computation; VAT nets output against input
    /// over non-exempt transactions; WHT sums deductions at source whose
    /// payment date falls in the period.
    pub fn liability_for(
        &self,
        instrument: TaxInstrument,
        period: &Period,
        records: &PeriodRecords,
        regime: &TaxRegime,
    ) -> Result<Decimal> {
        let amount = match instrument {
            TaxInstrument::Pit | TaxInstrument::Cit => {
                self.engine
                    .compute(records.gross_income, &records.deductions, regime)?
                    .net_tax_payable
            }
            TaxInstrument::Vat => {
                self.vat_position(period, &records.vat_transactions).liability
            }
            TaxInstrument::Wht => self.wht_liability(period, &records.wht_transactions),
        };

        debug!(%instrument, %period, %amount, "aggregated liability");
        Ok(amount)
    }

    /// Output-minus-input VAT for the period, exempt transactions filtered
    /// out before summation.
    ///
    /// A negative net is a refund position: the sign is kept in `net` for
    /// refund reporting while `liability` floors at zero; a refund is never
    /// netted against other instruments.
    pub fn vat_position(&self, period: &Period, transactions: &[VatTransaction]) -> VatPosition {
        let mut output_vat = Decimal::ZERO;
        let mut input_vat = Decimal::ZERO;

        for tx in transactions {
            if tx.exempt || !tx.in_period(period) {
                continue;
            }
            let vat = tx.vat_amount.max(Decimal::ZERO);
            match tx.direction {
                VatDirection::Output => output_vat += vat,
                VatDirection::Input => input_vat += vat,
            }
        }

        let net = output_vat - input_vat;
        VatPosition {
            period: *period,
            output_vat,
            input_vat,
            net,
            liability: net.max(Decimal::ZERO),
        }
    }

    /// Sum of tax withheld at source for payments dated inside the period.
    /// A payment dated exactly on a period boundary belongs to the period
    /// containing its calendar date.
    pub fn wht_liability(&self, period: &Period, transactions: &[WhtTransaction]) -> Decimal {
        transactions
            .iter()
            .filter(|tx| period.contains(tx.payment_date))
            .map(|tx| tx.wht_amount.max(Decimal::ZERO))
            .sum()
    }

    /// Total recorded income falling in the period, for callers assembling
    /// `PeriodRecords` from raw record lists
    pub fn income_total(&self, period: &Period, records: &[IncomeRecord]) -> Decimal {
        records
            .iter()
            .filter(|record| period.contains(record.date))
            .map(|record| record.amount.max(Decimal::ZERO))
            .sum()
    }
}

impl Default for LiabilityAggregator {
    fn default() -> Self {
        Self::new()
    }
}
