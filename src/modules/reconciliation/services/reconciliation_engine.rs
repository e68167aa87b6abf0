use rust_decimal::Decimal;
use tracing::debug;

use crate::core::Period;
use crate::modules::liabilities::TaxInstrument;
use crate::modules::reconciliation::models::{LiabilityItem, Payment, SettlementStatus};

/// Matches computed liabilities against confirmed payments
pub struct ReconciliationEngine;

impl ReconciliationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Reconcile one instrument's computed liability for a period.
    ///
    /// Only confirmed payments recorded against the same instrument and
    /// period count toward the paid total; pending and rejected payments
    /// are left out, as are payments scoped to other liabilities. The
    /// balance keeps its sign: a negative balance is a credit, clamped
    /// only in `LiabilityItem::amount_due` for UI summaries.
    pub fn reconcile(
        &self,
        instrument: TaxInstrument,
        period: Period,
        computed_amount: Decimal,
        payments: &[Payment],
    ) -> LiabilityItem {
        let computed = computed_amount.max(Decimal::ZERO);
        let paid: Decimal = payments
            .iter()
            .filter(|p| p.is_confirmed() && p.instrument == instrument && p.period == period)
            .map(|p| p.amount.max(Decimal::ZERO))
            .sum();

        let status = Self::derive_status(computed, paid);
        let balance = computed - paid;

        debug!(%instrument, %period, %computed, %paid, %status, "reconciled liability");

        LiabilityItem {
            instrument,
            period,
            computed_amount: computed,
            paid_amount: paid,
            balance,
            status,
        }
    }

    /// Reconcile a batch of computed liabilities against one payment ledger
    pub fn reconcile_all(
        &self,
        computed: &[(TaxInstrument, Period, Decimal)],
        payments: &[Payment],
    ) -> Vec<LiabilityItem> {
        computed
            .iter()
            .map(|(instrument, period, amount)| {
                self.reconcile(*instrument, *period, *amount, payments)
            })
            .collect()
    }

    /// Status rules, evaluated in order: a zero liability with no payments
    /// is vacuously settled; overpayment wins over exact cover; any
    /// confirmed payment short of the liability is partial; otherwise the
    /// liability is unpaid.
    fn derive_status(computed: Decimal, paid: Decimal) -> SettlementStatus {
        if computed.is_zero() && paid.is_zero() {
            SettlementStatus::FullyPaid
        } else if paid > computed {
            SettlementStatus::Overpaid
        } else if paid >= computed {
            SettlementStatus::FullyPaid
        } else if paid > Decimal::ZERO {
            SettlementStatus::Partial
        } else {
            SettlementStatus::Unpaid
        }
    }
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}
