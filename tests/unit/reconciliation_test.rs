// Property-based tests for liability reconciliation
//
// Validates that every non-negative (computed, paid) pair resolves to
// exactly one settlement status with a signed balance, and that only
// confirmed payments in the right scope settle a liability.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use taxtrust::{
    ConfirmationStatus, Payment, Period, ReconciliationEngine, SettlementStatus, TaxInstrument,
};

fn march() -> Period {
    Period::monthly(2026, 3)
}

fn confirmed_payment(instrument: TaxInstrument, period: Period, amount: Decimal) -> Payment {
    Payment::new(
        instrument,
        period,
        amount,
        NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
        "RMT-0001",
    )
    .confirmed()
}

proptest! {
    #[test]
    fn test_status_derivation_is_total_and_balance_is_signed(
        computed in 0u64..10_000_000u64,
        paid in 0u64..10_000_000u64
    ) {
        let engine = ReconciliationEngine::new();
        let computed = Decimal::from(computed);
        let paid_amount = Decimal::from(paid);

        let item = engine.reconcile(
            TaxInstrument::Vat,
            march(),
            computed,
            &[confirmed_payment(TaxInstrument::Vat, march(), paid_amount)],
        );

        prop_assert_eq!(item.balance, computed - paid_amount);
        prop_assert_eq!(item.paid_amount, paid_amount);

        // Exactly the expected status for every pair
        let expected = if computed.is_zero() && paid_amount.is_zero() {
            SettlementStatus::FullyPaid
        } else if paid_amount > computed {
            SettlementStatus::Overpaid
        } else if paid_amount == computed {
            SettlementStatus::FullyPaid
        } else if paid_amount > Decimal::ZERO {
            SettlementStatus::Partial
        } else {
            SettlementStatus::Unpaid
        };
        prop_assert_eq!(item.status, expected);
    }

    #[test]
    fn test_amount_due_is_clamped_but_balance_is_not(
        computed in 0u64..1_000_000u64,
        paid in 0u64..2_000_000u64
    ) {
        let engine = ReconciliationEngine::new();
        let item = engine.reconcile(
            TaxInstrument::Wht,
            march(),
            Decimal::from(computed),
            &[confirmed_payment(TaxInstrument::Wht, march(), Decimal::from(paid))],
        );

        prop_assert!(item.amount_due() >= Decimal::ZERO);
        if paid > computed {
            prop_assert!(item.balance < Decimal::ZERO);
            prop_assert_eq!(item.amount_due(), Decimal::ZERO);
        }
    }
}

#[test]
fn test_exact_vat_payment_settles_in_full() {
    let engine = ReconciliationEngine::new();
    let item = engine.reconcile(
        TaxInstrument::Vat,
        march(),
        dec!(150000),
        &[confirmed_payment(TaxInstrument::Vat, march(), dec!(150000))],
    );

    assert_eq!(item.status, SettlementStatus::FullyPaid);
    assert_eq!(item.balance, Decimal::ZERO);
    assert!(item.is_settled());
}

#[test]
fn test_pending_payment_is_excluded_from_paid_total() {
    let engine = ReconciliationEngine::new();
    let pending = Payment::new(
        TaxInstrument::Wht,
        march(),
        dec!(40000),
        NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
        "RMT-0002",
    );
    assert_eq!(pending.confirmation_status, ConfirmationStatus::Pending);

    let item = engine.reconcile(
        TaxInstrument::Wht,
        march(),
        dec!(80000),
        &[
            confirmed_payment(TaxInstrument::Wht, march(), dec!(50000)),
            pending,
        ],
    );

    assert_eq!(item.paid_amount, dec!(50000));
    assert_eq!(item.status, SettlementStatus::Partial);
    assert_eq!(item.balance, dec!(30000));
}

#[test]
fn test_rejected_payment_is_excluded_from_paid_total() {
    let engine = ReconciliationEngine::new();
    let rejected = Payment::new(
        TaxInstrument::Vat,
        march(),
        dec!(150000),
        NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
        "RMT-0003",
    )
    .rejected();

    let item = engine.reconcile(TaxInstrument::Vat, march(), dec!(150000), &[rejected]);
    assert_eq!(item.paid_amount, Decimal::ZERO);
    assert_eq!(item.status, SettlementStatus::Unpaid);
}

#[test]
fn test_payments_against_other_instrument_or_period_do_not_count() {
    let engine = ReconciliationEngine::new();
    let item = engine.reconcile(
        TaxInstrument::Vat,
        march(),
        dec!(100000),
        &[
            confirmed_payment(TaxInstrument::Wht, march(), dec!(100000)),
            confirmed_payment(TaxInstrument::Vat, Period::monthly(2026, 4), dec!(100000)),
        ],
    );

    assert_eq!(item.paid_amount, Decimal::ZERO);
    assert_eq!(item.status, SettlementStatus::Unpaid);
}

#[test]
fn test_zero_liability_with_no_payments_is_vacuously_settled() {
    let engine = ReconciliationEngine::new();
    let item = engine.reconcile(TaxInstrument::Pit, Period::annual(2026), Decimal::ZERO, &[]);
    assert_eq!(item.status, SettlementStatus::FullyPaid);
}

#[test]
fn test_reconcile_all_processes_each_liability_independently() {
    let engine = ReconciliationEngine::new();
    let ledger = vec![
        confirmed_payment(TaxInstrument::Vat, march(), dec!(150000)),
        confirmed_payment(TaxInstrument::Wht, march(), dec!(20000)),
    ];
    let items = engine.reconcile_all(
        &[
            (TaxInstrument::Vat, march(), dec!(150000)),
            (TaxInstrument::Wht, march(), dec!(80000)),
            (TaxInstrument::Pit, Period::annual(2026), dec!(114000)),
        ],
        &ledger,
    );

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].status, SettlementStatus::FullyPaid);
    assert_eq!(items[1].status, SettlementStatus::Partial);
    assert_eq!(items[2].status, SettlementStatus::Unpaid);
}
