// Property-based tests for per-instrument liability aggregation
//
// Validates the VAT sign convention (payable floors at zero while the net
// keeps its sign for refund reporting), exempt filtering, and the
// calendar-date tie-break for WHT period membership.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use taxtrust::{
    Currency, DeductionCaps, LiabilityAggregator, Period, PeriodRecords, StatutoryDeductions,
    TaxBracket, TaxInstrument, TaxRegime, VatDirection, VatTransaction, WhtTransaction,
};

fn test_regime() -> TaxRegime {
    TaxRegime {
        year: 2026,
        currency: Currency::NGN,
        exemption_threshold: dec!(800000),
        brackets: vec![
            TaxBracket::new(dec!(0), Some(dec!(300000)), dec!(0.07)),
            TaxBracket::new(dec!(300000), Some(dec!(600000)), dec!(0.11)),
            TaxBracket::new(dec!(600000), None, dec!(0.15)),
        ],
        rent_relief_rate: dec!(0.2),
        rent_relief_cap: dec!(500000),
        pension_rate_cap: dec!(0.18),
        compensation_exemption_cap: None,
        home_office_utility_floor: dec!(120000),
        home_office_claim_rate: dec!(0.3),
        caps: DeductionCaps::default(),
    }
}

fn output_tx(vat: Decimal) -> VatTransaction {
    VatTransaction::new(VatDirection::Output, vat * dec!(13.3), vat, 2026, 3)
}

fn input_tx(vat: Decimal) -> VatTransaction {
    VatTransaction::new(VatDirection::Input, vat * dec!(13.3), vat, 2026, 3)
}

proptest! {
    #[test]
    fn test_vat_liability_never_negative_but_net_keeps_sign(
        output in 0u64..10_000_000u64,
        input in 0u64..10_000_000u64
    ) {
        let aggregator = LiabilityAggregator::new();
        let period = Period::monthly(2026, 3);
        let transactions = vec![
            output_tx(Decimal::from(output)),
            input_tx(Decimal::from(input)),
        ];

        let position = aggregator.vat_position(&period, &transactions);

        prop_assert_eq!(position.net, Decimal::from(output) - Decimal::from(input));
        prop_assert!(position.liability >= Decimal::ZERO);
        if input > output {
            prop_assert_eq!(position.liability, Decimal::ZERO);
            prop_assert!(position.is_refund_position());
        } else {
            prop_assert_eq!(position.liability, position.net);
        }
    }

    #[test]
    fn test_wht_liability_is_sum_of_in_period_withholdings(
        amounts in proptest::collection::vec(0u64..1_000_000u64, 0..20)
    ) {
        let aggregator = LiabilityAggregator::new();
        let period = Period::monthly(2026, 3);
        let transactions: Vec<WhtTransaction> = amounts
            .iter()
            .map(|amount| {
                WhtTransaction::new(
                    Decimal::from(*amount) * dec!(10),
                    Decimal::from(*amount),
                    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
                )
            })
            .collect();

        let expected: Decimal = amounts.iter().map(|a| Decimal::from(*a)).sum();
        prop_assert_eq!(aggregator.wht_liability(&period, &transactions), expected);
    }
}

#[test]
fn test_exempt_transactions_never_enter_the_netting() {
    let aggregator = LiabilityAggregator::new();
    let period = Period::monthly(2026, 3);
    let transactions = vec![
        output_tx(dec!(150000)),
        output_tx(dec!(60000)).exempted(),
        input_tx(dec!(37500)),
        input_tx(dec!(20000)).exempted(),
    ];

    let position = aggregator.vat_position(&period, &transactions);
    assert_eq!(position.output_vat, dec!(150000));
    assert_eq!(position.input_vat, dec!(37500));
    assert_eq!(position.liability, dec!(112500));
}

#[test]
fn test_transactions_outside_the_month_are_ignored() {
    let aggregator = LiabilityAggregator::new();
    let period = Period::monthly(2026, 3);
    let transactions = vec![
        output_tx(dec!(100000)),
        VatTransaction::new(VatDirection::Output, dec!(500000), dec!(37500), 2026, 4),
        VatTransaction::new(VatDirection::Output, dec!(500000), dec!(37500), 2025, 3),
    ];

    let position = aggregator.vat_position(&period, &transactions);
    assert_eq!(position.output_vat, dec!(100000));
}

#[test]
fn test_annual_period_spans_all_months_of_the_year() {
    let aggregator = LiabilityAggregator::new();
    let period = Period::annual(2026);
    let transactions = vec![
        VatTransaction::new(VatDirection::Output, dec!(100), dec!(7500), 2026, 1),
        VatTransaction::new(VatDirection::Output, dec!(100), dec!(7500), 2026, 12),
        VatTransaction::new(VatDirection::Output, dec!(100), dec!(7500), 2027, 1),
    ];

    let position = aggregator.vat_position(&period, &transactions);
    assert_eq!(position.output_vat, dec!(15000));
}

#[test]
fn test_wht_boundary_date_belongs_to_containing_period() {
    let aggregator = LiabilityAggregator::new();
    let transactions = vec![
        WhtTransaction::new(
            dec!(1000000),
            dec!(50000),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
        ),
        WhtTransaction::new(
            dec!(1000000),
            dec!(70000),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        ),
    ];

    assert_eq!(
        aggregator.wht_liability(&Period::monthly(2026, 2), &transactions),
        dec!(50000)
    );
    assert_eq!(
        aggregator.wht_liability(&Period::monthly(2026, 3), &transactions),
        dec!(70000)
    );
}

#[test]
fn test_liability_for_dispatches_per_instrument() {
    let aggregator = LiabilityAggregator::new();
    let regime = test_regime();
    let records = PeriodRecords {
        gross_income: dec!(1000000),
        deductions: StatutoryDeductions::default(),
        vat_transactions: vec![output_tx(dec!(150000)), input_tx(dec!(30000))],
        wht_transactions: vec![WhtTransaction::new(
            dec!(400000),
            dec!(20000),
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        )],
    };

    let pit = aggregator
        .liability_for(
            TaxInstrument::Pit,
            &Period::annual(2026),
            &records,
            &regime,
        )
        .unwrap();
    assert_eq!(pit, dec!(114000));

    let vat = aggregator
        .liability_for(
            TaxInstrument::Vat,
            &Period::monthly(2026, 3),
            &records,
            &regime,
        )
        .unwrap();
    assert_eq!(vat, dec!(120000));

    let wht = aggregator
        .liability_for(
            TaxInstrument::Wht,
            &Period::monthly(2026, 3),
            &records,
            &regime,
        )
        .unwrap();
    assert_eq!(wht, dec!(20000));
}

#[test]
fn test_empty_period_resolves_to_zero_everywhere() {
    let aggregator = LiabilityAggregator::new();
    let regime = test_regime();
    let records = PeriodRecords::default();
    let period = Period::monthly(2026, 3);

    for instrument in [TaxInstrument::Vat, TaxInstrument::Wht] {
        let amount = aggregator
            .liability_for(instrument, &period, &records, &regime)
            .unwrap();
        assert_eq!(amount, Decimal::ZERO);
    }
}
