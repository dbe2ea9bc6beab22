use super::*;
use crate::recurrence::{expand_records, LedgerRecord, Occurrence, OccurrenceSource};
use crate::transactions::{DateRange, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn income(day: NaiveDate, amount: Decimal) -> Occurrence {
    Occurrence {
        date: day,
        kind: TransactionKind::Income,
        amount,
        source: OccurrenceSource::OneOff(format!("in-{}", day)),
    }
}

fn expense(day: NaiveDate, amount: Decimal) -> Occurrence {
    Occurrence {
        date: day,
        kind: TransactionKind::Expense,
        amount,
        source: OccurrenceSource::OneOff(format!("out-{}", day)),
    }
}

#[test]
fn test_aggregate_sums_same_day_buckets() {
    let occurrences = vec![
        income(date(2024, 3, 5), dec!(100)),
        income(date(2024, 3, 5), dec!(50)),
        expense(date(2024, 3, 5), dec!(30)),
        expense(date(2024, 3, 5), dec!(20)),
    ];

    let ledger = aggregate(&occurrences);
    assert_eq!(ledger.len(), 1);
    let day = ledger.get(date(2024, 3, 5)).unwrap();
    assert_eq!(day.income, dec!(150));
    assert_eq!(day.expense, dec!(50));
    assert_eq!(day.net(), dec!(100));
}

#[test]
fn test_aggregate_only_creates_days_with_activity() {
    let ledger = aggregate(&[income(date(2024, 3, 1), dec!(1)), expense(date(2024, 3, 9), dec!(1))]);
    assert_eq!(ledger.len(), 2);
    assert!(ledger.get(date(2024, 3, 2)).is_none());
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn test_build_trajectory_runs_from_opening_balance() {
    let ledger = aggregate(&[
        expense(date(2024, 3, 10), dec!(500)),
        income(date(2024, 3, 5), dec!(2000)),
    ]);

    let series = build_trajectory(&ledger, dec!(1000));
    assert_eq!(series.opening_balance, dec!(1000));
    assert_eq!(
        series.points,
        vec![
            BalancePoint {
                date: date(2024, 3, 5),
                balance: dec!(3000)
            },
            BalancePoint {
                date: date(2024, 3, 10),
                balance: dec!(2500)
            },
        ]
    );
    assert_eq!(series.last_balance(), dec!(2500));
}

#[test]
fn test_balance_lookups_carry_forward() {
    let ledger = aggregate(&[
        income(date(2024, 3, 5), dec!(2000)),
        expense(date(2024, 3, 10), dec!(500)),
    ]);
    let series = build_trajectory(&ledger, dec!(1000));

    assert_eq!(series.balance_on(date(2024, 3, 5)), Some(dec!(3000)));
    assert_eq!(series.balance_on(date(2024, 3, 6)), None);
    assert_eq!(series.balance_as_of(date(2024, 3, 4)), dec!(1000));
    assert_eq!(series.balance_as_of(date(2024, 3, 7)), dec!(3000));
    assert_eq!(series.balance_as_of(date(2024, 3, 31)), dec!(2500));
}

#[test]
fn test_empty_trajectory_keeps_opening_balance() {
    let series = build_trajectory(&DailyLedger::new(), dec!(42));
    assert!(series.is_empty());
    assert_eq!(series.last_balance(), dec!(42));
}

#[test]
fn test_balance_continuity() {
    let ledger = aggregate(&[
        income(date(2024, 3, 1), dec!(10)),
        expense(date(2024, 3, 2), dec!(3)),
        income(date(2024, 3, 4), dec!(7.5)),
        expense(date(2024, 3, 4), dec!(1.25)),
    ]);
    let series = build_trajectory(&ledger, dec!(0));

    for pair in series.points.windows(2) {
        let totals = ledger.get(pair[1].date).unwrap();
        assert_eq!(pair[1].balance - pair[0].balance, totals.income - totals.expense);
    }
}

#[test]
fn test_out_of_range_one_off_is_excluded_everywhere() {
    let records = vec![
        LedgerRecord::OneOff(income(date(2024, 3, 5), dec!(2000))),
        LedgerRecord::OneOff(expense(date(2024, 3, 20), dec!(999))),
    ];
    let cutoff = date(2024, 3, 15);
    let occurrences = expand_records(&records, cutoff);
    let range = DateRange::new(date(2024, 3, 1), cutoff);

    let ledger = aggregate_within(&occurrences, range);
    assert!(ledger.get(date(2024, 3, 20)).is_none());

    let series = build_trajectory(&ledger, Decimal::ZERO);
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.last_balance(), dec!(2000));
}

#[test]
fn test_opening_balance_uses_history_strictly_before_start() {
    let occurrences = vec![
        income(date(2024, 1, 10), dec!(1200)),
        expense(date(2024, 2, 29), dec!(200)),
        income(date(2024, 3, 1), dec!(5000)),
    ];

    assert_eq!(opening_balance(&occurrences, date(2024, 3, 1)), dec!(1000));
    assert_eq!(opening_balance(&occurrences, date(2024, 1, 1)), Decimal::ZERO);
}

#[test]
fn test_period_totals() {
    let ledger = aggregate(&[
        income(date(2024, 3, 5), dec!(2000)),
        expense(date(2024, 3, 10), dec!(500)),
        expense(date(2024, 3, 11), dec!(25)),
    ]);
    let totals = ledger.totals();
    assert_eq!(totals.income, dec!(2000));
    assert_eq!(totals.expense, dec!(525));
    assert_eq!(totals.net, dec!(1475));
}

#[test]
fn test_ledger_serializes_with_date_keys() {
    let ledger = aggregate(&[income(date(2024, 3, 5), dec!(2))]);
    let json = serde_json::to_value(&ledger).unwrap();
    assert!(json.get("2024-03-05").is_some());
}
