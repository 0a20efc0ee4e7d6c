use chrono::{NaiveDate, NaiveDateTime};
use painel_core::dashboard::{filter_by_period, is_in_period, Expense, Period, Revenue};
use uuid::Uuid;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn expense_on(date: NaiveDate) -> Expense {
    Expense::new("camerino", date, 10.0, Uuid::nil())
}

fn revenue_on(date: NaiveDate) -> Revenue {
    Revenue::new("camerino", date, 10.0, "vendas", Uuid::nil())
}

#[test]
fn today_compares_by_calendar_date_only() {
    let now = at(2024, 3, 15, 10, 0);
    assert!(is_in_period(&expense_on(day(2024, 3, 15)), Period::Today, now));
    assert!(!is_in_period(&expense_on(day(2024, 3, 14)), Period::Today, now));
    assert!(!is_in_period(&expense_on(day(2024, 3, 16)), Period::Today, now));
}

#[test]
fn week_starts_sunday_and_caps_at_now() {
    // 2024-03-13 is a Wednesday; its week runs from Sunday 2024-03-10.
    let now = at(2024, 3, 13, 9, 30);
    assert!(is_in_period(&revenue_on(day(2024, 3, 10)), Period::Week, now));
    assert!(is_in_period(&revenue_on(day(2024, 3, 12)), Period::Week, now));
    assert!(is_in_period(&revenue_on(day(2024, 3, 13)), Period::Week, now));
    // Saturday of the same week is in the future, so it is excluded. This
    // asymmetry against the year window is intentional; do not unify.
    assert!(!is_in_period(&revenue_on(day(2024, 3, 16)), Period::Week, now));
    assert!(!is_in_period(&revenue_on(day(2024, 3, 9)), Period::Week, now));
}

#[test]
fn month_caps_at_now() {
    let now = at(2024, 3, 15, 18, 0);
    assert!(is_in_period(&expense_on(day(2024, 3, 1)), Period::Month, now));
    assert!(is_in_period(&expense_on(day(2024, 3, 15)), Period::Month, now));
    assert!(!is_in_period(&expense_on(day(2024, 3, 20)), Period::Month, now));
    assert!(!is_in_period(&expense_on(day(2024, 2, 29)), Period::Month, now));
}

#[test]
fn year_includes_future_months_of_the_current_year() {
    let now = at(2024, 3, 15, 8, 0);
    assert!(is_in_period(&revenue_on(day(2024, 1, 1)), Period::Year, now));
    assert!(is_in_period(&revenue_on(day(2024, 12, 25)), Period::Year, now));
    assert!(is_in_period(&revenue_on(day(2024, 12, 31)), Period::Year, now));
    assert!(!is_in_period(&revenue_on(day(2023, 12, 31)), Period::Year, now));
    assert!(!is_in_period(&revenue_on(day(2025, 1, 1)), Period::Year, now));
}

#[test]
fn custom_covers_the_requested_month_regardless_of_now() {
    let now = at(2024, 6, 1, 12, 0);
    let february = Period::Custom { month: 2, year: 2024 };
    assert!(is_in_period(&expense_on(day(2024, 2, 1)), february, now));
    assert!(is_in_period(&expense_on(day(2024, 2, 29)), february, now));
    assert!(!is_in_period(&expense_on(day(2024, 3, 1)), february, now));
    assert!(!is_in_period(&expense_on(day(2024, 1, 31)), february, now));
}

#[test]
fn undated_records_are_excluded_from_every_period() {
    let now = at(2024, 3, 15, 12, 0);
    let mut undated = expense_on(day(2024, 3, 15));
    undated.date = None;
    undated.due_date = None;
    for period in [
        Period::Today,
        Period::Week,
        Period::Month,
        Period::Year,
        Period::Custom { month: 3, year: 2024 },
    ] {
        assert!(
            !is_in_period(&undated, period, now),
            "undated record leaked into {period:?}"
        );
    }
}

#[test]
fn due_date_takes_precedence_over_transaction_date() {
    let now = at(2024, 6, 1, 12, 0);
    let mut expense = expense_on(day(2024, 3, 1));
    expense.due_date = Some(day(2024, 4, 10));

    let april = Period::Custom { month: 4, year: 2024 };
    let march = Period::Custom { month: 3, year: 2024 };
    assert!(is_in_period(&expense, april, now));
    assert!(!is_in_period(&expense, march, now));
}

#[test]
fn filter_returns_the_matching_subset_in_order() {
    let now = at(2024, 3, 13, 9, 30);
    let records = vec![
        revenue_on(day(2024, 3, 10)),
        revenue_on(day(2024, 3, 16)),
        revenue_on(day(2024, 3, 12)),
    ];
    let filtered = filter_by_period(&records, Period::Week, now);
    let dates: Vec<_> = filtered.iter().map(|r| r.date.unwrap()).collect();
    assert_eq!(dates, vec![day(2024, 3, 10), day(2024, 3, 12)]);
}
