use chrono::{NaiveDate, NaiveDateTime};
use painel_core::core::services::SummaryService;
use painel_core::currency::{CurrencyCode, LocaleConfig};
use painel_core::dashboard::{Expense, ExpenseCategory, Period, Revenue};
use uuid::Uuid;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at_noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(12, 0, 0).unwrap()
}

fn expense(date: NaiveDate, amount: f64) -> Expense {
    Expense::new("churrasco", date, amount, Uuid::nil())
}

#[test]
fn yearly_profit_accounts_for_interest_inflated_totals() {
    // 200 revenue against 100 + 80 (total with interest) expenses.
    let mut with_interest = expense(day(2024, 2, 10), 50.0);
    with_interest.total_amount = Some(80.0);
    let expenses = vec![expense(day(2024, 1, 10), 100.0), with_interest];
    let revenues = vec![Revenue::new(
        "churrasco",
        day(2024, 1, 15),
        200.0,
        "vendas",
        Uuid::nil(),
    )];

    let profit = SummaryService::profit_for_period(
        &expenses,
        &revenues,
        Period::Year,
        at_noon(2024, 6, 1),
    );
    assert_eq!(profit, 20.0);
}

#[test]
fn profit_is_zero_for_empty_ledgers_in_every_period() {
    let now = at_noon(2024, 6, 1);
    for period in [
        Period::Today,
        Period::Week,
        Period::Month,
        Period::Year,
        Period::Custom { month: 6, year: 2024 },
    ] {
        assert_eq!(
            SummaryService::profit_for_period(&[], &[], period, now),
            0.0,
            "non-zero profit for {period:?}"
        );
    }
}

#[test]
fn distribution_normalizes_categories_and_drops_empty_buckets() {
    let date = day(2024, 5, 1);
    let mut lowercase_insumos = expense(date, 50.0);
    lowercase_insumos.category = Some("insumos".into());

    let mut total_only = expense(date, 0.0);
    total_only.amount = None;
    total_only.total_amount = Some(30.0);
    total_only.category = Some("INSUMOS".into());

    let mut unmapped = expense(date, 10.0);
    unmapped.category = Some("outros".into());

    let mut zero_valued = expense(date, 0.0);
    zero_valued.category = Some("FIXAS".into());

    let distribution = SummaryService::distribution_by_category(&[
        lowercase_insumos,
        total_only,
        unmapped,
        zero_valued,
    ]);

    assert_eq!(distribution.get(&ExpenseCategory::Insumos), Some(&80.0));
    assert_eq!(distribution.get(&ExpenseCategory::SemCategoria), Some(&10.0));
    assert!(!distribution.contains_key(&ExpenseCategory::Fixas));
    assert_eq!(distribution.len(), 2);
}

#[test]
fn period_summary_formats_profit_in_brl() {
    let expenses = vec![expense(day(2024, 5, 2), 100.0)];
    let revenues = vec![Revenue::new(
        "churrasco",
        day(2024, 5, 3),
        1334.56,
        "vendas",
        Uuid::nil(),
    )];
    let summary = SummaryService::summarize_period(
        &expenses,
        &revenues,
        Period::Year,
        at_noon(2024, 6, 1),
    );
    assert_eq!(
        summary.formatted_profit(&LocaleConfig::default(), &CurrencyCode::default()),
        "R$ 1.234,56"
    );
}
