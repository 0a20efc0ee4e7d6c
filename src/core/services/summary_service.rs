use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::currency::{format_amount, CurrencyCode, LocaleConfig};
use crate::dashboard::{
    filter_by_period, Expense, ExpenseCategory, Monetary, Period, Revenue,
};

/// Totals for one period window, as shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodSummary {
    pub revenue_total: f64,
    pub expense_total: f64,
    pub profit: f64,
}

impl PeriodSummary {
    pub fn formatted_profit(&self, locale: &LocaleConfig, currency: &CurrencyCode) -> String {
        format_amount(self.profit, locale, currency)
    }
}

/// Read-only aggregations over the in-memory record set.
pub struct SummaryService;

impl SummaryService {
    /// Revenue minus expense for the given period window. Balance-transfer
    /// revenues are not income and stay out of the revenue side. An
    /// unusable custom selector yields an empty window, hence zero.
    pub fn profit_for_period(
        expenses: &[Expense],
        revenues: &[Revenue],
        period: Period,
        now: NaiveDateTime,
    ) -> f64 {
        let summary = Self::summarize_period(expenses, revenues, period, now);
        summary.profit
    }

    /// Revenue, expense, and profit totals for the given period window.
    pub fn summarize_period(
        expenses: &[Expense],
        revenues: &[Revenue],
        period: Period,
        now: NaiveDateTime,
    ) -> PeriodSummary {
        let revenue_total: f64 = filter_by_period(revenues, period, now)
            .into_iter()
            .filter(|revenue| !revenue.is_balance_transfer())
            .map(|revenue| revenue.resolved_amount())
            .sum();
        let expense_total: f64 = filter_by_period(expenses, period, now)
            .into_iter()
            .map(|expense| expense.resolved_amount())
            .sum();
        PeriodSummary {
            revenue_total,
            expense_total,
            profit: revenue_total - expense_total,
        }
    }

    /// Groups resolved expense amounts under their normalized category.
    /// Zero-total buckets are dropped before chart rendering.
    pub fn distribution_by_category(expenses: &[Expense]) -> BTreeMap<ExpenseCategory, f64> {
        let mut distribution: BTreeMap<ExpenseCategory, f64> = BTreeMap::new();
        for expense in expenses {
            let category = ExpenseCategory::parse(expense.category.as_deref());
            *distribution.entry(category).or_insert(0.0) += expense.resolved_amount();
        }
        distribution.retain(|_, total| *total != 0.0);
        distribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn at_noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn profit_is_zero_for_empty_record_sets() {
        let now = at_noon(2024, 6, 1);
        for period in [
            Period::Today,
            Period::Week,
            Period::Month,
            Period::Year,
            Period::Custom { month: 2, year: 2024 },
        ] {
            assert_eq!(SummaryService::profit_for_period(&[], &[], period, now), 0.0);
        }
    }

    #[test]
    fn transfer_revenues_stay_out_of_the_revenue_total() {
        let owner = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let ordinary = Revenue::new("camerino", date, 100.0, "vendas", owner);
        let mut transfer = Revenue::new("camerino", date, 900.0, "aporte", owner);
        transfer.category = Some("EM_CONTA".into());

        let summary = SummaryService::summarize_period(
            &[],
            &[ordinary, transfer],
            Period::Year,
            at_noon(2024, 6, 1),
        );
        assert_eq!(summary.revenue_total, 100.0);
        assert_eq!(summary.profit, 100.0);
    }

    #[test]
    fn invalid_custom_selector_yields_zero_profit() {
        let owner = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let revenues = [Revenue::new("camerino", date, 100.0, "vendas", owner)];
        let profit = SummaryService::profit_for_period(
            &[],
            &revenues,
            Period::Custom { month: 0, year: 2024 },
            at_noon(2024, 6, 1),
        );
        assert_eq!(profit, 0.0);
    }
}
