use chrono::NaiveDateTime;

use crate::dashboard::{is_in_period, Company, Dashboard, Monetary, PaymentSource, Period};

/// Balance queries and updates for the conta/cofre pools.
///
/// Two modes, preserved deliberately: the global balance reads the stored
/// running scalar, while a per-company balance is recomputed from the full
/// ledger on every call. Nothing reconciles the two.
pub struct BalanceService;

impl BalanceService {
    /// Balance of a pool, dispatching on whether a company filter is given.
    pub fn balance(
        dashboard: &Dashboard,
        pool: PaymentSource,
        company: Option<&Company>,
        window: Option<(Period, NaiveDateTime)>,
    ) -> f64 {
        match company {
            None => Self::global(dashboard, pool),
            Some(company) => Self::for_company(dashboard, pool, company, window),
        }
    }

    /// Reads the persisted running balance for the pool.
    pub fn global(dashboard: &Dashboard, pool: PaymentSource) -> f64 {
        match pool {
            PaymentSource::Conta => dashboard.balances.conta,
            PaymentSource::Cofre => dashboard.balances.cofre,
        }
    }

    /// Recomputes a pool balance from the ledger, restricted to one company
    /// and optionally to a period window: transfers into the pool minus
    /// paid expenses funded from it.
    pub fn for_company(
        dashboard: &Dashboard,
        pool: PaymentSource,
        company: &Company,
        window: Option<(Period, NaiveDateTime)>,
    ) -> f64 {
        let in_window = |record: &dyn crate::dashboard::Dated| match window {
            Some((period, now)) => is_in_period(record, period, now),
            None => true,
        };

        let revenue_sum: f64 = dashboard
            .revenues
            .iter()
            .filter(|revenue| revenue.transfer_pool() == Some(pool))
            .filter(|revenue| company.matches(&revenue.company))
            .filter(|revenue| in_window(*revenue))
            .map(|revenue| revenue.resolved_amount())
            .sum();

        let expense_sum: f64 = dashboard
            .expenses
            .iter()
            .filter(|expense| expense.is_paid())
            .filter(|expense| expense.payment_source == Some(pool))
            .filter(|expense| company.matches(&expense.company))
            .filter(|expense| in_window(*expense))
            .map(|expense| expense.resolved_amount())
            .sum();

        revenue_sum - expense_sum
    }

    /// Credits a transfer into the stored pool balance. This is a separate
    /// round trip from recording the revenue itself; if it never runs the
    /// revenue still exists and the stored scalar lags behind.
    pub fn apply_transfer(dashboard: &mut Dashboard, pool: PaymentSource, amount: f64) {
        match pool {
            PaymentSource::Conta => dashboard.balances.conta += amount,
            PaymentSource::Cofre => dashboard.balances.cofre += amount,
        }
        dashboard.touch();
        tracing::info!(?pool, amount, "transfer applied to stored balance");
    }

    /// Debits a paid expense from the stored pool balance.
    pub fn apply_payment(dashboard: &mut Dashboard, pool: PaymentSource, amount: f64) {
        match pool {
            PaymentSource::Conta => dashboard.balances.conta -= amount,
            PaymentSource::Cofre => dashboard.balances.cofre -= amount,
        }
        dashboard.touch();
        tracing::info!(?pool, amount, "payment debited from stored balance");
    }
}
