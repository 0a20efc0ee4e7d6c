//! Business logic helpers for managing revenues.

use crate::core::services::{ServiceError, ServiceResult};
use crate::dashboard::{Dashboard, Revenue};

/// Provides validated CRUD helpers for dashboard revenues.
pub struct RevenueService;

impl RevenueService {
    /// Validates and adds a new revenue, returning its identifier.
    ///
    /// A balance-transfer revenue does not touch the stored balances here;
    /// callers follow up with [`super::BalanceService::apply_transfer`] as a
    /// separate step, matching the backend's two-round-trip flow.
    pub fn add(dashboard: &mut Dashboard, revenue: Revenue) -> ServiceResult<i64> {
        validate(&revenue)?;
        let id = dashboard.add_revenue(revenue);
        tracing::info!(id, "revenue recorded");
        Ok(id)
    }

    /// Replaces the mutable fields of the revenue identified by `id` via
    /// the provided mutator, then revalidates the result.
    pub fn update<F>(dashboard: &mut Dashboard, id: i64, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Revenue),
    {
        let revenue = dashboard
            .revenue_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Revenue not found".into()))?;
        let mut updated = revenue.clone();
        mutator(&mut updated);
        validate(&updated)?;
        *revenue = updated;
        dashboard.touch();
        Ok(())
    }

    /// Removes the revenue identified by `id`, returning the removed record.
    pub fn remove(dashboard: &mut Dashboard, id: i64) -> ServiceResult<Revenue> {
        dashboard
            .remove_revenue(id)
            .ok_or_else(|| ServiceError::Invalid("Revenue not found".into()))
    }

    /// Returns a snapshot of the dashboard's revenues.
    pub fn list(dashboard: &Dashboard) -> Vec<&Revenue> {
        dashboard.revenues.iter().collect()
    }
}

fn validate(revenue: &Revenue) -> ServiceResult<()> {
    if revenue.company.trim().is_empty() {
        return Err(ServiceError::Invalid("Revenue requires a company".into()));
    }
    if revenue
        .description
        .as_deref()
        .map(str::trim)
        .unwrap_or("")
        .is_empty()
    {
        return Err(ServiceError::Invalid(
            "Revenue requires a description".into(),
        ));
    }
    match revenue.amount {
        Some(amount) if amount.is_finite() && amount >= 0.0 => Ok(()),
        Some(_) => Err(ServiceError::Invalid(
            "Revenue amount must be a non-negative number".into(),
        )),
        None => Err(ServiceError::Invalid("Revenue requires an amount".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sample_revenue(owner: Uuid) -> Revenue {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        Revenue::new("johnny", date, 320.0, "vendas do dia", owner)
    }

    #[test]
    fn add_rejects_missing_description() {
        let mut dashboard = Dashboard::new("Receitas", Uuid::new_v4());
        let owner = dashboard.owner_id;
        let mut revenue = sample_revenue(owner);
        revenue.description = Some("   ".into());
        let err = RevenueService::add(&mut dashboard, revenue)
            .expect_err("blank description must fail");
        assert!(matches!(err, ServiceError::Invalid(ref m) if m.contains("description")));
    }

    #[test]
    fn crud_roundtrip() {
        let mut dashboard = Dashboard::new("Receitas", Uuid::new_v4());
        let owner = dashboard.owner_id;
        let id = RevenueService::add(&mut dashboard, sample_revenue(owner)).unwrap();

        RevenueService::update(&mut dashboard, id, |revenue| {
            revenue.amount = Some(400.0);
        })
        .unwrap();
        assert_eq!(dashboard.revenue(id).unwrap().amount, Some(400.0));

        let removed = RevenueService::remove(&mut dashboard, id).unwrap();
        assert_eq!(removed.id, id);
        assert!(dashboard.revenue(id).is_none());
    }
}
