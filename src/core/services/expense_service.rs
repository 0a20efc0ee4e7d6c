//! Business logic helpers for managing expenses.

use crate::core::services::{ServiceError, ServiceResult};
use crate::dashboard::{Dashboard, Expense};

/// Provides validated CRUD helpers for dashboard expenses.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates and adds a new expense, returning its identifier.
    pub fn add(dashboard: &mut Dashboard, expense: Expense) -> ServiceResult<i64> {
        validate(&expense)?;
        let id = dashboard.add_expense(expense);
        tracing::info!(id, "expense recorded");
        Ok(id)
    }

    /// Replaces the mutable fields of the expense identified by `id` via
    /// the provided mutator, then revalidates the result.
    pub fn update<F>(dashboard: &mut Dashboard, id: i64, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Expense),
    {
        let expense = dashboard
            .expense_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))?;
        let mut updated = expense.clone();
        mutator(&mut updated);
        validate(&updated)?;
        *expense = updated;
        dashboard.touch();
        Ok(())
    }

    /// Removes the expense identified by `id`, returning the removed record.
    pub fn remove(dashboard: &mut Dashboard, id: i64) -> ServiceResult<Expense> {
        dashboard
            .remove_expense(id)
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))
    }

    /// Returns a snapshot of the dashboard's expenses.
    pub fn list(dashboard: &Dashboard) -> Vec<&Expense> {
        dashboard.expenses.iter().collect()
    }
}

fn validate(expense: &Expense) -> ServiceResult<()> {
    if expense.company.trim().is_empty() {
        return Err(ServiceError::Invalid("Expense requires a company".into()));
    }
    match expense.amount {
        Some(amount) if amount.is_finite() && amount >= 0.0 => {}
        Some(_) => {
            return Err(ServiceError::Invalid(
                "Expense amount must be a non-negative number".into(),
            ))
        }
        None => return Err(ServiceError::Invalid("Expense requires an amount".into())),
    }
    if let (Some(amount), Some(total)) = (expense.amount, expense.total_amount) {
        if total < amount {
            return Err(ServiceError::Invalid(
                "Total amount cannot be below the base amount".into(),
            ));
        }
    }
    Ok(())
}
