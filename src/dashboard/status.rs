use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::expense::Expense;

/// Lifecycle state of a transaction as shown on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionStatus {
    #[serde(rename = "PAGO")]
    Pago,
    #[serde(rename = "PENDENTE")]
    Pendente,
    #[serde(rename = "ATRASADO")]
    Atrasado,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pago => "PAGO",
            TransactionStatus::Pendente => "PENDENTE",
            TransactionStatus::Atrasado => "ATRASADO",
        }
    }
}

/// Classifies an expense against the reference date.
///
/// Precedence, first match wins:
/// 1. explicit `PAGO` marker;
/// 2. `ATRASADOS` category, regardless of any due date;
/// 3. due date strictly before today;
/// 4. transaction date strictly after today;
/// 5. fallback to pending. Paid is never inferred from dates alone.
pub fn classify(expense: &Expense, today: NaiveDate) -> TransactionStatus {
    if expense.is_paid() {
        return TransactionStatus::Pago;
    }
    if ExpenseCategory::parse(expense.category.as_deref()) == ExpenseCategory::Atrasados {
        return TransactionStatus::Atrasado;
    }
    if let Some(due) = expense.due_date {
        if due < today {
            return TransactionStatus::Atrasado;
        }
    }
    if let Some(date) = expense.date {
        if date > today {
            return TransactionStatus::Pendente;
        }
    }
    TransactionStatus::Pendente
}
