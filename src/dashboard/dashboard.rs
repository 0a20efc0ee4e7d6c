use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::expense::Expense;
use super::goal::MonthlyGoal;
use super::revenue::Revenue;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Persisted running balances for the two pools. The global balance view
/// reads these scalars directly instead of recomputing from the ledger.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredBalances {
    #[serde(default)]
    pub conta: f64,
    #[serde(default)]
    pub cofre: f64,
}

/// Per-tenant container for every record the dashboard works with.
///
/// Mirrors the backend's fetch-all model: views load the whole record set
/// and filter client-side. Mutations replace records wholesale; there is
/// no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub revenues: Vec<Revenue>,
    #[serde(default)]
    pub goals: Vec<MonthlyGoal>,
    #[serde(default)]
    pub balances: StoredBalances,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Dashboard::schema_version_default")]
    pub schema_version: u8,
}

impl Dashboard {
    pub fn new(name: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            owner_id,
            expenses: Vec::new(),
            revenues: Vec::new(),
            goals: Vec::new(),
            balances: StoredBalances::default(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Adds an expense, assigning the next local id when the record arrives
    /// without one, and returns the id.
    pub fn add_expense(&mut self, mut expense: Expense) -> i64 {
        if expense.id == 0 {
            expense.id = next_id(self.expenses.iter().map(|e| e.id));
        }
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn add_revenue(&mut self, mut revenue: Revenue) -> i64 {
        if revenue.id == 0 {
            revenue.id = next_id(self.revenues.iter().map(|r| r.id));
        }
        let id = revenue.id;
        self.revenues.push(revenue);
        self.touch();
        id
    }

    pub fn add_goal(&mut self, mut goal: MonthlyGoal) -> i64 {
        if goal.id == 0 {
            goal.id = next_id(self.goals.iter().map(|g| g.id));
        }
        let id = goal.id;
        self.goals.push(goal);
        self.touch();
        id
    }

    pub fn expense(&self, id: i64) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: i64) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn remove_expense(&mut self, id: i64) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        let removed = self.expenses.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn revenue(&self, id: i64) -> Option<&Revenue> {
        self.revenues.iter().find(|revenue| revenue.id == id)
    }

    pub fn revenue_mut(&mut self, id: i64) -> Option<&mut Revenue> {
        self.revenues.iter_mut().find(|revenue| revenue.id == id)
    }

    pub fn remove_revenue(&mut self, id: i64) -> Option<Revenue> {
        let index = self.revenues.iter().position(|revenue| revenue.id == id)?;
        let removed = self.revenues.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn goal(&self, id: i64) -> Option<&MonthlyGoal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn goal_mut(&mut self, id: i64) -> Option<&mut MonthlyGoal> {
        self.goals.iter_mut().find(|goal| goal.id == id)
    }

    pub fn remove_goal(&mut self, id: i64) -> Option<MonthlyGoal> {
        let index = self.goals.iter().position(|goal| goal.id == id)?;
        let removed = self.goals.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn record_count(&self) -> usize {
        self.expenses.len() + self.revenues.len()
    }

    /// Orders both record collections by filter date, oldest first, the way
    /// the backend returns them. Undated records sort to the front.
    pub fn sort_by_date(&mut self) {
        self.expenses
            .sort_by_key(|expense| expense.due_date.or(expense.date));
        self.revenues.sort_by_key(|revenue| revenue.date);
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

fn next_id(existing: impl Iterator<Item = i64>) -> i64 {
    existing.max().unwrap_or(0) + 1
}
