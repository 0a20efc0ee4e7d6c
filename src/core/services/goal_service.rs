use chrono::Datelike;

use crate::dashboard::{Company, Dashboard, Monetary, MonthlyGoal, Revenue};

/// Recomputes monthly-goal progress from the revenue ledger.
///
/// The persisted `current_amount` is treated as a cache only; every read
/// path refreshes it from the matching revenues first.
pub struct GoalService;

impl GoalService {
    /// Recomputes and stores `current_amount` for one goal, returning the
    /// new value. Matching revenues share the goal's company and calendar
    /// month; balance transfers never count towards a goal.
    pub fn refresh(goal: &mut MonthlyGoal, revenues: &[Revenue]) -> f64 {
        let company = Company::parse(&goal.company);
        let total: f64 = revenues
            .iter()
            .filter(|revenue| !revenue.is_balance_transfer())
            .filter(|revenue| company.matches(&revenue.company))
            .filter(|revenue| {
                revenue
                    .date
                    .map(|date| date.month() == goal.month && date.year() == goal.year)
                    .unwrap_or(false)
            })
            .map(|revenue| revenue.resolved_amount())
            .sum();
        goal.current_amount = total;
        total
    }

    /// Refreshes every goal on the dashboard.
    pub fn refresh_all(dashboard: &mut Dashboard) {
        let Dashboard {
            ref mut goals,
            ref revenues,
            ..
        } = *dashboard;
        for goal in goals.iter_mut() {
            Self::refresh(goal, revenues);
        }
    }
}
