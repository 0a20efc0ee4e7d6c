use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A per-company monthly revenue goal.
///
/// `current_amount` is persisted for convenience but never trusted: the
/// goal service recomputes it from the revenue ledger before display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyGoal {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valor_meta")]
    pub target_amount: f64,
    #[serde(default, rename = "valor_atual")]
    pub current_amount: f64,
    #[serde(default, rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "mes")]
    pub month: u32,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(default, rename = "cor")]
    pub color: Option<String>,
    #[serde(rename = "user_id")]
    pub owner_id: Uuid,
}

impl MonthlyGoal {
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        target_amount: f64,
        month: u32,
        year: i32,
        owner_id: Uuid,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            category: None,
            company: company.into(),
            month,
            year,
            color: None,
            owner_id,
        }
    }

    /// Progress towards the target, capped at 100 for display.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        ((self.current_amount / self.target_amount) * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_capped_and_safe_for_zero_targets() {
        let mut goal = MonthlyGoal::new("Meta maio", "camerino", 1000.0, 5, 2024, Uuid::new_v4());
        goal.current_amount = 250.0;
        assert_eq!(goal.progress_percent(), 25.0);
        goal.current_amount = 2500.0;
        assert_eq!(goal.progress_percent(), 100.0);
        goal.target_amount = 0.0;
        assert_eq!(goal.progress_percent(), 0.0);
    }
}
