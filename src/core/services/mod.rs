pub mod balance_service;
pub mod expense_service;
pub mod goal_service;
pub mod revenue_service;
pub mod summary_service;

pub use balance_service::BalanceService;
pub use expense_service::ExpenseService;
pub use goal_service::GoalService;
pub use revenue_service::RevenueService;
pub use summary_service::{PeriodSummary, SummaryService};

use crate::errors::DashboardError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] DashboardError),
    #[error("{0}")]
    Invalid(String),
}
