//! Dashboard domain models, normalizers, and period-filtering helpers.

pub mod category;
pub mod common;
pub mod company;
#[allow(clippy::module_inception)]
pub mod dashboard;
pub mod expense;
pub mod goal;
pub mod period;
pub mod revenue;
pub mod status;

pub use category::ExpenseCategory;
pub use common::{Dated, Monetary};
pub use company::Company;
pub use dashboard::{Dashboard, StoredBalances};
pub use expense::{Expense, PaymentSource};
pub use goal::MonthlyGoal;
pub use period::{filter_by_period, is_in_period, Period, PeriodWindow};
pub use revenue::{Revenue, TRANSFER_TO_CONTA, TRANSFER_TO_COFRE};
pub use status::{classify, TransactionStatus};
