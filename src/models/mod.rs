//! The domain models shared by the record stores, the aggregation engine,
//! and the mock API.

mod amount;
mod budget;
mod expense;
mod user;

pub use amount::RawAmount;
pub use budget::{Budget, NewBudget};
pub use expense::{DEFAULT_CATEGORY, Expense, NewExpense};
pub use user::{User, UserRecord};
