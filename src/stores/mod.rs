//! Session-scoped stores that own the user's records.

mod budget;
mod expense;
mod session;

pub use budget::BudgetStore;
pub use expense::ExpenseStore;
pub use session::SessionStore;
