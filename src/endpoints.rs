//! The remote expense service's endpoint URIs.
//!
//! For endpoints that take an id parameter, use [format_endpoint].

/// The route to list and create expenses.
pub const EXPENSES: &str = "/expenses";
/// The route to get, replace, or delete a single expense.
pub const EXPENSE: &str = "/expenses/{id}";
/// The route to list and create budgets.
pub const BUDGETS: &str = "/budgets";
/// The route to replace or delete a single budget.
pub const BUDGET: &str = "/budgets/{id}";
/// The route to look up users by username.
pub const USERS: &str = "/users";

/// Replace the `{id}` parameter in `endpoint` with a concrete id.
pub fn format_endpoint(endpoint: &str, id: &str) -> String {
    endpoint.replace("{id}", id)
}

#[cfg(test)]
mod tests {
    use super::{EXPENSE, format_endpoint};

    #[test]
    fn format_endpoint_substitutes_the_id() {
        assert_eq!(format_endpoint(EXPENSE, "42"), "/expenses/42");
    }
}
