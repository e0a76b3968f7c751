//! An in-process implementation of the remote expense service.
//!
//! The app is normally pointed at a hosted mock API. This module provides the
//! same surface locally for development and tests: JSON CRUD for expenses and
//! budgets plus the user lookup the mock login depends on. Like the hosted
//! service, it accepts any bearer token without checking it and answers
//! unknown ids with a 404 and a bare `"Not found"` body.

mod handlers;

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    routing::{get, put},
};

use crate::{
    Error, endpoints,
    models::{Budget, Expense, RawAmount, UserRecord},
};

/// The password of the seeded demo user.
pub const DEMO_PASSWORD: &str = "password123";

/// The email (and username) of the seeded demo user.
pub const DEMO_EMAIL: &str = "demo@example.com";

#[derive(Debug, Default)]
struct Records {
    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
    users: Vec<UserRecord>,
    next_id: u64,
}

/// The shared record set behind the mock API's handlers.
#[derive(Debug, Clone)]
pub struct MockApiState {
    records: Arc<Mutex<Records>>,
}

impl MockApiState {
    /// Create a state with no records.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Records {
                next_id: 1,
                ..Records::default()
            })),
        }
    }

    /// Create a state seeded with a demo user and example budgets, enough to
    /// log in and exercise the client end to end.
    pub fn seeded() -> Self {
        let state = Self::new();

        {
            let mut records = state.records.lock().expect("fresh lock cannot be poisoned");

            records.users.push(UserRecord {
                id: "1".to_owned(),
                name: "Demo User".to_owned(),
                email: DEMO_EMAIL.to_owned(),
                username: DEMO_EMAIL.to_owned(),
                password: DEMO_PASSWORD.to_owned(),
            });

            let budgets = [
                ("1", "Food", "300", "250"),
                ("2", "Transportation", "150", "85"),
                ("3", "Entertainment", "200", "195"),
            ];
            records
                .budgets
                .extend(budgets.into_iter().map(|(id, category, limit, current)| Budget {
                    id: id.to_owned(),
                    category: category.to_owned(),
                    limit: RawAmount::from(limit),
                    current_amount: RawAmount::from(current),
                    period: "Monthly".to_owned(),
                }));

            records.next_id = 4;
        }

        state
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Records>, Error> {
        self.records.lock().map_err(|_| Error::RecordLock)
    }
}

impl Default for MockApiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Return a router serving the full mock API surface.
pub fn build_router(state: MockApiState) -> Router {
    Router::new()
        .route(
            endpoints::EXPENSES,
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            endpoints::EXPENSE,
            get(handlers::get_expense)
                .put(handlers::update_expense)
                .delete(handlers::delete_expense),
        )
        .route(
            endpoints::BUDGETS,
            get(handlers::list_budgets).post(handlers::create_budget),
        )
        .route(
            endpoints::BUDGET,
            put(handlers::update_budget).delete(handlers::delete_budget),
        )
        .route(endpoints::USERS, get(handlers::find_users))
        .with_state(state)
}
