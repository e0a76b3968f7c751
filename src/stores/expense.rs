//! The session's expense record store.
//!
//! Owns the in-memory expense collection and mediates every remote operation
//! on it. Consumers receive the store by explicit injection and read the
//! current snapshot through [ExpenseStore::expenses]; aggregation never goes
//! to the network.

use crate::{
    Error,
    api::ExpenseApi,
    filter::{ExpenseFilter, filter_expenses},
    models::{Expense, NewExpense},
    request_guard::RequestGuard,
};

/// The message recorded when a fetch of the expense list fails.
const FETCH_ERROR: &str = "Failed to fetch expenses";

/// The in-memory holder of the session's expenses, backed by the remote
/// service.
///
/// Mutations are serialized by the `&mut self` receiver; full-list fetches
/// additionally pass a [RequestGuard] so that a late response for a
/// superseded fetch can never overwrite newer records.
#[derive(Debug)]
pub struct ExpenseStore<C: ExpenseApi> {
    client: C,
    token: String,
    expenses: Vec<Expense>,
    error: Option<String>,
    fetch_guard: RequestGuard,
}

impl<C: ExpenseApi> ExpenseStore<C> {
    /// Create an empty store for the session identified by `token`.
    pub fn new(client: C, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
            expenses: Vec::new(),
            error: None,
            fetch_guard: RequestGuard::new(),
        }
    }

    /// The current snapshot of the session's expenses.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The snapshot as shown on the list screen: filtered by `filter`,
    /// newest records first.
    pub fn filtered(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        filter_expenses(&self.expenses, filter)
    }

    /// The message from the most recent failed operation, cleared when the
    /// next operation starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the snapshot with the full expense list from the service.
    ///
    /// On failure the previous snapshot is left intact and [Self::error] is
    /// set for the retry affordance on list screens.
    pub async fn fetch(&mut self) -> Result<(), Error> {
        self.error = None;
        let token = self.fetch_guard.issue();

        match self.client.fetch_expenses(&self.token).await {
            Ok(expenses) => {
                if self.fetch_guard.try_apply(token) {
                    self.expenses = expenses;
                } else {
                    tracing::debug!("discarding stale expense list response");
                }
                Ok(())
            }
            Err(error) => {
                tracing::error!("could not fetch expenses: {error}");
                self.error = Some(FETCH_ERROR.to_owned());
                Err(error)
            }
        }
    }

    /// Fetch a single expense by id, without touching the snapshot.
    pub async fn get(&mut self, id: &str) -> Result<Expense, Error> {
        self.error = None;

        self.client
            .get_expense(id, &self.token)
            .await
            .inspect_err(|error| {
                tracing::error!("could not fetch expense {id}: {error}");
                self.error = Some("Failed to fetch expense details".to_owned());
            })
    }

    /// Create an expense on the service and append it to the snapshot.
    pub async fn add(&mut self, expense: &NewExpense) -> Result<Expense, Error> {
        self.error = None;

        match self.client.add_expense(expense, &self.token).await {
            Ok(created) => {
                self.expenses.push(created.clone());
                Ok(created)
            }
            Err(error) => {
                tracing::error!("could not add expense: {error}");
                self.error = Some("Failed to add expense".to_owned());
                Err(error)
            }
        }
    }

    /// Replace the expense with the given id, in the service and the
    /// snapshot.
    pub async fn update(&mut self, id: &str, expense: &NewExpense) -> Result<Expense, Error> {
        self.error = None;

        match self.client.update_expense(id, expense, &self.token).await {
            Ok(updated) => {
                if let Some(existing) = self.expenses.iter_mut().find(|e| e.id == id) {
                    *existing = updated.clone();
                }
                Ok(updated)
            }
            Err(error) => {
                tracing::error!("could not update expense {id}: {error}");
                self.error = Some("Failed to update expense".to_owned());
                Err(error)
            }
        }
    }

    /// Delete the expense with the given id, in the service and the snapshot.
    pub async fn delete(&mut self, id: &str) -> Result<(), Error> {
        self.error = None;

        match self.client.delete_expense(id, &self.token).await {
            Ok(()) => {
                self.expenses.retain(|expense| expense.id != id);
                Ok(())
            }
            Err(error) => {
                tracing::error!("could not delete expense {id}: {error}");
                self.error = Some("Failed to delete expense".to_owned());
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use time::macros::datetime;

    use super::ExpenseStore;
    use crate::{
        Error,
        api::ExpenseApi,
        filter::ExpenseFilter,
        models::{Expense, NewExpense, RawAmount},
    };

    /// An in-memory stand-in for the remote service.
    struct StubApi {
        expenses: Mutex<Vec<Expense>>,
        next_id: Mutex<u64>,
        fail: bool,
    }

    impl StubApi {
        fn with_expenses(expenses: Vec<Expense>) -> Self {
            let next_id = expenses.len() as u64 + 1;
            Self {
                expenses: Mutex::new(expenses),
                next_id: Mutex::new(next_id),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                expenses: Mutex::new(Vec::new()),
                next_id: Mutex::new(1),
                fail: true,
            }
        }

        fn check(&self) -> Result<(), Error> {
            if self.fail {
                Err(Error::Network("connection refused".to_owned()))
            } else {
                Ok(())
            }
        }
    }

    impl ExpenseApi for StubApi {
        async fn fetch_expenses(&self, _token: &str) -> Result<Vec<Expense>, Error> {
            self.check()?;
            Ok(self.expenses.lock().unwrap().clone())
        }

        async fn get_expense(&self, id: &str, _token: &str) -> Result<Expense, Error> {
            self.check()?;
            self.expenses
                .lock()
                .unwrap()
                .iter()
                .find(|expense| expense.id == id)
                .cloned()
                .ok_or(Error::NotFound)
        }

        async fn add_expense(&self, expense: &NewExpense, _token: &str) -> Result<Expense, Error> {
            self.check()?;
            let mut next_id = self.next_id.lock().unwrap();
            let created = expense.clone().into_expense(next_id.to_string());
            *next_id += 1;
            self.expenses.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update_expense(
            &self,
            id: &str,
            expense: &NewExpense,
            _token: &str,
        ) -> Result<Expense, Error> {
            self.check()?;
            let mut expenses = self.expenses.lock().unwrap();
            let existing = expenses
                .iter_mut()
                .find(|expense| expense.id == id)
                .ok_or(Error::NotFound)?;
            *existing = expense.clone().into_expense(id.to_owned());
            Ok(existing.clone())
        }

        async fn delete_expense(&self, id: &str, _token: &str) -> Result<(), Error> {
            self.check()?;
            let mut expenses = self.expenses.lock().unwrap();
            if !expenses.iter().any(|expense| expense.id == id) {
                return Err(Error::NotFound);
            }
            expenses.retain(|expense| expense.id != id);
            Ok(())
        }
    }

    fn sample_expense(id: &str, amount: &str) -> Expense {
        Expense {
            id: id.to_owned(),
            name: "Groceries".to_owned(),
            amount: RawAmount::from(amount),
            created_at: datetime!(2025-06-01 12:00 UTC),
            description: None,
            category: Some("Food".to_owned()),
        }
    }

    fn sample_new_expense(name: &str, amount: &str) -> NewExpense {
        NewExpense {
            name: name.to_owned(),
            amount: RawAmount::from(amount),
            created_at: datetime!(2025-06-02 12:00 UTC),
            description: None,
            category: None,
        }
    }

    #[tokio::test]
    async fn fetch_populates_the_snapshot() {
        let api = StubApi::with_expenses(vec![sample_expense("1", "10")]);
        let mut store = ExpenseStore::new(api, "mock-jwt-token");

        store.fetch().await.unwrap();

        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn filtered_searches_the_snapshot_newest_first() {
        let api = StubApi::with_expenses(vec![
            sample_expense("1", "10"),
            sample_expense("2", "20"),
        ]);
        let mut store = ExpenseStore::new(api, "mock-jwt-token");
        store.fetch().await.unwrap();

        let results = store.filtered(&ExpenseFilter::search("groc"));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "2");

        assert!(store.filtered(&ExpenseFilter::search("rent")).is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_sets_error_and_keeps_prior_snapshot() {
        let api = StubApi::with_expenses(vec![sample_expense("1", "10")]);
        let mut store = ExpenseStore::new(api, "mock-jwt-token");
        store.fetch().await.unwrap();

        // Swap in a failing client while keeping the populated snapshot.
        let mut store = ExpenseStore {
            client: StubApi::failing(),
            ..store
        };

        let result = store.fetch().await;

        assert!(result.is_err());
        assert_eq!(store.error(), Some("Failed to fetch expenses"));
        assert_eq!(store.expenses().len(), 1);
    }

    #[tokio::test]
    async fn error_is_cleared_when_the_next_operation_starts() {
        let mut store = ExpenseStore::new(StubApi::failing(), "mock-jwt-token");
        assert!(store.fetch().await.is_err());
        assert!(store.error().is_some());

        let mut store = ExpenseStore {
            client: StubApi::with_expenses(Vec::new()),
            ..store
        };
        store.fetch().await.unwrap();

        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn add_appends_the_created_record() {
        let mut store = ExpenseStore::new(StubApi::with_expenses(Vec::new()), "mock-jwt-token");

        let created = store.add(&sample_new_expense("Coffee", "4.50")).await.unwrap();

        assert_eq!(created.id, "1");
        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].name, "Coffee");
    }

    #[tokio::test]
    async fn update_replaces_the_matching_record() {
        let api = StubApi::with_expenses(vec![sample_expense("1", "10")]);
        let mut store = ExpenseStore::new(api, "mock-jwt-token");
        store.fetch().await.unwrap();

        let updated = store
            .update("1", &sample_new_expense("Groceries (edited)", "12"))
            .await
            .unwrap();

        assert_eq!(updated.name, "Groceries (edited)");
        assert_eq!(store.expenses()[0].name, "Groceries (edited)");
        assert_eq!(store.expenses()[0].id, "1");
    }

    #[tokio::test]
    async fn delete_removes_the_matching_record() {
        let api = StubApi::with_expenses(vec![
            sample_expense("1", "10"),
            sample_expense("2", "20"),
        ]);
        let mut store = ExpenseStore::new(api, "mock-jwt-token");
        store.fetch().await.unwrap();

        store.delete("1").await.unwrap();

        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].id, "2");
    }

    #[tokio::test]
    async fn get_does_not_touch_the_snapshot() {
        let api = StubApi::with_expenses(vec![sample_expense("1", "10")]);
        let mut store = ExpenseStore::new(api, "mock-jwt-token");

        let expense = store.get("1").await.unwrap();

        assert_eq!(expense.id, "1");
        assert!(store.expenses().is_empty());
    }

    #[tokio::test]
    async fn get_missing_record_reports_not_found() {
        let api = StubApi::with_expenses(Vec::new());
        let mut store = ExpenseStore::new(api, "mock-jwt-token");

        let result = store.get("99").await;

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(store.error(), Some("Failed to fetch expense details"));
    }
}
