//! The HTTP client for the remote expense service.
//!
//! The service is an opaque external collaborator speaking JSON. The record
//! stores and the login flow depend on the [ExpenseApi] and [UserApi] traits
//! rather than on [RestClient] directly, so tests can substitute an in-memory
//! implementation.

use reqwest::Client;

use crate::{
    Error, endpoints,
    models::{Expense, NewExpense, UserRecord},
};

/// The expense operations the remote service supports.
///
/// Each call carries the bearer token obtained at login.
#[allow(async_fn_in_trait)]
pub trait ExpenseApi {
    /// Fetch every expense for the session.
    async fn fetch_expenses(&self, token: &str) -> Result<Vec<Expense>, Error>;

    /// Fetch a single expense by id.
    async fn get_expense(&self, id: &str, token: &str) -> Result<Expense, Error>;

    /// Create an expense; the service assigns the id.
    async fn add_expense(&self, expense: &NewExpense, token: &str) -> Result<Expense, Error>;

    /// Replace the expense with the given id.
    async fn update_expense(
        &self,
        id: &str,
        expense: &NewExpense,
        token: &str,
    ) -> Result<Expense, Error>;

    /// Delete the expense with the given id.
    async fn delete_expense(&self, id: &str, token: &str) -> Result<(), Error>;
}

/// The user directory lookup used by the mock login.
#[allow(async_fn_in_trait)]
pub trait UserApi {
    /// Fetch the users whose username matches `username` exactly.
    async fn find_users(&self, username: &str) -> Result<Vec<UserRecord>, Error>;
}

/// A [reqwest]-backed client for the remote service.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn expense_url(&self, id: &str) -> String {
        self.url(&endpoints::format_endpoint(endpoints::EXPENSE, id))
    }
}

impl ExpenseApi for RestClient {
    async fn fetch_expenses(&self, token: &str) -> Result<Vec<Expense>, Error> {
        let expenses = self
            .http
            .get(self.url(endpoints::EXPENSES))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(expenses)
    }

    async fn get_expense(&self, id: &str, token: &str) -> Result<Expense, Error> {
        let expense = self
            .http
            .get(self.expense_url(id))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(expense)
    }

    async fn add_expense(&self, expense: &NewExpense, token: &str) -> Result<Expense, Error> {
        let created = self
            .http
            .post(self.url(endpoints::EXPENSES))
            .bearer_auth(token)
            .json(expense)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(created)
    }

    async fn update_expense(
        &self,
        id: &str,
        expense: &NewExpense,
        token: &str,
    ) -> Result<Expense, Error> {
        let updated = self
            .http
            .put(self.expense_url(id))
            .bearer_auth(token)
            .json(expense)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(updated)
    }

    async fn delete_expense(&self, id: &str, token: &str) -> Result<(), Error> {
        self.http
            .delete(self.expense_url(id))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

impl UserApi for RestClient {
    async fn find_users(&self, username: &str) -> Result<Vec<UserRecord>, Error> {
        let users = self
            .http
            .get(self.url(endpoints::USERS))
            .query(&[("username", username)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::RestClient;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = RestClient::new("http://localhost:3000/");
        assert_eq!(client.url("/expenses"), "http://localhost:3000/expenses");

        let client = RestClient::new("http://localhost:3000");
        assert_eq!(
            client.expense_url("7"),
            "http://localhost:3000/expenses/7"
        );
    }
}
