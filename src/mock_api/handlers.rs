//! The mock API's request handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use super::MockApiState;
use crate::{
    Error,
    models::{Budget, Expense, NewBudget, NewExpense, UserRecord},
};

/// `GET /expenses`
pub async fn list_expenses(State(state): State<MockApiState>) -> Result<Json<Vec<Expense>>, Error> {
    let records = state.lock()?;

    Ok(Json(records.expenses.clone()))
}

/// `GET /expenses/{id}`
pub async fn get_expense(
    Path(id): Path<String>,
    State(state): State<MockApiState>,
) -> Result<Json<Expense>, Error> {
    let records = state.lock()?;

    records
        .expenses
        .iter()
        .find(|expense| expense.id == id)
        .cloned()
        .map(Json)
        .ok_or(Error::NotFound)
}

/// `POST /expenses`
pub async fn create_expense(
    State(state): State<MockApiState>,
    Json(expense): Json<NewExpense>,
) -> Result<(StatusCode, Json<Expense>), Error> {
    let mut records = state.lock()?;

    let id = records.next_id.to_string();
    records.next_id += 1;

    let created = expense.into_expense(id);
    records.expenses.push(created.clone());

    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /expenses/{id}`
pub async fn update_expense(
    Path(id): Path<String>,
    State(state): State<MockApiState>,
    Json(expense): Json<NewExpense>,
) -> Result<Json<Expense>, Error> {
    let mut records = state.lock()?;

    let existing = records
        .expenses
        .iter_mut()
        .find(|expense| expense.id == id)
        .ok_or(Error::NotFound)?;

    *existing = expense.into_expense(id);

    Ok(Json(existing.clone()))
}

/// `DELETE /expenses/{id}`
pub async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<MockApiState>,
) -> Result<StatusCode, Error> {
    let mut records = state.lock()?;

    if !records.expenses.iter().any(|expense| expense.id == id) {
        return Err(Error::NotFound);
    }

    records.expenses.retain(|expense| expense.id != id);

    Ok(StatusCode::OK)
}

/// `GET /budgets`
pub async fn list_budgets(State(state): State<MockApiState>) -> Result<Json<Vec<Budget>>, Error> {
    let records = state.lock()?;

    Ok(Json(records.budgets.clone()))
}

/// `POST /budgets`
pub async fn create_budget(
    State(state): State<MockApiState>,
    Json(budget): Json<NewBudget>,
) -> Result<(StatusCode, Json<Budget>), Error> {
    let mut records = state.lock()?;

    let id = records.next_id.to_string();
    records.next_id += 1;

    let created = budget.into_budget(id);
    records.budgets.push(created.clone());

    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /budgets/{id}`
pub async fn update_budget(
    Path(id): Path<String>,
    State(state): State<MockApiState>,
    Json(budget): Json<NewBudget>,
) -> Result<Json<Budget>, Error> {
    let mut records = state.lock()?;

    let existing = records
        .budgets
        .iter_mut()
        .find(|budget| budget.id == id)
        .ok_or(Error::NotFound)?;

    *existing = budget.into_budget(id);

    Ok(Json(existing.clone()))
}

/// `DELETE /budgets/{id}`
pub async fn delete_budget(
    Path(id): Path<String>,
    State(state): State<MockApiState>,
) -> Result<StatusCode, Error> {
    let mut records = state.lock()?;

    if !records.budgets.iter().any(|budget| budget.id == id) {
        return Err(Error::NotFound);
    }

    records.budgets.retain(|budget| budget.id != id);

    Ok(StatusCode::OK)
}

/// The query string accepted by the user lookup.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    /// Filter to users whose username matches exactly.
    username: Option<String>,
}

/// `GET /users?username=<email>`
pub async fn find_users(
    Query(query): Query<UserQuery>,
    State(state): State<MockApiState>,
) -> Result<Json<Vec<UserRecord>>, Error> {
    let records = state.lock()?;

    let users = match &query.username {
        Some(username) => records
            .users
            .iter()
            .filter(|user| &user.username == username)
            .cloned()
            .collect(),
        None => records.users.clone(),
    };

    Ok(Json(users))
}
