//! Spendtrack is the data layer of a personal expense tracking app.
//!
//! It owns the session's expense and budget records, derives the dashboard
//! analytics from them, and talks to the remote expense service over JSON.
//! A local implementation of that service is included in [mock_api] for
//! development and tests.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

pub mod api;
pub mod auth;
pub mod budget;
pub mod config;
pub mod dashboard;
pub mod endpoints;
pub mod filter;
pub mod format;
pub mod mock_api;
pub mod models;
pub mod request_guard;
pub mod stores;
pub mod validation;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The email and password combination did not match a registered user.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The requested record could not be found.
    #[error("the requested record could not be found")]
    NotFound,

    /// The remote service could not be reached, or the connection failed
    /// part-way through a request.
    #[error("network error: {0}")]
    Network(String),

    /// The remote service answered with a status code the client does not
    /// know how to handle.
    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),

    /// A record could not be serialized to or deserialized from JSON.
    #[error("could not serialize record: {0}")]
    Serialization(String),

    /// The session files on disk could not be read or written.
    #[error("session storage error: {0}")]
    Storage(String),

    /// The in-memory record set lock was poisoned by a panicking thread.
    #[error("could not acquire the record lock")]
    RecordLock,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) if status == reqwest::StatusCode::NOT_FOUND => Error::NotFound,
            Some(status) => Error::UnexpectedStatus(status.as_u16()),
            None => Error::Network(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Serialization(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Storage(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // The hosted mock API answers unknown ids with a bare JSON string.
            Error::NotFound => (StatusCode::NOT_FOUND, Json("Not found")).into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json("Internal server error"),
                )
                    .into_response()
            }
        }
    }
}
