//! Mock authentication against the remote user directory.
//!
//! Login looks the user up by username and compares the stored plaintext
//! password for equality, then mints a constant token. This mirrors the
//! public mock API the app ships against; it is explicitly not a real
//! authentication system.

use serde::{Deserialize, Serialize};

use crate::{Error, api::UserApi, models::User, stores::SessionStore};

/// The bearer token minted on every successful login. The mock API does not
/// issue tokens of its own.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// The email and password submitted from the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The email address, used as the directory lookup key.
    pub email: String,
    /// The plaintext password to compare.
    pub password: String,
}

/// A logged-in user and the bearer token attached to subsequent requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The logged-in user's profile.
    pub user: User,
    /// The bearer token for authenticated requests.
    pub token: String,
}

/// Log in against the remote user directory.
///
/// The directory query returns a list; only the first match is considered.
/// Any mismatch, including an unknown email, collapses to
/// [Error::InvalidCredentials] so the form cannot be used to probe which
/// emails exist.
pub async fn log_in<C: UserApi>(client: &C, credentials: &Credentials) -> Result<Session, Error> {
    let users = client.find_users(&credentials.email).await?;

    let Some(record) = users.into_iter().next() else {
        return Err(Error::InvalidCredentials);
    };

    if record.password != credentials.password {
        return Err(Error::InvalidCredentials);
    }

    let mut user = record.into_user();
    // The directory's email field is unreliable; trust the login input.
    user.email = credentials.email.clone();

    Ok(Session {
        user,
        token: MOCK_TOKEN.to_owned(),
    })
}

/// Log out by clearing the persisted session.
pub fn log_out(session_store: &SessionStore) -> Result<(), Error> {
    session_store.clear()
}

#[cfg(test)]
mod tests {
    use super::{Credentials, MOCK_TOKEN, log_in};
    use crate::{Error, api::UserApi, models::UserRecord};

    struct StubDirectory {
        users: Vec<UserRecord>,
    }

    impl UserApi for StubDirectory {
        async fn find_users(&self, username: &str) -> Result<Vec<UserRecord>, Error> {
            Ok(self
                .users
                .iter()
                .filter(|user| user.username == username)
                .cloned()
                .collect())
        }
    }

    fn directory_with_test_user() -> StubDirectory {
        StubDirectory {
            users: vec![UserRecord {
                id: "1".to_owned(),
                name: "Test User".to_owned(),
                email: "old@example.com".to_owned(),
                username: "test@example.com".to_owned(),
                password: "password123".to_owned(),
            }],
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    #[tokio::test]
    async fn log_in_succeeds_with_valid_credentials() {
        let directory = directory_with_test_user();

        let session = log_in(&directory, &credentials("test@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(session.token, MOCK_TOKEN);
        assert_eq!(session.user.name, "Test User");
        // The profile email comes from the login input, not the directory.
        assert_eq!(session.user.email, "test@example.com");
    }

    #[tokio::test]
    async fn log_in_fails_with_wrong_password() {
        let directory = directory_with_test_user();

        let result = log_in(&directory, &credentials("test@example.com", "wrong")).await;

        assert_eq!(result, Err(Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn log_in_fails_with_unknown_email() {
        let directory = directory_with_test_user();

        let result = log_in(&directory, &credentials("nobody@example.com", "password123")).await;

        assert_eq!(result, Err(Error::InvalidCredentials));
    }
}
