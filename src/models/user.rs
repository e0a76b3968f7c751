//! The user account models.

use serde::{Deserialize, Serialize};

/// A logged-in user's profile, the shape persisted in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The unique id of the user.
    pub id: String,
    /// The user's display name.
    pub name: String,
    /// The email address the user logs in with.
    pub email: String,
    /// The username held by the remote user directory.
    pub username: String,
}

/// A user as stored by the remote user directory.
///
/// Unlike [User], this carries the plaintext `password` field the mock login
/// compares against. It never leaves the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// The unique id of the user.
    pub id: String,
    /// The user's display name.
    pub name: String,
    /// The email address on record.
    pub email: String,
    /// The username the directory is queried by.
    pub username: String,
    /// The plaintext mock password.
    pub password: String,
}

impl UserRecord {
    /// Drop the password field, leaving the profile that is safe to persist.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            username: self.username,
        }
    }
}
