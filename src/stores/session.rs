//! On-disk persistence for the logged-in session.
//!
//! The profile and token are written under the app's data directory, keyed as
//! `user` and `token`, and cleared on logout. A session that fails to parse
//! is treated as absent rather than an error, so a corrupt file only costs
//! the user a fresh login.

use std::{fs, io::ErrorKind, path::PathBuf};

use crate::{Error, auth::Session, models::User};

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";

/// Reads and writes the session files for one data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at `dir`. The directory is created on first
    /// save.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Persist the session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<(), Error> {
        fs::create_dir_all(&self.dir)?;

        let user_json = serde_json::to_string(&session.user)?;
        fs::write(self.dir.join(USER_KEY), user_json)?;
        fs::write(self.dir.join(TOKEN_KEY), &session.token)?;

        Ok(())
    }

    /// Load the persisted session, if a complete one exists.
    pub fn load(&self) -> Result<Option<Session>, Error> {
        let Some(user_json) = self.read_key(USER_KEY)? else {
            return Ok(None);
        };
        let Some(token) = self.read_key(TOKEN_KEY)? else {
            return Ok(None);
        };

        let user: User = match serde_json::from_str(&user_json) {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!("discarding unreadable session file: {error}");
                return Ok(None);
            }
        };

        Ok(Some(Session { user, token }))
    }

    /// Remove the persisted session, if any.
    pub fn clear(&self) -> Result<(), Error> {
        for key in [USER_KEY, TOKEN_KEY] {
            match fs::remove_file(self.dir.join(key)) {
                Ok(()) => {}
                Err(error) if error.kind() == ErrorKind::NotFound => {}
                Err(error) => return Err(error.into()),
            }
        }

        Ok(())
    }

    fn read_key(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.dir.join(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }
}
