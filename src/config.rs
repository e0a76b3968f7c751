//! Client configuration.

use std::path::PathBuf;

/// The hosted mock API the app ships against.
pub const DEFAULT_BASE_URL: &str = "https://67ac71475853dfff53dab929.mockapi.io/api/v1";

/// Where the client finds the remote service and keeps its session files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the remote expense service.
    pub base_url: String,
    /// Directory holding the persisted session.
    pub data_dir: PathBuf,
}

impl Config {
    /// Create a config with an explicit base URL and data directory.
    pub fn new(base_url: impl Into<String>, data_dir: PathBuf) -> Self {
        Self {
            base_url: base_url.into(),
            data_dir,
        }
    }

    /// The default data directory: the platform's local data dir, falling
    /// back to the working directory when the platform does not define one.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spendtrack")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Self::default_data_dir())
    }
}
