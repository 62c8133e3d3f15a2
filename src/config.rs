//! Application configuration management.
//!
//! Configuration comes from environment variables, deserialized into a
//! type-safe struct with the `envy` crate.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// A `.env` file is loaded first if one exists; field names map to
    /// upper-cased variable names (database_url → DATABASE_URL).
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot
    /// be parsed into its field type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }
}
