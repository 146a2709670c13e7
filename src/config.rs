use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL"))?,
        })
    }
}
