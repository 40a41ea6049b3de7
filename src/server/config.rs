use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Insert demo restaurants and pizzas on startup when both tables are empty.
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables fall back to their defaults. `DB_URI` is read when
    /// `DATABASE_URL` is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let port = match var("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let seed_database = match var("SEED_DATABASE") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidEnvVar {
                name: "SEED_DATABASE".to_string(),
                value,
            })?,
            None => false,
        };

        Ok(Self {
            database_url: var("DATABASE_URL")
                .or_else(|| var("DB_URI"))
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed_database,
        })
    }

    /// Address the HTTP listener binds to, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
