use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://openlibrary.org";
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub covers_url: String,
    /// Transport timeout for a single page request. `None` leaves it to reqwest.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("BOOK_FINDER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let covers_url =
            lookup("BOOK_FINDER_COVERS_URL").unwrap_or_else(|| DEFAULT_COVERS_URL.to_string());

        let timeout = match lookup("BOOK_FINDER_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "BOOK_FINDER_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => None,
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            covers_url: covers_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}
