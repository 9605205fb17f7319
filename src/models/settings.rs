use anyhow::{bail, Context};
use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Server settings, read from `BALANCE_GATEWAY_*` environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    /// Outbound request timeout; `None` leaves requests unbounded
    pub http_timeout: Option<Duration>,
}

impl Settings {
    /// Load settings from the process environment (and `.env` if present)
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("BALANCE_GATEWAY_ENV").as_deref().map(str::to_lowercase) {
            None => Environment::Development,
            Some(value) => match value.as_str() {
                "development" | "dev" => Environment::Development,
                "production" | "prod" => Environment::Production,
                other => bail!(
                    "Invalid BALANCE_GATEWAY_ENV: {}. Expected: development, production",
                    other
                ),
            },
        };

        let host = lookup("BALANCE_GATEWAY_HOST").unwrap_or_else(|| match environment {
            Environment::Production => "0.0.0.0".to_string(),
            Environment::Development => "127.0.0.1".to_string(),
        });

        let port = match lookup("BALANCE_GATEWAY_PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("Invalid BALANCE_GATEWAY_PORT: {}", value))?,
            None => DEFAULT_PORT,
        };

        let http_timeout = match lookup("BALANCE_GATEWAY_HTTP_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value
                    .parse::<u64>()
                    .with_context(|| format!("Invalid BALANCE_GATEWAY_HTTP_TIMEOUT_SECS: {}", value))?;
                if secs == 0 {
                    bail!("BALANCE_GATEWAY_HTTP_TIMEOUT_SECS must be greater than 0");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            environment,
            host,
            port,
            http_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
