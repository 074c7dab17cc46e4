//! Process configuration, read once at startup.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("${0} must be set")]
    Missing(&'static str),
    #[error("${name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Slack incoming-webhook URL messages are posted to.
    pub slack_webhook_url: String,
    /// Reserved for verifying inbound webhooks, not checked yet.
    pub access_token: Option<String>,
}

impl Config {
    /// Reads the configuration from the environment, loading `.env` first if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| dotenv::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port = required("PORT")?;
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: port.clone(),
            })?;

        let slack_webhook_url = required("SLACK_WEBHOOK_URL")?;
        let access_token = lookup("ACCESS_TOKEN").filter(|value| !value.trim().is_empty());

        Ok(Self {
            port,
            slack_webhook_url,
            access_token,
        })
    }
}
