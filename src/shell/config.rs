//! Service configuration read from the environment.
//!
//! - `BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `RESEND_API_KEY`: email API key; unset or empty disables confirmations
//! - `RESEND_API_URL`: email endpoint (default `https://api.resend.com/emails`)
//! - `NOTIFICATION_FROM`: sender address (default `Bookings <noreply@yourdomain.com>`)
//! - `EMAIL_TIMEOUT_SECS`: email request timeout in seconds (default 10)

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::shared::infrastructure::email_sender::resend::{DEFAULT_RESEND_API_URL, ResendConfig};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_NOTIFICATION_FROM: &str = "Bookings <noreply@yourdomain.com>";
const DEFAULT_EMAIL_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` when no API key is configured.
    pub resend: Option<ResendConfig>,
    pub notification_from: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr_raw = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: bind_addr_raw.clone(),
            })?;

        let timeout_secs = match var("EMAIL_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "EMAIL_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_EMAIL_TIMEOUT_SECS,
        };

        let resend = var("RESEND_API_KEY").map(|api_key| ResendConfig {
            api_url: var("RESEND_API_URL").unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        });

        Ok(Self {
            bind_addr,
            resend,
            notification_from: var("NOTIFICATION_FROM")
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_FROM.to_string()),
        })
    }
}
