use std::env;
use std::net::SocketAddr;

use thiserror::Error;

use crate::event::DEFAULT_EVENT_CAPACITY;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
pub const DEFAULT_LOG_FILTER: &str = "fantasy_cricket=debug,tower_http=debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Allowed CORS origin
    pub frontend_url: String,
    pub event_capacity: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "BIND_ADDR",
                value: bind_addr.clone(),
            })?;

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());

        let event_capacity = match lookup("EVENT_CAPACITY") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "EVENT_CAPACITY",
                    value: raw,
                })?,
            None => DEFAULT_EVENT_CAPACITY,
        };

        Ok(Self {
            bind_addr,
            frontend_url,
            event_capacity,
        })
    }
}
