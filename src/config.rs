use crate::error::{Error, Result};
use crate::models::SourceName;
use crate::sources::registry::source_spec;
use std::collections::HashMap;
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub request_timeout_secs: u64,
    pub endpoints: HashMap<SourceName, String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(v) => parse_timeout(&v)?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let endpoints = SourceName::ALL
            .iter()
            .filter_map(|source| {
                env::var(source_spec(*source).endpoint_env)
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (*source, v))
            })
            .collect();

        Ok(Self {
            bind_addr,
            request_timeout_secs,
            endpoints,
        })
    }

    /// The configured endpoint for `source`, falling back to its public API.
    pub fn endpoint(&self, source: SourceName) -> &str {
        self.endpoints
            .get(&source)
            .map(String::as_str)
            .unwrap_or(source_spec(source).default_endpoint)
    }

    pub fn with_endpoint(mut self, source: SourceName, url: impl Into<String>) -> Self {
        self.endpoints.insert(source, url.into());
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            endpoints: HashMap::new(),
        }
    }
}

pub fn parse_timeout(value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(Error::Config(format!(
            "REQUEST_TIMEOUT_SECS must be a positive integer, got {:?}",
            value
        ))),
    }
}
