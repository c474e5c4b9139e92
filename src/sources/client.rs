use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{RawProblem, SourceName};
use crate::sources::provider::ProblemSource;
use crate::sources::registry::source_spec;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Single-shot HTTP adapter for every registered question bank.
pub struct HttpSourceClient {
    client: Client,
    endpoints: [String; SourceName::ALL.len()],
}

impl HttpSourceClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(BROWSER_USER_AGENT),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(
            header::CONNECTION,
            header::HeaderValue::from_static("keep-alive"),
        );
        headers.insert(
            header::CACHE_CONTROL,
            header::HeaderValue::from_static("no-cache"),
        );
        headers.insert(header::PRAGMA, header::HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let endpoints = SourceName::ALL.map(|source| config.endpoint(source).to_string());

        Ok(Self { client, endpoints })
    }

    pub fn endpoint(&self, source: SourceName) -> &str {
        &self.endpoints[source as usize]
    }
}

#[async_trait]
impl ProblemSource for HttpSourceClient {
    async fn fetch(&self, source: SourceName) -> Result<Vec<RawProblem>> {
        let spec = source_spec(source);
        let url = self.endpoint(source);
        tracing::debug!("Fetching {} listing: {}", source, url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SourceStatus {
                source_name: source,
                status,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Error::ParseError(format!("{} returned invalid JSON: {}", source, e)))?;
        let listing = extract_listing(source, &payload, spec.listing)?;
        let total = listing.len();

        let problems: Vec<RawProblem> = match spec.premium_flag {
            Some(flag) => listing
                .into_iter()
                .filter(|raw| !is_premium(raw, flag))
                .collect(),
            None => listing,
        };

        tracing::info!(
            "Fetched {} questions from {} ({} premium skipped)",
            problems.len(),
            source,
            total - problems.len()
        );
        Ok(problems)
    }
}

/// A missing listing is an empty listing; anything other than an array is a parse error.
fn extract_listing(source: SourceName, payload: &Value, pointer: &str) -> Result<Vec<RawProblem>> {
    match payload.pointer(pointer) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(other) => Err(Error::ParseError(format!(
            "{} listing at {} is not an array (found {})",
            source,
            pointer,
            json_type(other)
        ))),
    }
}

fn is_premium(raw: &RawProblem, flag: &str) -> bool {
    match raw.pointer(flag) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
