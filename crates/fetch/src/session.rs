//! Authenticated metric-service session.

use std::collections::BTreeMap;
use std::path::Path;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use panoptes_series::TimeSeries;

use crate::error::FetchError;

/// Path of the login endpoint, relative to the service base URL.
const AUTH_PATH: &str = "/auth/login";

/// Path of the metrics endpoint, relative to the service base URL.
const METRICS_PATH: &str = "/metrics";

/// Login credentials for the metric service.
///
/// Read from a local two-line secrets file: username on the first
/// line, password on the second.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads credentials from a two-line secrets file.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MalformedSecrets`] if either line is
    /// missing or blank, [`FetchError::Io`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let content = std::fs::read_to_string(path)?;
        let mut lines = content.lines().map(str::trim);
        let username = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| FetchError::MalformedSecrets {
                reason: "missing username line".into(),
            })?;
        let password = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| FetchError::MalformedSecrets {
                reason: "missing password line".into(),
            })?;
        Ok(Self::new(username, password))
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for Credentials {
    /// Omits the password from debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct MetricResponse {
    /// Stringified-integer timestamp to stringified numeric value.
    datapoints: BTreeMap<String, String>,
}

/// A short-lived authenticated session with the metric service.
///
/// Created on demand via [`Session::login`] and dropped after use:
/// a scoped acquisition, not ambient global state. The session cookie
/// lives in the underlying client's cookie store.
pub struct Session {
    client: Client,
    base_url: String,
}

impl Session {
    /// Authenticates against the metric service.
    ///
    /// Performs a single blocking login call; failure aborts the run
    /// with no retry.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::AuthFailed`] on a non-success status and
    /// [`FetchError::Http`] on transport failures.
    pub fn login(base_url: &str, credentials: &Credentials) -> Result<Self, FetchError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::builder().cookie_store(true).build()?;

        let url = format!("{base_url}{AUTH_PATH}");
        info!(url = %url, username = %credentials.username, "authenticating");
        let response = client
            .post(&url)
            .json(&LoginRequest {
                username: &credentials.username,
                password: &credentials.password,
            })
            .send()?;

        if !response.status().is_success() {
            return Err(FetchError::AuthFailed {
                status: response.status().as_u16(),
            });
        }

        Ok(Self { client, base_url })
    }

    /// Fetches the datapoints for a metric expression.
    ///
    /// Issues one blocking GET and converts the response's
    /// `datapoints` mapping into a validated [`TimeSeries`].
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`FetchError::FetchFailed`] | non-success HTTP status |
    /// | [`FetchError::Http`] | transport or body-decode failure |
    /// | [`FetchError::MalformedResponse`] | unparsable timestamp or value |
    /// | [`FetchError::Series`] | datapoints fail series validation |
    pub fn fetch_datapoints(&self, expression: &str) -> Result<TimeSeries, FetchError> {
        let url = format!("{}{METRICS_PATH}", self.base_url);
        debug!(url = %url, expression = %expression, "fetching datapoints");
        let response = self
            .client
            .get(&url)
            .query(&[("expression", expression)])
            .send()?;

        if !response.status().is_success() {
            return Err(FetchError::FetchFailed {
                status: response.status().as_u16(),
            });
        }

        let body: MetricResponse = response.json()?;
        let series = datapoints_to_series(&body.datapoints)?;
        info!(n_points = series.len(), "datapoints fetched");
        Ok(series)
    }
}

/// Converts the wire-format datapoints mapping into a time series.
///
/// Keys sort lexicographically in the wire map, so pairs are re-keyed
/// by parsed integer timestamp before series construction.
fn datapoints_to_series(datapoints: &BTreeMap<String, String>) -> Result<TimeSeries, FetchError> {
    let mut pairs = BTreeMap::new();
    for (key, value) in datapoints {
        let t: i64 = key.parse().map_err(|_| FetchError::MalformedResponse {
            reason: format!("bad timestamp key '{key}'"),
        })?;
        let v: f64 = value.parse().map_err(|_| FetchError::MalformedResponse {
            reason: format!("bad value '{value}' at timestamp {t}"),
        })?;
        if pairs.insert(t, v).is_some() {
            return Err(FetchError::MalformedResponse {
                reason: format!("duplicate timestamp {t}"),
            });
        }
    }
    Ok(TimeSeries::from_pairs(pairs)?)
}
