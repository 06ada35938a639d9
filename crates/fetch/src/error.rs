//! Error types for the panoptes-fetch crate.

/// Error type for all fallible operations in the panoptes-fetch crate.
///
/// Authentication and fetch failures abort the run; callers get no
/// partial results and must not retry through this layer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Returned when the secrets file does not hold a username line
    /// followed by a password line.
    #[error("malformed secrets file: {reason}")]
    MalformedSecrets {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the authentication endpoint rejects the login.
    #[error("authentication failed with status {status}")]
    AuthFailed {
        /// HTTP status code returned by the auth endpoint.
        status: u16,
    },

    /// Returned when the metrics endpoint rejects the fetch.
    #[error("metric fetch failed with status {status}")]
    FetchFailed {
        /// HTTP status code returned by the metrics endpoint.
        status: u16,
    },

    /// Returned when the response body does not match the expected
    /// `datapoints` shape.
    #[error("malformed metric response: {reason}")]
    MalformedResponse {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a delimited row cannot be parsed.
    #[error("malformed row {row}: {reason}")]
    MalformedRow {
        /// Zero-based row index.
        row: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Transport-level HTTP error.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Delimited-file parse error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Series validation error.
    #[error(transparent)]
    Series(#[from] panoptes_series::SeriesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed_secrets() {
        let e = FetchError::MalformedSecrets {
            reason: "missing password line".into(),
        };
        assert_eq!(
            e.to_string(),
            "malformed secrets file: missing password line"
        );
    }

    #[test]
    fn display_auth_failed() {
        let e = FetchError::AuthFailed { status: 401 };
        assert_eq!(e.to_string(), "authentication failed with status 401");
    }

    #[test]
    fn display_fetch_failed() {
        let e = FetchError::FetchFailed { status: 503 };
        assert_eq!(e.to_string(), "metric fetch failed with status 503");
    }

    #[test]
    fn display_malformed_response() {
        let e = FetchError::MalformedResponse {
            reason: "bad timestamp key 'abc'".into(),
        };
        assert_eq!(
            e.to_string(),
            "malformed metric response: bad timestamp key 'abc'"
        );
    }

    #[test]
    fn display_malformed_row() {
        let e = FetchError::MalformedRow {
            row: 3,
            reason: "missing value column".into(),
        };
        assert_eq!(e.to_string(), "malformed row 3: missing value column");
    }

    #[test]
    fn from_series_error() {
        let se = panoptes_series::SeriesError::TooShort { len: 0, min: 2 };
        let fe: FetchError = se.into();
        assert!(matches!(fe, FetchError::Series(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<FetchError>();
    }
}
