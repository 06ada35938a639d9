//! # panoptes-fetch
//!
//! Sources that supply raw `(timestamp, value)` sequences to the
//! anomaly pipeline.
//!
//! Two collaborators are covered:
//!
//! - a metric service reached over HTTP(S) behind an authenticated
//!   [`Session`], created on demand from a two-line secrets file and
//!   dropped after use, never held as process-global state;
//! - a delimited file whose second column holds the series values.
//!
//! Both produce a validated
//! [`TimeSeries`](panoptes_series::TimeSeries); the pipeline itself
//! never touches the network or the filesystem. Failures propagate
//! immediately: there is no retry layer and no partial result.

mod error;
mod file;
mod session;

pub use error::FetchError;
pub use file::{FileOptions, load_delimited};
pub use session::{Credentials, Session};
