//! Delimited-file series source.

use std::path::Path;

use tracing::debug;

use panoptes_series::TimeSeries;

use crate::error::FetchError;

/// Options for reading a delimited series file.
///
/// # Example
///
/// ```ignore
/// use panoptes_fetch::FileOptions;
///
/// let options = FileOptions::new()
///     .with_delimiter(b'\t')
///     .with_footer_rows(2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FileOptions {
    delimiter: u8,
    footer_rows: usize,
    has_headers: bool,
}

impl FileOptions {
    /// Creates options with defaults: comma delimiter, no footer rows,
    /// no header row.
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            footer_rows: 0,
            has_headers: false,
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the number of trailing footer rows to drop, in addition to
    /// the final data row.
    pub fn with_footer_rows(mut self, footer_rows: usize) -> Self {
        self.footer_rows = footer_rows;
        self
    }

    /// Sets whether the first row is a header.
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the number of trailing footer rows dropped.
    pub fn footer_rows(&self) -> usize {
        self.footer_rows
    }

    /// Returns whether the first row is treated as a header.
    pub fn has_headers(&self) -> bool {
        self.has_headers
    }
}

impl Default for FileOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads a series from a delimited tabular file.
///
/// The second column holds the values; the row index becomes the
/// timestamp. The trailing `footer_rows` rows and the final data row
/// (a typically incomplete last sample) are dropped before use.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`FetchError::Io`] | file cannot be opened |
/// | [`FetchError::Csv`] | malformed delimited structure |
/// | [`FetchError::MalformedRow`] | missing or unparsable value column |
/// | [`FetchError::Series`] | too few rows remain after trimming |
pub fn load_delimited(
    path: impl AsRef<Path>,
    options: &FileOptions,
) -> Result<TimeSeries, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = record.get(1).ok_or_else(|| FetchError::MalformedRow {
            row,
            reason: "missing value column".into(),
        })?;
        let value: f64 = field
            .trim()
            .parse()
            .map_err(|_| FetchError::MalformedRow {
                row,
                reason: format!("bad value '{field}'"),
            })?;
        values.push(value);
    }

    let drop = options.footer_rows + 1;
    let kept = values.len().saturating_sub(drop);
    debug!(
        path = %path.as_ref().display(),
        total = values.len(),
        kept,
        "loaded delimited series"
    );
    values.truncate(kept);

    let timestamps = (0..values.len() as i64).collect();
    Ok(TimeSeries::new(timestamps, values)?)
}
