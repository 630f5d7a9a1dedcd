//! Result and Error types for the tables module

/// Type alias for `Result<T, tables::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nmrdata-tables`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to deserialise a JSON table
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure to read or deserialise a CSV table
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// Element table with an extension that is neither JSON nor CSV
    #[error("unable to infer table format from {path:?}")]
    UnknownFormat { path: String },

    /// CSV rows that do not describe one contiguous element
    #[error("inconsistent rows for element \"{symbol}\": {reason}")]
    InconsistentElement { symbol: String, reason: String },

    /// Abundance that is negative, infinite or NaN
    #[error("invalid abundance for {nuclide} (found {value})")]
    InvalidAbundance { nuclide: String, value: f64 },

    /// Atomic mass that is infinite or NaN
    #[error("invalid atomic mass for {nuclide} (found {value})")]
    InvalidMass { nuclide: String, value: f64 },
}
