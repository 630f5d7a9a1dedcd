//! Result and Error types for nmrdata-compile

/// Type alias for Result<T, compile::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nmrdata-compile` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    #[error("malformed data module: {0}")]
    MalformedModule(String),
}
