use crate::config::ConfigError;
use crate::encoding::EncodingError;
use crate::records::RecordError;
use thiserror::Error;

/// Top-level error type for the roster-fnd library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("record file error: {0}")]
    Records(#[from] RecordError),

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}
