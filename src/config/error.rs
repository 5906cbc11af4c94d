use std::path::PathBuf;
use thiserror::Error;

use crate::encoding::EncodingError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("required config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode config file '{path}': {source}")]
    Encoding {
        path: PathBuf,
        source: EncodingError,
    },

    #[error("malformed \\uXXXX escape on line {line}")]
    MalformedEscape { line: usize },

    #[error("missing config key: {0}")]
    MissingKey(String),

    #[error("invalid value {value:?} for config key '{key}': {reason}")]
    ValueInvalid {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
}
