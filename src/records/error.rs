use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::EncodingError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordError {
    #[error("record file not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error on record stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("record text could not be converted: {0}")]
    Encoding(#[from] EncodingError),

    #[error("record {record} has {found} field(s); a line needs at least two to be read back")]
    TooFewFields { record: usize, found: usize },

    #[error("record {record}: field {field} contains the delimiter or a line break")]
    UnrepresentableField { record: usize, field: usize },

    #[error("record {record} is not a player: {reason}")]
    InvalidPlayer { record: usize, reason: String },
}
