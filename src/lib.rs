pub mod config;
pub mod context;
pub mod encoding;
mod error;
pub mod players;
pub mod records;

pub use config::{Config, ConfigBuilder, ConfigError, LazyConfig};
pub use context::AppContext;
pub use encoding::{Encoding, EncodingError};
pub use error::Error;
pub use players::{Player, PlayerData};
pub use records::{read_records, write_records, Record, RecordError};
