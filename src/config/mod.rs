//! Configuration loading and management.

mod builder;
mod error;
mod file;
mod lazy;
mod properties;
mod settings;
mod source;
mod typed;

pub use builder::ConfigBuilder;
pub use error::ConfigError;
pub use file::FileSource;
pub use lazy::LazyConfig;
pub use properties::{parse_properties, Properties};
pub use settings::{Config, NUM_LIVES_KEY};
pub use source::PropertySource;

/// Fixed location of the application's property file, relative to the
/// working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.properties";
