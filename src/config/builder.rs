use std::path::Path;

use tracing::debug;

use super::file::FileSource;
use super::source::PropertySource;
use super::{Config, ConfigError, LazyConfig, Properties};

/// Builder for loading configuration from property files.
///
/// Sources are merged in registration order, with keys from later sources
/// replacing the same keys from earlier ones.
///
/// ## Example
///
/// ```no_run
/// use roster_fnd::Config;
///
/// let config = Config::builder()
///     .with_file("config/default.properties", true)
///     .with_file("config/local.properties", false)
///     .build()?;
///
/// let lives = config.number_of_lives()?;
/// # Ok::<(), roster_fnd::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigBuilder {
    sources: Vec<Box<dyn PropertySource>>,
}

impl ConfigBuilder {
    /// Creates a builder with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a UTF-8 property file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are skipped.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds any other source, such as a [`FileSource`] with a non-default
    /// encoding.
    pub fn with_source(mut self, source: impl PropertySource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads and merges every source now.
    pub fn build(self) -> Result<Config, ConfigError> {
        self.load()
    }

    /// Defers loading to the first [`LazyConfig::get`].
    pub fn lazy(self) -> LazyConfig {
        LazyConfig::new(self)
    }

    pub(super) fn load(&self) -> Result<Config, ConfigError> {
        let mut merged = Properties::new();
        for source in &self.sources {
            merged.extend(source.load()?);
        }

        debug!(sources = self.sources.len(), keys = merged.len(), "configuration loaded");
        Ok(Config::from_properties(merged))
    }
}
