use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::debug;

use super::{Config, ConfigBuilder, ConfigError, DEFAULT_CONFIG_PATH};

/// Configuration that is loaded on first access and then kept.
///
/// The first successful [`get`](Self::get) loads every source of the
/// builder; every later call returns the same [`Config`] without touching
/// the sources again. Concurrent first callers wait for a single load. A
/// failed load is not cached, so the next call tries again.
#[derive(Debug)]
pub struct LazyConfig {
    builder: ConfigBuilder,
    loaded: OnceLock<Config>,
    loading: Mutex<()>,
}

impl LazyConfig {
    pub fn new(builder: ConfigBuilder) -> Self {
        Self {
            builder,
            loaded: OnceLock::new(),
            loading: Mutex::new(()),
        }
    }

    /// Lazy configuration backed by the required file at [`DEFAULT_CONFIG_PATH`].
    pub fn default_location() -> Self {
        Self::new(Config::builder().with_file(DEFAULT_CONFIG_PATH, true))
    }

    /// Returns the configuration, loading it if this is the first call.
    pub fn get(&self) -> Result<&Config, ConfigError> {
        if let Some(config) = self.loaded.get() {
            return Ok(config);
        }

        let _guard = self.loading.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(config) = self.loaded.get() {
            return Ok(config);
        }

        let config = self.builder.load()?;
        debug!(keys = config.properties().len(), "configuration cached");
        Ok(self.loaded.get_or_init(|| config))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }
}
