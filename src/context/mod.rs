//! Application context for managing shared application state.

use crate::config::{Config, ConfigBuilder, LazyConfig};
use crate::Error;

/// Central application context holding the configuration.
///
/// Components receive the context (or the [`Config`] it hands out) instead
/// of reaching for process-wide state. The configuration is loaded at most
/// once per context.
///
/// ## Example
///
/// ```no_run
/// use roster_fnd::{AppContext, Config};
///
/// let ctx = AppContext::builder()
///     .with_config(Config::builder().with_file("game.properties", true))
///     .build()?;
///
/// let lives = ctx.config()?.number_of_lives()?;
/// # Ok::<(), roster_fnd::Error>(())
/// ```
#[derive(Debug)]
pub struct AppContext {
    config: LazyConfig,
}

impl AppContext {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder { config: None }
    }

    /// Returns the configuration, loading it on first use.
    ///
    /// After [`AppContextBuilder::build`] this never touches the sources.
    pub fn config(&self) -> Result<&Config, Error> {
        Ok(self.config.get()?)
    }
}

/// Builder for constructing an [`AppContext`].
///
/// Without [`with_config`](Self::with_config) the context reads the required
/// file at [`DEFAULT_CONFIG_PATH`](crate::config::DEFAULT_CONFIG_PATH).
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder {
    config: Option<LazyConfig>,
}

impl AppContextBuilder {
    /// Uses the sources of `config` instead of the default location.
    pub fn with_config(mut self, config: ConfigBuilder) -> Self {
        self.config = Some(config.lazy());
        self
    }

    /// Builds the `AppContext`, loading the configuration now.
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn build(self) -> Result<AppContext, Error> {
        let ctx = self.build_lazy();
        ctx.config.get()?;
        Ok(ctx)
    }

    /// Builds the `AppContext` without loading; the first
    /// [`AppContext::config`] call does.
    pub fn build_lazy(self) -> AppContext {
        AppContext {
            config: self.config.unwrap_or_else(LazyConfig::default_location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_build_loads_eagerly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.properties");
        fs::write(&path, "numlives=4\n").unwrap();

        let ctx = AppContext::builder()
            .with_config(Config::builder().with_file(&path, true))
            .build()
            .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(ctx.config().unwrap().number_of_lives().unwrap(), 4);
    }

    #[test]
    fn test_build_fails_on_missing_config() {
        let dir = tempdir().unwrap();
        let result = AppContext::builder()
            .with_config(Config::builder().with_file(dir.path().join("none.properties"), true))
            .build();

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_build_lazy_defers_loading() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("late.properties");

        let ctx = AppContext::builder()
            .with_config(Config::builder().with_file(&path, true))
            .build_lazy();
        fs::write(&path, "numlives=2\n").unwrap();

        let first = ctx.config().unwrap();
        assert_eq!(first.number_of_lives().unwrap(), 2);
        assert!(std::ptr::eq(first, ctx.config().unwrap()));
    }
}
