//! File-based configuration source.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::properties::parse_properties;
use super::source::PropertySource;
use super::{ConfigError, Properties};
use crate::encoding::Encoding;

/// A configuration source that loads a property file.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist yield no properties.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
    encoding: Encoding,
}

impl FileSource {
    /// Creates a new file source reading UTF-8.
    ///
    /// If `required` is true, loading fails if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
            encoding: Encoding::Utf8,
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PropertySource for FileSource {
    fn load(&self) -> Result<Properties, ConfigError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.required {
                    return Err(ConfigError::FileNotFound(self.path.clone()));
                }
                warn!(path = %self.path.display(), "optional config file not found");
                return Ok(Properties::new());
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let text = self
            .encoding
            .decode(&bytes)
            .map_err(|source| ConfigError::Encoding {
                path: self.path.clone(),
                source,
            })?;
        let properties = parse_properties(&text)?;
        debug!(path = %self.path.display(), keys = properties.len(), "loaded config file");
        Ok(properties)
    }
}
