use super::{ConfigError, Properties};

/// Something that can produce property key/value pairs.
///
/// Sources are registered on a [`ConfigBuilder`](super::ConfigBuilder) and
/// loaded in registration order.
pub trait PropertySource: Send + Sync + std::fmt::Debug {
    fn load(&self) -> Result<Properties, ConfigError>;
}
