use std::fmt::Display;
use std::str::FromStr;

use super::{ConfigBuilder, ConfigError, Properties};

/// Key holding the number of lives a player starts with.
pub const NUM_LIVES_KEY: &str = "numlives";

/// Loaded configuration: an immutable map of string keys to string values.
///
/// Values stay strings until a typed accessor parses them. Accessors never
/// fall back to defaults; a missing or unparsable value is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    properties: Properties,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn from_properties(properties: Properties) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Raw value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Parses the value of `key` as `T`.
    ///
    /// Fails with [`ConfigError::MissingKey`] when the key is absent and with
    /// [`ConfigError::ValueInvalid`] when the value does not parse.
    pub fn get_parsed<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self
            .get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
        value.parse().map_err(|e: T::Err| ConfigError::ValueInvalid {
            key: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        self.get_parsed(key)
    }

    /// Value of [`NUM_LIVES_KEY`].
    pub fn number_of_lives(&self) -> Result<u32, ConfigError> {
        self.get_parsed(NUM_LIVES_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Config {
        Config::from_properties(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_number_of_lives() {
        assert_eq!(config(&[("numlives", "3")]).number_of_lives().unwrap(), 3);
    }

    #[test]
    fn test_missing_key_has_no_default() {
        let result = config(&[("other", "1")]).number_of_lives();
        assert!(matches!(result, Err(ConfigError::MissingKey(key)) if key == "numlives"));

        let result = config(&[]).get_int("anything");
        assert!(matches!(result, Err(ConfigError::MissingKey(_))));
    }

    #[test]
    fn test_non_numeric_value() {
        let result = config(&[("numlives", "three")]).number_of_lives();

        match result {
            Err(ConfigError::ValueInvalid { key, value, .. }) => {
                assert_eq!(key, "numlives");
                assert_eq!(value, "three");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_values_are_not_trimmed_before_parsing() {
        let cfg = config(&[("a", "-12"), ("b", "+7"), ("c", "7 ")]);

        assert_eq!(cfg.get_int("a").unwrap(), -12);
        assert_eq!(cfg.get_int("b").unwrap(), 7);
        assert!(matches!(cfg.get_int("c"), Err(ConfigError::ValueInvalid { .. })));
    }

    #[test]
    fn test_get_parsed_other_types() {
        let cfg = config(&[("ratio", "0.5"), ("debug", "true"), ("numlives", "-1")]);

        assert_eq!(cfg.get_parsed::<f64>("ratio").unwrap(), 0.5);
        assert!(cfg.get_parsed::<bool>("debug").unwrap());
        assert!(matches!(cfg.number_of_lives(), Err(ConfigError::ValueInvalid { .. })));
    }
}
