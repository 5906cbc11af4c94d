//! Typed view of a [`Config`] through serde.
//!
//! Dotted keys become nested tables (`player.name` is field `name` of table
//! `player`) and values are coerced to the most specific scalar type before
//! deserialization.

use serde::de::DeserializeOwned;
use toml::{Table, Value};

use super::{Config, ConfigError};

impl Config {
    /// Deserializes the whole configuration into `T`.
    ///
    /// ```
    /// use roster_fnd::config::{parse_properties, Config};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Game {
    ///     numlives: u32,
    ///     player: Player,
    /// }
    ///
    /// #[derive(Deserialize)]
    /// struct Player {
    ///     name: String,
    /// }
    ///
    /// let config = Config::from_properties(parse_properties("numlives=3\nplayer.name=Mario\n")?);
    /// let game: Game = config.deserialize()?;
    /// assert_eq!(game.numlives, 3);
    /// assert_eq!(game.player.name, "Mario");
    /// # Ok::<(), roster_fnd::ConfigError>(())
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let mut table = Table::new();
        for (key, value) in self.properties() {
            let path: Vec<&str> = key.split('.').collect();
            insert_at_path(&mut table, &path, coerce_value(value));
        }

        Value::Table(table).try_into().map_err(ConfigError::DeserializeError)
    }
}

/// Inserts `value` at a dotted path. A table already present at the path
/// wins over a scalar (`a.b=1` beats `a=2`).
fn insert_at_path(table: &mut Table, path: &[&str], value: Value) {
    match path {
        [] => {}
        [leaf] => {
            if !matches!(table.get(*leaf), Some(Value::Table(_))) {
                table.insert(leaf.to_string(), value);
            }
        }
        [first, rest @ ..] => {
            if !matches!(table.get(*first), Some(Value::Table(_))) {
                table.insert(first.to_string(), Value::Table(Table::new()));
            }
            if let Some(Value::Table(nested)) = table.get_mut(*first) {
                insert_at_path(nested, rest, value);
            }
        }
    }
}

/// Most specific scalar for a raw property value: boolean (any case),
/// integer, float (only with a `.`), else the string itself.
fn coerce_value(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false") {
        return Value::Boolean(raw.eq_ignore_ascii_case("true"));
    }
    if is_plain_integer(raw) {
        if let Ok(i) = raw.parse() {
            return Value::Integer(i);
        }
    }
    if raw.contains('.') {
        if let Ok(f) = raw.parse() {
            return Value::Float(f);
        }
    }
    Value::String(raw.to_string())
}

/// Optional leading `-`, then at least one ASCII digit. A `+` sign stays text.
fn is_plain_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
