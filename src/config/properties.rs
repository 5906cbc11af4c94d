//! Property-file syntax.
//!
//! ```text
//! # comment
//! ! also a comment
//! numlives = 3
//! player.name: Mario
//! greeting Hello \
//!          world
//! path = C:\\games\\tetris
//! ```

use std::collections::BTreeMap;
use std::str::Chars;

use super::ConfigError;

/// Raw key/value pairs read from one or more property sources.
pub type Properties = BTreeMap<String, String>;

/// Parses property-file text. Later duplicates of a key replace earlier ones.
pub fn parse_properties(text: &str) -> Result<Properties, ConfigError> {
    let mut properties = Properties::new();
    let mut lines = natural_lines(text).enumerate().map(|(i, line)| (i + 1, line));

    while let Some((number, first)) = lines.next() {
        let first = skip_whitespace(first);
        if first.is_empty() || first.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = first.to_string();
        while continues(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(skip_whitespace(next)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        properties.insert(unescape(key, number)?, unescape(value, number)?);
    }

    Ok(properties)
}

/// Lines terminated by `\n`, `\r\n` or a lone `\r`.
fn natural_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(end) => {
                let terminator = if current[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[end + terminator..]);
                Some(&current[..end])
            }
            None => {
                rest = None;
                (!current.is_empty()).then_some(current)
            }
        }
    })
}

fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches([' ', '\t', '\u{c}'])
}

/// An odd number of trailing backslashes joins the next line.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Splits a logical line into its raw key and raw value.
///
/// The key ends at the first unescaped `=`, `:` or whitespace. Whitespace
/// around the separator is dropped, and at most one `=`/`:` is consumed.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\u{c}' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let rest = skip_whitespace(&line[key_end..]);
    let value = match rest.strip_prefix(['=', ':']) {
        Some(after) => skip_whitespace(after),
        None => rest,
    };
    (&line[..key_end], value)
}

fn unescape(raw: &str, line: usize) -> Result<String, ConfigError> {
    let malformed = || ConfigError::MalformedEscape { line };
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let unit = read_hex4(&mut chars).ok_or_else(malformed)?;
                let ch = if (0xD800..0xDC00).contains(&unit) {
                    // high surrogate: must be followed by \uDC00-\uDFFF
                    let mut ahead = chars.clone();
                    let low = match (ahead.next(), ahead.next()) {
                        (Some('\\'), Some('u')) => read_hex4(&mut ahead),
                        _ => None,
                    };
                    chars = ahead;
                    low.and_then(|low| char::decode_utf16([unit, low]).next())
                        .and_then(Result::ok)
                } else {
                    char::from_u32(u32::from(unit))
                };
                out.push(ch.ok_or_else(malformed)?);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_hex4(chars: &mut Chars<'_>) -> Option<u16> {
    let mut unit = 0u16;
    for _ in 0..4 {
        let digit = chars.next()?.to_digit(16)?;
        unit = unit * 16 + digit as u16;
    }
    Some(unit)
}
