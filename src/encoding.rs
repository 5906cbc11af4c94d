//! Character encodings for text files.
//!
//! Every file operation in this crate takes its [`Encoding`] explicitly.
//! Labels are resolved with [`str::parse`], so a charset name read from
//! elsewhere (`"UTF-8"`, `"iso-8859-1"`, `"latin1"`) can be passed through.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodingError {
    #[error("unsupported encoding: {0}")]
    Unsupported(String),

    #[error("malformed {encoding} input at byte {offset}")]
    Malformed { encoding: Encoding, offset: usize },

    #[error("character {ch:?} cannot be represented in {encoding}")]
    Unmappable { encoding: Encoding, ch: char },
}

/// A supported character encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
    Utf16Be,
    Utf16Le,
}

impl Encoding {
    /// Canonical label, as accepted by [`FromStr`].
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Ascii => "US-ASCII",
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
        }
    }

    /// Decodes `bytes` into a string.
    ///
    /// Input that is not valid in this encoding fails with
    /// [`EncodingError::Malformed`]; nothing is replaced.
    pub fn decode(self, bytes: &[u8]) -> Result<String, EncodingError> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| self.malformed(e.valid_up_to())),
            Encoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(self.malformed(offset)),
                None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            },
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Encoding::Utf16Be => self.decode_utf16(bytes, u16::from_be_bytes),
            Encoding::Utf16Le => self.decode_utf16(bytes, u16::from_le_bytes),
        }
    }

    /// Encodes `text` into bytes.
    ///
    /// Characters outside the encoding's repertoire fail with
    /// [`EncodingError::Unmappable`].
    pub fn encode(self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Ascii => self.encode_single_byte(text, 0x7F),
            Encoding::Latin1 => self.encode_single_byte(text, 0xFF),
            Encoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Encoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        }
    }

    fn decode_utf16(
        self,
        bytes: &[u8],
        unit: fn([u8; 2]) -> u16,
    ) -> Result<String, EncodingError> {
        if bytes.len() % 2 != 0 {
            return Err(self.malformed(bytes.len() - 1));
        }

        let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
        let mut text = String::with_capacity(bytes.len() / 2);
        let mut consumed = 0;
        for decoded in char::decode_utf16(units) {
            match decoded {
                Ok(ch) => {
                    consumed += ch.len_utf16();
                    text.push(ch);
                }
                Err(_) => return Err(self.malformed(consumed * 2)),
            }
        }
        Ok(text)
    }

    fn encode_single_byte(self, text: &str, max: u32) -> Result<Vec<u8>, EncodingError> {
        text.chars()
            .map(|ch| match u8::try_from(u32::from(ch)) {
                Ok(b) if u32::from(b) <= max => Ok(b),
                _ => Err(EncodingError::Unmappable { encoding: self, ch }),
            })
            .collect()
    }

    fn malformed(self, offset: usize) -> EncodingError {
        EncodingError::Malformed {
            encoding: self,
            offset,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "UTF8" => Ok(Encoding::Utf8),
            "USASCII" | "ASCII" => Ok(Encoding::Ascii),
            "ISO88591" | "LATIN1" => Ok(Encoding::Latin1),
            "UTF16BE" => Ok(Encoding::Utf16Be),
            "UTF16LE" => Ok(Encoding::Utf16Le),
            _ => Err(EncodingError::Unsupported(label.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_aliases() {
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("utf8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("iso-8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("latin1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("US-ASCII".parse::<Encoding>().unwrap(), Encoding::Ascii);
        assert_eq!("utf_16le".parse::<Encoding>().unwrap(), Encoding::Utf16Le);

        for encoding in [
            Encoding::Utf8,
            Encoding::Ascii,
            Encoding::Latin1,
            Encoding::Utf16Be,
            Encoding::Utf16Le,
        ] {
            assert_eq!(encoding.label().parse::<Encoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_unsupported_label() {
        let result = "EBCDIC".parse::<Encoding>();
        assert_eq!(result, Err(EncodingError::Unsupported("EBCDIC".into())));
    }

    #[test]
    fn test_invalid_utf8_reports_offset() {
        let result = Encoding::Utf8.decode(b"ab\xffcd");
        assert_eq!(
            result,
            Err(EncodingError::Malformed {
                encoding: Encoding::Utf8,
                offset: 2
            })
        );
    }

    #[test]
    fn test_latin1_decodes_high_bytes() {
        let text = Encoding::Latin1.decode(b"caf\xe9").unwrap();
        assert_eq!(text, "café");
        assert_eq!(Encoding::Latin1.encode("café").unwrap(), b"caf\xe9");
    }

    #[test]
    fn test_ascii_rejects_non_ascii() {
        assert!(matches!(
            Encoding::Ascii.decode(b"caf\xe9"),
            Err(EncodingError::Malformed { offset: 3, .. })
        ));
        assert_eq!(
            Encoding::Ascii.encode("café"),
            Err(EncodingError::Unmappable {
                encoding: Encoding::Ascii,
                ch: 'é'
            })
        );
    }

    #[test]
    fn test_latin1_rejects_wide_chars() {
        assert!(matches!(
            Encoding::Latin1.encode("€"),
            Err(EncodingError::Unmappable { ch: '€', .. })
        ));
    }

    #[test]
    fn test_utf16_byte_order() {
        assert_eq!(Encoding::Utf16Be.encode("a;").unwrap(), [0, b'a', 0, b';']);
        assert_eq!(Encoding::Utf16Le.encode("a;").unwrap(), [b'a', 0, b';', 0]);
        assert_eq!(Encoding::Utf16Le.decode(&[b'h', 0, b'i', 0]).unwrap(), "hi");
    }

    #[test]
    fn test_utf16_surrogate_pair() {
        let bytes = Encoding::Utf16Be.encode("x😀").unwrap();
        assert_eq!(bytes.len(), 6);
        assert_eq!(Encoding::Utf16Be.decode(&bytes).unwrap(), "x😀");
    }

    #[test]
    fn test_utf16_malformed_input() {
        // odd length
        assert!(matches!(
            Encoding::Utf16Be.decode(&[0, b'a', 0]),
            Err(EncodingError::Malformed { offset: 2, .. })
        ));
        // lone high surrogate followed by 'a'
        assert!(matches!(
            Encoding::Utf16Be.decode(&[0, b'a', 0xD8, 0x3D, 0, b'a']),
            Err(EncodingError::Malformed { offset: 2, .. })
        ));
    }
}
