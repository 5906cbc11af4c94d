use std::io::BufRead;

use tracing::trace;

use super::{Record, RecordError, DELIMITER};
use crate::encoding::{Encoding, EncodingError};

/// Streams records out of UTF-8 text, one line at a time.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. A line that does not contain
/// the delimiter is skipped. Bytes that are not UTF-8 fail with
/// [`EncodingError::Malformed`] at their offset in the stream.
///
/// ```
/// use roster_fnd::records::{Record, RecordReader};
///
/// let input = "# roster\nMario;Rossi;10\n";
/// let records: Vec<Record> = RecordReader::new(input.as_bytes())
///     .collect::<Result<_, _>>()?;
/// assert_eq!(records, vec![Record::from(["Mario", "Rossi", "10"])]);
/// # Ok::<(), roster_fnd::records::RecordError>(())
/// ```
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    delimiter: char,
    line: usize,
    offset: usize,
    after_cr: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delimiter: DELIMITER,
            line: 0,
            offset: 0,
            after_cr: false,
        }
    }

    /// Splits fields on `delimiter` instead of [`DELIMITER`].
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, RecordError> {
        let mut bytes = Vec::new();
        let mut start = self.offset;
        let mut seen = false;

        loop {
            let available = self.inner.fill_buf()?;
            if available.is_empty() {
                break;
            }
            if self.after_cr {
                // second half of a \r\n split across reads
                self.after_cr = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    self.offset += 1;
                    start += 1;
                    continue;
                }
            }

            seen = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.after_cr = available[end] == b'\r';
                    bytes.extend_from_slice(&available[..end]);
                    self.inner.consume(end + 1);
                    self.offset += end + 1;
                    break;
                }
                None => {
                    let len = available.len();
                    bytes.extend_from_slice(available);
                    self.inner.consume(len);
                    self.offset += len;
                }
            }
        }

        if !seen {
            return Ok(None);
        }
        String::from_utf8(bytes).map(Some).map_err(|e| {
            EncodingError::Malformed {
                encoding: Encoding::Utf8,
                offset: start + e.utf8_error().valid_up_to(),
            }
            .into()
        })
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            };
            self.line += 1;

            if let Some(record) = split_line(&line, self.delimiter) {
                return Some(Ok(record));
            }
            trace!(line = self.line, "skipping line without delimiter");
        }
    }
}

fn split_line(line: &str, delimiter: char) -> Option<Record> {
    if !line.contains(delimiter) {
        return None;
    }
    Some(line.split(delimiter).collect())
}
