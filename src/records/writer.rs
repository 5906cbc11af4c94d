use std::io::Write;

use crate::encoding::Encoding;

use super::{Record, RecordError, DELIMITER};

/// Writes records as delimited lines, flushing after every line.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    inner: W,
    delimiter: char,
    encoding: Encoding,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a writer producing UTF-8 lines separated by [`DELIMITER`].
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            delimiter: DELIMITER,
            encoding: Encoding::Utf8,
            written: 0,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Number of records accepted so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes one record followed by `\n`, then flushes.
    ///
    /// Records that would not read back unchanged are refused before
    /// anything is written: fewer than two fields fail with
    /// [`RecordError::TooFewFields`], and a field containing the delimiter or
    /// a line break fails with [`RecordError::UnrepresentableField`].
    pub fn write_record(&mut self, record: &Record) -> Result<(), RecordError> {
        check_record(record, self.written, self.delimiter)?;

        let mut buf = [0; 4];
        let sep: &str = self.delimiter.encode_utf8(&mut buf);
        let mut line = record.fields().join(sep);
        line.push('\n');

        let bytes = self.encoding.encode(&line)?;
        self.inner.write_all(&bytes)?;
        self.inner.flush()?;

        self.written += 1;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Checks that `record`, written as line number `index`, reads back as
/// the same record.
pub(super) fn check_record(
    record: &Record,
    index: usize,
    delimiter: char,
) -> Result<(), RecordError> {
    if record.len() < 2 {
        return Err(RecordError::TooFewFields {
            record: index,
            found: record.len(),
        });
    }
    match record
        .fields()
        .iter()
        .position(|field| field.contains([delimiter, '\n', '\r']))
    {
        Some(field) => Err(RecordError::UnrepresentableField {
            record: index,
            field,
        }),
        None => Ok(()),
    }
}
