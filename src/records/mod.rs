//! Delimited record files.
//!
//! One record per line, fields separated by [`DELIMITER`]. The format has no
//! quoting or escaping: a line without the delimiter is not a record and is
//! skipped on read. On write, a record with fewer than two fields or a field
//! containing the delimiter or a line break is refused.

mod error;
mod reader;
mod writer;

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::encoding::Encoding;

pub use error::RecordError;
pub use reader::RecordReader;
pub use writer::RecordWriter;

/// Field separator used by [`read_records`] and [`write_records`].
pub const DELIMITER: char = ';';

/// One line of a delimited file, as an ordered list of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record(Vec<String>);

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_fields(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl<const N: usize> From<[&str; N]> for Record {
    fn from(fields: [&str; N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Reads every record of the file at `path`, in line order.
///
/// The whole file is decoded with `encoding` before it is split, so a
/// decoding failure anywhere yields an error and no records.
pub fn read_records(
    path: impl AsRef<Path>,
    encoding: Encoding,
) -> Result<Vec<Record>, RecordError> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(|e| file_error(path, e))?;

    let text = encoding.decode(&bytes)?;
    let records = RecordReader::new(text.as_bytes()).collect::<Result<Vec<_>, _>>()?;

    debug!(path = %path.display(), %encoding, count = records.len(), "read records");
    Ok(records)
}

/// Writes `records` to the file at `path`, replacing its contents.
///
/// Every record is checked before the file is touched; a record that would
/// not read back unchanged fails with [`RecordError::TooFewFields`] or
/// [`RecordError::UnrepresentableField`] and leaves any existing file
/// unchanged. Each line is flushed as soon as it
/// is written.
pub fn write_records(
    path: impl AsRef<Path>,
    encoding: Encoding,
    records: &[Record],
) -> Result<(), RecordError> {
    let path = path.as_ref();
    for (index, record) in records.iter().enumerate() {
        writer::check_record(record, index, DELIMITER)?;
    }

    let file = File::create(path).map_err(|e| file_error(path, e))?;
    let mut writer = RecordWriter::new(BufWriter::new(file)).with_encoding(encoding);
    for record in records {
        writer.write_record(record)?;
    }

    debug!(path = %path.display(), %encoding, count = records.len(), "wrote records");
    Ok(())
}

fn file_error(path: &Path, err: std::io::Error) -> RecordError {
    if err.kind() == ErrorKind::NotFound {
        RecordError::NotFound(path.to_path_buf())
    } else {
        RecordError::Io(err)
    }
}
