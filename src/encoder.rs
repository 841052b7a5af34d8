use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::EncodeError;
use crate::record::ConfigRecord;

/// Writes `values` to `sink` as seven little-endian i32s (28 bytes, no header).
///
/// The count is checked before anything reaches the sink.
pub fn encode<W: Write>(
    values: &[i32],
    sink: &mut W,
) -> Result<(), EncodeError> {
    let record = ConfigRecord::try_from(values)?;
    encode_record(&record, sink)
}

pub fn encode_record<W: Write>(
    record: &ConfigRecord,
    sink: &mut W,
) -> Result<(), EncodeError> {
    sink.write_all(&record.to_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Creates or truncates `path` and writes the encoded values into it.
/// A failed write may leave a partial file behind.
pub fn encode_to_path(
    values: &[i32],
    path: &Path,
) -> Result<(), EncodeError> {
    let record = ConfigRecord::try_from(values)?;
    write_record(&record, path)
}

pub fn write_record(
    record: &ConfigRecord,
    path: &Path,
) -> Result<(), EncodeError> {
    let mut file = File::create(path).map_err(|e| EncodeError::io(e).with_path(path))?;
    encode_record(record, &mut file).map_err(|e| e.with_path(path))
}
