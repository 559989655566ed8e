//! Delimited file I/O with atomic writes
//!
//! Data files are plain comma-separated text with no quoting: a `"` is an
//! ordinary character and a comma always ends a field. Writes go through a
//! temp file and a rename so a failed save never truncates the original.

use std::fs::{self, File};
use std::path::Path;

use csv::{Position, QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::TrackItError;

/// Read every non-empty record of a file, or `None` if the file doesn't exist
///
/// The first line is returned as an ordinary record; callers that expect a
/// header skip it themselves. Blank lines yield no record, but each record's
/// position carries its physical line so a blank first line is detectable.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Option<Vec<StringRecord>>, TrackItError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read(path)
        .map_err(|e| TrackItError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(data.as_slice());

    let mut records = Vec::new();
    for result in reader.records() {
        let mut record = result.map_err(|e| {
            TrackItError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        if let Some(pos) = record.position().cloned() {
            record.set_position(Some(skip_blank_lines(&data, pos)));
        }
        records.push(record);
    }

    Ok(Some(records))
}

/// Move a record position past the blank lines the reader skipped over
///
/// The reader stamps a record with the position where it started looking,
/// which sits before any blank lines preceding the record.
fn skip_blank_lines(data: &[u8], mut pos: Position) -> Position {
    let start = usize::try_from(pos.byte()).unwrap_or(data.len()).min(data.len());
    let run = data[start..]
        .iter()
        .take_while(|&&b| b == b'\n' || b == b'\r');

    let (bytes, newlines) = run.fold((0u64, 0u64), |(bytes, newlines), &b| {
        (bytes + 1, newlines + u64::from(b == b'\n'))
    });

    let (byte, line) = (pos.byte() + bytes, pos.line() + newlines);
    pos.set_byte(byte).set_line(line);
    pos
}

/// Whether a record came from the first physical line of its file
pub fn is_first_line(record: &StringRecord) -> bool {
    line_number(record) == 1
}

/// Number of fields in a record, not counting trailing empty fields
///
/// `"1 Jan,Tea,"` has two significant fields; `"1 Jan,,40"` has three.
pub fn significant_len(record: &StringRecord) -> usize {
    (0..record.len())
        .rev()
        .find(|&i| !record[i].is_empty())
        .map_or(0, |last| last + 1)
}

/// 1-based line number of a record in its source file
pub fn line_number(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

/// Write records to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all.
pub fn write_records_atomic<P, I>(path: P, records: I) -> Result<(), TrackItError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = StringRecord>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackItError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let result = write_to(&temp_path, records).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| TrackItError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_to<I>(temp_path: &Path, records: I) -> Result<(), TrackItError>
where
    I: IntoIterator<Item = StringRecord>,
{
    let file = File::create(temp_path)
        .map_err(|e| TrackItError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(file);

    for record in records {
        writer
            .write_record(&record)
            .map_err(|e| TrackItError::Storage(format!("Failed to write record: {}", e)))?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| TrackItError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| TrackItError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}
