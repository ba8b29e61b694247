//! Workload text-file reading and writing.
//!
//! Uses the one-record-per-line encoding described in the module docs.
//! Blank lines are skipped on read so hand-edited files stay usable.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::WorkloadError;

use super::WorkloadEntry;

/// Reads a workload file, preserving record order.
///
/// Fails on the first I/O error or malformed record; malformed records
/// carry their 1-based line number.
pub fn read_workload(path: impl AsRef<Path>) -> Result<Vec<WorkloadEntry>, WorkloadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        entries.push(WorkloadEntry::parse_line(&line, index + 1)?);
    }

    Ok(entries)
}

/// Writes a workload file, one record per line.
pub fn write_workload(
    path: impl AsRef<Path>,
    entries: &[WorkloadEntry],
) -> Result<(), WorkloadError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    writer.flush()?;
    Ok(())
}
