//! Text exporter
//!
//! Human-readable stanzas, one per reservoir.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ReservoirError, Result};
use crate::reservoir::Reservoir;

/// Write every reservoir as a six-line stanza plus a blank separator
///
/// Creates or truncates `path`. If the file cannot be opened nothing is
/// written and `FileOpen` is returned.
pub fn write_text(path: &Path, reservoirs: &[Reservoir]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| ReservoirError::file_open(path, e))?;

    let mut writer = BufWriter::new(file);
    for reservoir in reservoirs {
        // Display already ends with a newline; this adds the blank line
        writeln!(writer, "{}", reservoir)?;
    }
    writer.flush()?;

    Ok(())
}
