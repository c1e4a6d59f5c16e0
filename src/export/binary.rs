//! Binary exporter
//!
//! Fixed-size, checksummed records behind a small header.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{ReservoirError, Result};
use crate::reservoir::Reservoir;

use super::{HEADER_SIZE, MAGIC, NAME_CAPACITY, RECORD_SIZE, VERSION};

/// Offset of the CRC field inside a record
const CRC_OFFSET: usize = RECORD_SIZE - 4;

// =============================================================================
// Record Codec
// =============================================================================

/// Encode one reservoir into a `RECORD_SIZE` block
///
/// Fails with `NameTooLong` if the UTF-8 name exceeds `NAME_CAPACITY` bytes.
pub fn encode_record(reservoir: &Reservoir) -> Result<BytesMut> {
    let name = reservoir.name().as_bytes();
    if name.len() > NAME_CAPACITY {
        return Err(ReservoirError::NameTooLong {
            name: reservoir.name().to_string(),
            len: name.len(),
            max: NAME_CAPACITY,
        });
    }

    let mut buf = BytesMut::with_capacity(RECORD_SIZE);
    buf.put_u32_le(name.len() as u32);
    buf.put_slice(name);
    buf.put_bytes(0, NAME_CAPACITY - name.len());
    buf.put_f64_le(reservoir.width());
    buf.put_f64_le(reservoir.length());
    buf.put_f64_le(reservoir.max_depth());

    let crc = crc32fast::hash(&buf[..CRC_OFFSET]);
    buf.put_u32_le(crc);

    debug_assert_eq!(buf.len(), RECORD_SIZE);
    Ok(buf)
}

/// Decode one `RECORD_SIZE` block, verifying its checksum
pub fn decode_record(record: &[u8]) -> Result<Reservoir> {
    if record.len() != RECORD_SIZE {
        return Err(ReservoirError::Corruption(format!(
            "Record size mismatch: expected {} bytes, got {}",
            RECORD_SIZE,
            record.len()
        )));
    }

    let stored_crc = u32::from_le_bytes([
        record[CRC_OFFSET],
        record[CRC_OFFSET + 1],
        record[CRC_OFFSET + 2],
        record[CRC_OFFSET + 3],
    ]);
    let computed_crc = crc32fast::hash(&record[..CRC_OFFSET]);
    if stored_crc != computed_crc {
        return Err(ReservoirError::Corruption(format!(
            "CRC mismatch: stored {:#010x}, computed {:#010x}",
            stored_crc, computed_crc
        )));
    }

    let mut buf = &record[..CRC_OFFSET];
    let name_len = buf.get_u32_le() as usize;
    if name_len > NAME_CAPACITY {
        return Err(ReservoirError::Corruption(format!(
            "Name length {} exceeds slot of {} bytes",
            name_len, NAME_CAPACITY
        )));
    }

    let name = std::str::from_utf8(&buf[..name_len])
        .map_err(|e| ReservoirError::Corruption(format!("Name is not valid UTF-8: {}", e)))?
        .to_string();
    buf.advance(NAME_CAPACITY);

    let width = buf.get_f64_le();
    let length = buf.get_f64_le();
    let max_depth = buf.get_f64_le();

    Ok(Reservoir::new(name, width, length, max_depth))
}

// =============================================================================
// File I/O
// =============================================================================

/// Write the header and one record per reservoir, in order
///
/// Every record is encoded before the file is opened, so a `NameTooLong`
/// failure leaves an existing file at `path` untouched.
pub fn write_binary(path: &Path, reservoirs: &[Reservoir]) -> Result<()> {
    let mut out = BytesMut::with_capacity(HEADER_SIZE + RECORD_SIZE * reservoirs.len());
    out.put_slice(MAGIC);
    out.put_u16_le(VERSION);
    out.put_u64_le(reservoirs.len() as u64);
    for reservoir in reservoirs {
        out.put(encode_record(reservoir)?);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| ReservoirError::file_open(path, e))?;

    file.write_all(&out)?;
    file.sync_all()?;

    Ok(())
}

/// Read back a binary export
///
/// Validates magic, version, total length against the record count, and
/// every record checksum.
pub fn read_binary(path: &Path) -> Result<Vec<Reservoir>> {
    let mut file = File::open(path).map_err(|e| ReservoirError::file_open(path, e))?;
    let file_size = file.metadata()?.len();

    let mut header = [0u8; HEADER_SIZE];
    read_exact_or_corrupt(&mut file, &mut header, "header")?;

    if &header[0..4] != MAGIC {
        return Err(ReservoirError::Corruption(format!(
            "Invalid magic: expected RSVR, got {:?}",
            &header[0..4]
        )));
    }

    let mut fields = &header[4..];
    let version = fields.get_u16_le();
    if version != VERSION {
        return Err(ReservoirError::UnsupportedVersion(version));
    }
    let count = fields.get_u64_le();

    let expected_size = (RECORD_SIZE as u64)
        .checked_mul(count)
        .and_then(|body| body.checked_add(HEADER_SIZE as u64));
    if expected_size != Some(file_size) {
        return Err(ReservoirError::Corruption(format!(
            "File size {} does not match {} records of {} bytes",
            file_size, count, RECORD_SIZE
        )));
    }

    let mut reservoirs = Vec::with_capacity(count as usize);
    let mut record = [0u8; RECORD_SIZE];
    for _ in 0..count {
        read_exact_or_corrupt(&mut file, &mut record, "record")?;
        reservoirs.push(decode_record(&record)?);
    }

    Ok(reservoirs)
}

/// `read_exact` that reports a short read as corruption
fn read_exact_or_corrupt(file: &mut File, buf: &mut [u8], what: &str) -> Result<()> {
    match file.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(ReservoirError::Corruption(
            format!("Truncated {}: expected {} bytes", what, buf.len()),
        )),
        Err(e) => Err(e.into()),
    }
}
