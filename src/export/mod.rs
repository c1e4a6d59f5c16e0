//! Export Module
//!
//! Writes a reservoir collection to disk in two forms.
//!
//! ## Text Format
//! One stanza per reservoir: the six summary lines followed by a blank line.
//!
//! ## Binary Format (V1)
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                       │
//! │   Magic: "RSVR" (4) | Version: u16 (2) | Count: u64 (8) │
//! ├─────────────────────────────────────────────────────────┤
//! │ Record (96 bytes), repeated Count times                 │
//! │   NameLen: u32 (4) | Name: UTF-8, zero-padded (64)      │
//! │   Width: f64 (8) | Length: f64 (8) | MaxDepth: f64 (8)  │
//! │   CRC32 over the preceding 92 bytes: u32 (4)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//! All fields little-endian. Records keep insertion order.

mod binary;
mod text;

pub use binary::{decode_record, encode_record, read_binary, write_binary};
pub use text::write_text;

// =============================================================================
// Shared Constants
// =============================================================================

/// Magic bytes identifying a binary reservoir export
pub const MAGIC: &[u8; 4] = b"RSVR";

/// Current binary layout version
pub const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + Count (8) = 14 bytes
pub const HEADER_SIZE: usize = 14;

/// Bytes reserved for the name inside a record
pub const NAME_CAPACITY: usize = 64;

/// Record size: NameLen (4) + Name (64) + 3 × f64 (24) + CRC (4) = 96 bytes
pub const RECORD_SIZE: usize = 4 + NAME_CAPACITY + 24 + 4;
