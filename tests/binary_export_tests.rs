//! Tests for the binary export
//!
//! These tests verify:
//! - Header and fixed-size record layout
//! - Records stay in insertion order and load back unchanged
//! - Name-length validation happens before the file is touched
//! - Corruption detection (magic, version, truncation, CRC)

use std::fs;
use std::path::PathBuf;

use reservoirs::export::{decode_record, encode_record, HEADER_SIZE, MAGIC, NAME_CAPACITY, RECORD_SIZE, VERSION};
use reservoirs::{Reservoir, ReservoirError, ReservoirManager};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    (temp_dir, path)
}

fn sample_manager() -> ReservoirManager {
    let mut manager = ReservoirManager::new();
    manager.add_reservoir(Reservoir::new("Ocean", 1000.0, 2000.0, 50.0));
    manager.add_reservoir(Reservoir::new("Swimming Pool", 20.0, 30.0, 2.0));
    manager.add_reservoir(Reservoir::new("Fish Pond", 10.0, 15.0, 1.0));
    manager
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_file_size_is_header_plus_records() {
    let (_temp, path) = setup_temp_file("reservoirs.bin");
    let manager = sample_manager();

    manager.save_to_binary_file(&path).unwrap();

    let len = fs::metadata(&path).unwrap().len() as usize;
    assert_eq!(len, HEADER_SIZE + manager.len() * RECORD_SIZE);
}

#[test]
fn test_header_fields() {
    let (_temp, path) = setup_temp_file("reservoirs.bin");
    sample_manager().save_to_binary_file(&path).unwrap();

    let bytes = fs::read(&path).unwrap();

    assert_eq!(&bytes[0..4], MAGIC);
    assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), VERSION);
    assert_eq!(u64::from_le_bytes(bytes[6..14].try_into().unwrap()), 3);
}

#[test]
fn test_records_in_insertion_order() {
    let (_temp, path) = setup_temp_file("reservoirs.bin");
    let manager = sample_manager();
    manager.save_to_binary_file(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let records: Vec<Reservoir> = bytes[HEADER_SIZE..]
        .chunks(RECORD_SIZE)
        .map(|chunk| decode_record(chunk).unwrap())
        .collect();

    assert_eq!(records.as_slice(), manager.reservoirs());
}

#[test]
fn test_record_field_offsets() {
    let record = encode_record(&Reservoir::new("Pool", 20.0, 30.0, 2.0)).unwrap();
    let floats = 4 + NAME_CAPACITY;

    assert_eq!(&record[floats..floats + 8], &20.0f64.to_le_bytes());
    assert_eq!(&record[floats + 8..floats + 16], &30.0f64.to_le_bytes());
    assert_eq!(&record[floats + 16..floats + 24], &2.0f64.to_le_bytes());
}

#[test]
fn test_empty_manager_writes_header_only() {
    let (_temp, path) = setup_temp_file("empty.bin");

    ReservoirManager::new().save_to_binary_file(&path).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len() as usize, HEADER_SIZE);
    assert!(ReservoirManager::load_from_binary_file(&path).unwrap().is_empty());
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_restores_manager() {
    let (_temp, path) = setup_temp_file("reservoirs.bin");
    let mut manager = sample_manager();
    manager.add_reservoir(Reservoir::new("Négatif ✓", -1.5, 0.0, 3.25));
    manager.add_reservoir(Reservoir::default());

    manager.save_to_binary_file(&path).unwrap();
    let loaded = ReservoirManager::load_from_binary_file(&path).unwrap();

    assert_eq!(loaded, manager);
}

#[test]
fn test_load_missing_file() {
    let (_temp, path) = setup_temp_file("absent.bin");

    let result = ReservoirManager::load_from_binary_file(&path);

    assert!(matches!(result, Err(ReservoirError::FileOpen { .. })));
}

// =============================================================================
// Name Validation Tests
// =============================================================================

#[test]
fn test_name_at_capacity_is_accepted() {
    let (_temp, path) = setup_temp_file("max.bin");
    let name = "n".repeat(NAME_CAPACITY);
    let manager: ReservoirManager = std::iter::once(Reservoir::new(name.clone(), 1.0, 2.0, 3.0)).collect();

    manager.save_to_binary_file(&path).unwrap();

    let loaded = ReservoirManager::load_from_binary_file(&path).unwrap();
    assert_eq!(loaded.reservoirs()[0].name(), name);
}

#[test]
fn test_long_name_rejected_before_writing() {
    let (_temp, path) = setup_temp_file("reservoirs.bin");
    fs::write(&path, b"previous export").unwrap();

    let mut manager = sample_manager();
    manager.add_reservoir(Reservoir::new("n".repeat(NAME_CAPACITY + 1), 1.0, 1.0, 1.0));

    let result = manager.save_to_binary_file(&path);

    match result {
        Err(ReservoirError::NameTooLong { len, max, .. }) => {
            assert_eq!(len, NAME_CAPACITY + 1);
            assert_eq!(max, NAME_CAPACITY);
        }
        other => panic!("expected NameTooLong, got {:?}", other),
    }
    assert_eq!(fs::read(&path).unwrap(), b"previous export");
}

// =============================================================================
// Corruption Detection Tests
// =============================================================================

#[test]
fn test_bad_magic_detected() {
    let (_temp, path) = setup_temp_file("reservoirs.bin");
    sample_manager().save_to_binary_file(&path).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    bytes[0] = b'X';
    fs::write(&path, &bytes).unwrap();

    let result = ReservoirManager::load_from_binary_file(&path);
    assert!(matches!(result, Err(ReservoirError::Corruption(_))));
}

#[test]
fn test_unknown_version_rejected() {
    let (_temp, path) = setup_temp_file("reservoirs.bin");
    sample_manager().save_to_binary_file(&path).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    bytes[4..6].copy_from_slice(&99u16.to_le_bytes());
    fs::write(&path, &bytes).unwrap();

    let result = ReservoirManager::load_from_binary_file(&path);
    assert!(matches!(result, Err(ReservoirError::UnsupportedVersion(99))));
}

#[test]
fn test_truncated_file_detected() {
    let (_temp, path) = setup_temp_file("reservoirs.bin");
    sample_manager().save_to_binary_file(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 10]).unwrap();

    let result = ReservoirManager::load_from_binary_file(&path);
    assert!(matches!(result, Err(ReservoirError::Corruption(_))));
}

#[test]
fn test_truncated_header_detected() {
    let (_temp, path) = setup_temp_file("short.bin");
    fs::write(&path, b"RSVR").unwrap();

    let result = ReservoirManager::load_from_binary_file(&path);
    assert!(matches!(result, Err(ReservoirError::Corruption(_))));
}

#[test]
fn test_flipped_byte_fails_crc() {
    let (_temp, path) = setup_temp_file("reservoirs.bin");
    sample_manager().save_to_binary_file(&path).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    // Inside the second record's width field
    let offset = HEADER_SIZE + RECORD_SIZE + 4 + NAME_CAPACITY + 3;
    bytes[offset] ^= 0xFF;
    fs::write(&path, &bytes).unwrap();

    let result = ReservoirManager::load_from_binary_file(&path);
    assert!(matches!(result, Err(ReservoirError::Corruption(_))));
}

#[test]
fn test_decode_rejects_wrong_length() {
    let result = decode_record(&[0u8; RECORD_SIZE - 1]);
    assert!(matches!(result, Err(ReservoirError::Corruption(_))));
}
