//! # Image Loader Tests
//!
//! This module contains unit tests for memory image parsing: the one byte
//! per line binary format, tolerance for trailing blank lines, and the
//! error reporting for malformed files.

use rv32_core::common::SimError;
use rv32_core::config::Config;
use rv32_core::sim::loader;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to create a temporary image file with the given text.
fn create_temp_image(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_image_success() {
    let file = create_temp_image("00000000\n01010000\n00000000\n10010011\n");
    let bytes = loader::load_image(file.path()).unwrap();
    assert_eq!(bytes, vec![0x00, 0x50, 0x00, 0x93]);
}

#[test]
fn test_load_image_empty_file() {
    let file = create_temp_image("");
    let bytes = loader::load_image(file.path()).unwrap();
    assert_eq!(bytes.len(), 0);
}

#[test]
fn test_load_image_tolerates_trailing_blank_lines() {
    let file = create_temp_image("11111111\n00000001\n\n\n   \n");
    let bytes = loader::load_image(file.path()).unwrap();
    assert_eq!(bytes, vec![0xFF, 0x01]);
}

#[test]
fn test_load_image_trims_line_whitespace() {
    let file = create_temp_image("  00001111  \n11110000\r\n");
    let bytes = loader::load_image(file.path()).unwrap();
    assert_eq!(bytes, vec![0x0F, 0xF0]);
}

#[test]
fn test_load_image_rejects_short_line() {
    let file = create_temp_image("00000000\n0101010\n");
    let err = loader::load_image(file.path()).unwrap_err();
    assert!(matches!(err, SimError::ImageFormat { line: 2, .. }));
}

#[test]
fn test_load_image_rejects_non_binary_digits() {
    let file = create_temp_image("00000000\n00000002\n00000000\n");
    let err = loader::load_image(file.path()).unwrap_err();
    assert!(matches!(err, SimError::ImageFormat { line: 2, .. }));
}

#[test]
fn test_load_image_rejects_interior_blank_line() {
    let file = create_temp_image("00000000\n\n11111111\n");
    let err = loader::load_image(file.path()).unwrap_err();
    assert!(matches!(err, SimError::ImageFormat { line: 2, .. }));
}

#[test]
fn test_load_image_error_names_the_file() {
    let file = create_temp_image("bad\n");
    let err = loader::load_image(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains(&file.path().display().to_string()));
    assert!(message.contains("line 1"));
}

#[test]
fn test_load_image_missing_file_is_io_error() {
    let err = loader::load_image(std::path::Path::new("/nonexistent/imem.txt")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_load_instruction_image_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(loader::IMEM_FILE),
        "00000000\n01010000\n00000000\n10010011\n",
    )
    .unwrap();

    let imem = loader::load_instruction_image(dir.path()).unwrap();
    assert_eq!(imem.fetch(0), Some(0x0050_0093));
    assert_eq!(imem.len(), 4);
}

#[test]
fn test_load_data_image_applies_config_limit() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(loader::DMEM_FILE), "00000001\n").unwrap();

    let config: Config = serde_json::from_str(r#"{ "memory": { "data_limit_bytes": 8 } }"#).unwrap();
    let mut dmem = loader::load_data_image(dir.path(), &config).unwrap();

    assert_eq!(dmem.dump(), &[0x01]);
    assert_eq!(dmem.read(4).unwrap(), 0);
    assert!(dmem.read(8).is_err());
}
