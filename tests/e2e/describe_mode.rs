//! Description mode against temporary descriptors

use super::helpers::*;
use gdi_validator::error::ValidatorError;
use gdi_validator::metadata;
use std::fs;

#[test]
fn test_describe_reproduces_descriptor_bytes() {
    let (_temp, config) = create_mounts().unwrap();
    let descriptor = "{\n  \"name\": \"word-count-validator\",\n  \"version\": \"1.0.0\",\n  \"parameters\": []\n}";
    fs::write(&config.metadata_path, descriptor).unwrap();

    let mut out = Vec::new();
    metadata::describe(&config.metadata_path, &mut out).unwrap();

    assert_eq!(out, descriptor.as_bytes());
}

#[test]
fn test_describe_missing_descriptor_writes_no_report() {
    let (_temp, config) = create_mounts().unwrap();

    let mut out = Vec::new();
    let err = metadata::describe(&config.metadata_path, &mut out).unwrap_err();

    assert!(matches!(err, ValidatorError::DescriptorMissing { .. }));
    assert!(out.is_empty());
    assert!(!config.output_path.exists());
}
