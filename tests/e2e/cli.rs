//! Argument handling of the built binary

use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gdi-validator"))
}

#[test]
fn test_version_flag() {
    let output = binary().arg("--version").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("gdi-validator"));
}

#[test]
fn test_describe_without_descriptor_exits_nonzero() {
    // The installed descriptor location does not exist on test hosts
    let output = binary().arg("--describe").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Metadata file not found"));
}

#[test]
fn test_unknown_flag_is_rejected_without_running() {
    let output = binary().arg("--input").arg("x.json").output().unwrap();

    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}
