//! Repeated runs over unchanged inputs

use super::helpers::*;
use gdi_validator::commands::validate;

#[test]
fn test_repeated_runs_differ_only_in_time() {
    let (temp, config) = create_mounts().unwrap();
    let a = write_document(temp.path(), "a.txt", 700).unwrap();
    let b = write_document(temp.path(), "b.txt", 20).unwrap();
    let missing = temp.path().join("c.txt").display().to_string();
    write_work_order(&config, &[&a, &b, &missing]).unwrap();

    validate::execute(&config).unwrap();
    let mut first = read_report(&config).unwrap();
    validate::execute(&config).unwrap();
    let mut second = read_report(&config).unwrap();

    strip_times(&mut first);
    strip_times(&mut second);
    assert_eq!(first, second);
}
