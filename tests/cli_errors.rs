use assert_fs::prelude::*;
use predicates::str::contains;

#[test]
fn six_values_is_usage_error() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("config-bin")
        .current_dir(&dir)
        .args(["--values", "1", "2", "3", "4", "5", "6"])
        .assert()
        .failure()
        .code(2);

    dir.child("config.bin").assert(predicates::path::missing());
}

#[test]
fn out_of_range_value_is_contract_violation() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("config-bin")
        .current_dir(&dir)
        .args(["--values", "1", "2", "3", "4", "5", "6", "2147483648"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("position 7"));

    dir.child("config.bin").assert(predicates::path::missing());
}

#[test]
fn unwritable_path_reports_io_error() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("config-bin")
        .current_dir(&dir)
        .args(["-o", "missing/dir/config.bin"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("could not write config to missing/dir/config.bin"));
}
