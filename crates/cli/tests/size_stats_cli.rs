#![cfg(unix)]

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

use common::{sample_project, FakeBuildDir};

/// The table attributes merged and SIMD symbols and reports the unattributed rest.
#[test]
fn prints_table_for_target() {
    let fake = sample_project();
    let output = cargo_bin_cmd!("build-stats")
        .arg("app")
        .arg("--build-dir")
        .arg(&fake.build_dir)
        .arg("--nm")
        .arg(&fake.nm)
        .arg("--ninja")
        .arg(&fake.ninja)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("Object name"));
    assert!(lines[0].contains("Binary size"));
    assert!(lines[0].contains("Static RAM size"));
    // app: 0x10 + 0x8 + 0x20 + 0x30 = 104 bytes of code, 4 bytes bss.
    assert!(lines[1].starts_with("app "));
    assert!(lines[1].contains("     104 (100.0%)"));
    assert!(lines[1].contains("       4 (100.0%)"));
    assert!(lines[2].starts_with("\\--> N_SSE4"));
    assert!(lines[2].contains("      32 ( 30.8%)"));
    // a.o owns the weak function, its local helper, and the counter.
    assert!(lines[3].starts_with("a.o "));
    assert!(lines[3].contains("      24 ( 23.1%)"));
    // b.o only keeps the SSE4 function; its copy of the weak function is merged away.
    assert!(lines[4].starts_with("b.o "));
    assert!(lines[4].contains("      32 ( 30.8%)"));
    assert!(lines[5].starts_with("-- unknown --"));
    assert!(lines[5].contains("      48 ( 46.2%)"));
    assert!(lines[5].contains("       0 (  0.0%)"));
    assert_eq!(lines.len(), 7);
    assert!(lines[6].is_empty());
}

/// `--save` writes one row list per target and leaves out the residual row.
#[test]
fn save_writes_json_without_residual_row() {
    let fake = sample_project();
    let save = fake.temp.path().join("stats.json");
    cargo_bin_cmd!("build-stats")
        .args(["app", "app"])
        .arg("--build-dir")
        .arg(&fake.build_dir)
        .arg("--nm")
        .arg(&fake.nm)
        .arg("--ninja")
        .arg(&fake.ninja)
        .arg("--save")
        .arg(&save)
        .assert()
        .success();

    let body: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&save).expect("read save")).expect("json");
    let targets = body.as_array().expect("targets");
    assert_eq!(targets.len(), 2);
    let rows = targets[0].as_array().expect("rows");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], serde_json::json!(["app", false, {"b": 4, "t": 88, "w": 16}]));
    assert_eq!(rows[1][0], "\\--> N_SSE4");
    assert_eq!(rows[2], serde_json::json!(["a.o", true, {"b": 4, "t": 8, "w": 16}]));
    assert_eq!(rows[3], serde_json::json!(["b.o", true, {"t": 32}]));
    assert_eq!(targets[0], targets[1]);
}

/// A symbol line with too many fields makes the CLI exit non-zero.
#[test]
fn malformed_symbol_line_fails_the_run() {
    let fake = FakeBuildDir::new();
    fake.link("app", "cc a.o -o app\n").file("a.o", "foo T 0 10 trailing\n").file("app", "foo T 0 10\n");
    cargo_bin_cmd!("build-stats")
        .arg("app")
        .arg("--build-dir")
        .arg(&fake.build_dir)
        .arg("--nm")
        .arg(&fake.nm)
        .arg("--ninja")
        .arg(&fake.ninja)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed symbol line"));
}

/// A target the build tool knows nothing about makes the CLI exit non-zero.
#[test]
fn unknown_target_fails() {
    let fake = FakeBuildDir::new();
    cargo_bin_cmd!("build-stats")
        .arg("nothing")
        .arg("--build-dir")
        .arg(&fake.build_dir)
        .arg("--nm")
        .arg(&fake.nm)
        .arg("--ninja")
        .arg(&fake.ninja)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing"));
}

/// Running without any target is a usage error.
#[test]
fn requires_at_least_one_target() {
    cargo_bin_cmd!("build-stats").assert().failure();
}

/// A symbol lister exiting non-zero makes the CLI exit non-zero.
#[test]
fn failing_symbol_lister_fails_the_run() {
    let fake = FakeBuildDir::new();
    fake.link("app", "cc a.o -o app\n").file("app", "foo T 0 10\n");
    // The object exists but has no listing, so the fake nm exits non-zero.
    std::fs::write(fake.build_dir.join("a.o"), b"").expect("write object");
    cargo_bin_cmd!("build-stats")
        .arg("app")
        .arg("--build-dir")
        .arg(&fake.build_dir)
        .arg("--nm")
        .arg(&fake.nm)
        .arg("--ninja")
        .arg(&fake.ninja)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exited with"));
}
