//! Integrationstest für das Beispiel `derive_fields.rs`.
//!
//! Erwartung: zwei JSONL-Zeilen → zwei Ausgabezeilen mit Status-Label,
//! Event-Name und bereinigter Plugin-Ausgabe.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn write_temp_jsonl() -> std::path::PathBuf {
    let tmp =
        std::env::temp_dir().join(format!("heimwache_derive_test_{}.jsonl", std::process::id()));
    fs::write(
        &tmp,
        r#"{"client":{"name":"db1"},"check":{"name":"disk-space","status":2,"output":"CheckDisk CRITICAL: / is 96% full","thresholds":{"warning":80,"critical":95}}}
{"client":{"name":"web3"},"check":{"name":"http-health","status":0,"output":"200 OK"}}"#,
    )
    .unwrap_or_else(|e| panic!("Fehler beim Schreiben der temporären JSONL-Datei: {e}"));
    tmp
}

#[test]
fn example_derive_fields_labels_both_lines() {
    let path = write_temp_jsonl();
    let mut cmd = Command::new("cargo");
    cmd.args([
        "run",
        "--package",
        "heimwache-alerts",
        "--example",
        "derive_fields",
        "--",
        path.to_str()
            .unwrap_or_else(|| panic!("Temporärer Pfad ist kein valides UTF-8: {path:?}")),
    ]);

    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("CRITICAL\tdb1_disk-space\tCheckDisk CRITICAL")
                .and(predicate::str::contains("OK\tweb3_http-health\t200 OK")),
        );
}

#[test]
fn example_derive_fields_accepts_stdin() {
    let input =
        r#"{"client":{"name":"cache2"},"check":{"name":"redis-ping","status":3,"output":"timed out: no reply"}}"#;

    let mut cmd = Command::new("cargo");
    cmd.args([
        "run",
        "--package",
        "heimwache-alerts",
        "--example",
        "derive_fields",
    ]);
    cmd.write_stdin(input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("UNKNOWN\tcache2_redis-ping\ttimed out"));
}
