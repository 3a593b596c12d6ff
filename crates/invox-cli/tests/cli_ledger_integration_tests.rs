//! CLI ledger integration tests
//!
//! These tests verify that the CLI commands correctly delegate to the ledger
//! engine over a file-backed store.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn write_draft(temp_dir: &TempDir, invoice_number: u32) -> PathBuf {
    let path = temp_dir.path().join(format!("draft-{}.json", invoice_number));
    fs::write(
        &path,
        format!(
            r#"{{
                "invoiceNumber": {},
                "invoiceDate": "2025-06-01",
                "billInfo": {{"companyName": "Acme GmbH"}},
                "items": [
                    {{"description": "Consulting", "price": 100.0, "tax": 19.0,
                      "amount": 119.0, "expanded": true}}
                ],
                "invoiceModified": true
            }}"#,
            invoice_number
        ),
    )
    .unwrap();
    path
}

fn run(temp_dir: &TempDir, db: &PathBuf, args: &[&str]) -> std::process::Output {
    let cli_bin = env!("CARGO_BIN_EXE_invox-cli");
    let mut full_args: Vec<&str> = args.to_vec();
    let db_str = db.to_str().unwrap();
    full_args.extend(["--db", db_str]);

    Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args(&full_args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_record_then_list() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("ledger.json");
    let draft = write_draft(&temp_dir, 1001);

    let output = run(
        &temp_dir,
        &db,
        &["record", "--file", draft.to_str().unwrap()],
    );
    assert!(
        output.status.success(),
        "record should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Invoice recorded"));

    let output = run(&temp_dir, &db, &["list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Persisted record is clean of transient editor fields
    assert!(stdout.contains("\"invoiceNumber\": 1001"));
    assert!(!stdout.contains("invoiceModified"));
    assert!(!stdout.contains("\"expanded\""));
}

#[test]
fn test_cli_fifth_record_creates_backup() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("ledger.json");

    for n in 0..5 {
        let draft = write_draft(&temp_dir, 1001 + n);
        let output = run(
            &temp_dir,
            &db,
            &["record", "--file", draft.to_str().unwrap()],
        );
        assert!(output.status.success());
    }

    let output = run(&temp_dir, &db, &["backups", "list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected one snapshot line: {}", stdout);
    assert!(lines[0].contains("invoices=5"));
}

#[test]
fn test_cli_export_writes_csv() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("ledger.json");
    let draft = write_draft(&temp_dir, 1001);
    assert!(run(&temp_dir, &db, &["record", "--file", draft.to_str().unwrap()])
        .status
        .success());

    let out_path = temp_dir.path().join("export.csv");
    let output = run(
        &temp_dir,
        &db,
        &["export", "--out", out_path.to_str().unwrap()],
    );
    assert!(output.status.success());

    let csv = fs::read_to_string(&out_path).unwrap();
    assert!(csv.starts_with('\u{feff}'));
    assert!(csv.contains("Invoice Number,"));
    assert!(csv.contains("1001,2025-06-01,Acme GmbH"));
}

#[test]
fn test_cli_export_empty_ledger_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("ledger.json");

    let output = run(&temp_dir, &db, &["export"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_MISSING_INVOICE_DATA"));
}

#[test]
fn test_cli_number_show_and_issue() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("ledger.json");

    let output = run(&temp_dir, &db, &["number", "show"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1001");

    let output = run(&temp_dir, &db, &["number", "issue"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1002");

    let output = run(&temp_dir, &db, &["number", "show"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1002");
}

#[test]
fn test_cli_backup_restore_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("ledger.json");

    for n in 0..5 {
        let draft = write_draft(&temp_dir, 1001 + n);
        assert!(run(&temp_dir, &db, &["record", "--file", draft.to_str().unwrap()])
            .status
            .success());
    }
    let stdout = run(&temp_dir, &db, &["backups", "list"]).stdout;
    let listing = String::from_utf8_lossy(&stdout);
    let key = listing.split_whitespace().next().unwrap().to_string();

    // Drift past the snapshot, then restore
    let draft = write_draft(&temp_dir, 2001);
    assert!(run(&temp_dir, &db, &["record", "--file", draft.to_str().unwrap()])
        .status
        .success());

    let output = run(&temp_dir, &db, &["backups", "restore", "--key", &key]);
    assert!(
        output.status.success(),
        "restore should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let listing = run(&temp_dir, &db, &["list"]).stdout;
    let listing = String::from_utf8_lossy(&listing);
    assert!(listing.contains("\"invoiceNumber\": 1005"));
    assert!(!listing.contains("\"invoiceNumber\": 2001"));
}
