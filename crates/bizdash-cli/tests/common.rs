//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const STAFF: &str = r#"[
  {"id": 1, "name": "Ada Lovelace", "role": "owner", "email": "ada@example.com"},
  {"id": 2, "name": "Grace Hopper", "role": "manager", "email": "grace@example.com"},
  {"id": 3, "name": "Linus Torvalds", "role": "contractor", "email": "linus@example.com", "active": false}
]"#;

pub const INVOICES: &str = r#"[
  {"id": "INV-0001", "client": "Acme, Inc.", "amount_cents": 125000, "status": "paid", "issued_on": "2026-01-05", "due_on": "2026-02-05"},
  {"id": "INV-0002", "client": "Globex", "amount_cents": 9950, "status": "sent", "issued_on": "2026-02-01"}
]"#;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    staff: PathBuf,
    invoices: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".bizdash");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let staff = temp_dir.path().join("staff.json");
        let invoices = temp_dir.path().join("invoices.json");
        fs::write(&staff, STAFF).expect("Failed to write staff");
        fs::write(&invoices, INVOICES).expect("Failed to write invoices");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            staff,
            invoices,
        }
    }

    pub fn staff(&self) -> &PathBuf {
        &self.staff
    }

    pub fn invoices(&self) -> &PathBuf {
        &self.invoices
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.data_dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// `bizdash` pointed at this fixture's data dir.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("bizdash").expect("Failed to find binary");
        cmd.env_remove("RUST_LOG")
            .env_remove("BIZDASH_PATH")
            .arg("--data-dir")
            .arg(&self.data_dir);
        cmd
    }

    pub fn list_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(["--format", "json", "list"])
            .args(args)
            .output()
            .expect("Failed to run bizdash");
        assert!(output.status.success(), "list failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
