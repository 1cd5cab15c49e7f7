use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").expect("bin");
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir);
    cmd
}

fn stored_expense_ids(dir: &Path) -> Vec<String> {
    let text = fs::read_to_string(dir.join("data").join("expenses.json")).expect("expenses file");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["id"].as_str().expect("id").to_string())
        .collect()
}

#[test]
fn summary_on_fresh_install() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: $0.00"))
        .stdout(predicate::str::contains("Monthly Budget: $1000.00"))
        .stdout(predicate::str::contains("No expenses yet."));

    assert!(!dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn add_then_list_and_persist() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "12.50", "-c", "food & dining", "-d", "Lunch"])
        .args(["--date", "2025-03-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added: $12.50 for Food & Dining"));

    expenses(dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("2025-03-14"));

    expenses(dir.path())
        .args(["expense", "list", "--month", "2025-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet."));

    assert_eq!(stored_expense_ids(dir.path()).len(), 1);
}

#[test]
fn over_budget_shows_alert() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "1200", "-c", "Shopping"])
        .assert()
        .success();

    expenses(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Budget Alert: You've exceeded your monthly budget!",
        ))
        .stdout(predicate::str::contains("exceeded your budget by $200.00"))
        .stdout(predicate::str::contains("120.0%"));

    expenses(dir.path())
        .args(["budget", "set", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget updated to $2000.00"));

    expenses(dir.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("60.0%"))
        .stdout(predicate::str::contains("Remaining:      $800.00"));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "0", "-c", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));

    expenses(dir.path())
        .args(["expense", "add", "abc", "-c", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert!(!dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn edit_and_delete_by_id() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "30", "-c", "Transportation", "--date", "2025-01-10"])
        .assert()
        .success();
    let id = stored_expense_ids(dir.path()).remove(0);

    expenses(dir.path())
        .args(["expense", "edit", &id[..8], "--amount", "35.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense updated: $35.25"));

    expenses(dir.path())
        .args(["expense", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount:      $35.25"));

    expenses(dir.path())
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted"));

    expenses(dir.path())
        .args(["expense", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert!(stored_expense_ids(dir.path()).is_empty());
}

#[test]
fn category_management() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["category", "add", "Pets", "--color", "#ec4899"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category added: Pets"));

    expenses(dir.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pets"))
        .stdout(predicate::str::contains("Healthcare"));

    expenses(dir.path())
        .args(["category", "delete", "pets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category deleted: Pets"));

    expenses(dir.path())
        .args(["category", "add", "Bad", "--color", "blue"])
        .assert()
        .failure();
}

#[test]
fn export_formats() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "8.99", "-c", "Entertainment", "--date", "2025-02-01"])
        .assert()
        .success();

    expenses(dir.path())
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ID,Date,Category,Description,Amount,Created At",
        ))
        .stdout(predicate::str::contains("2025-02-01,Entertainment,,8.99"));

    let out = dir.path().join("backup.json");
    expenses(dir.path())
        .args(["export", "json", "-o"])
        .arg(&out)
        .assert()
        .success();
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"schema_version\": \"1.0.0\""));

    expenses(dir.path())
        .args(["export", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Expense tracker export"));
}

#[test]
fn import_restores_export() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let file = source.path().join("backup.json");

    expenses(source.path())
        .args(["expense", "add", "42", "-c", "Healthcare"])
        .assert()
        .success();
    expenses(source.path())
        .args(["export", "json", "-o"])
        .arg(&file)
        .assert()
        .success();

    expenses(target.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing changed"));

    expenses(target.path())
        .arg("import")
        .arg(&file)
        .arg("--replace")
        .assert()
        .success();

    assert_eq!(
        stored_expense_ids(target.path()),
        stored_expense_ids(source.path())
    );
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory:"))
        .stdout(predicate::str::contains("Currency symbol: $"));
}

#[test]
fn config_rejects_time_only_date_format() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["config", "--date-format", "%H"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
    assert!(!dir.path().join("config.json").exists());

    expenses(dir.path())
        .args(["expense", "add", "5", "-c", "Other"])
        .assert()
        .success();
    expenses(dir.path())
        .args(["expense", "list"])
        .assert()
        .success();
}
