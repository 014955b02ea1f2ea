//! End-to-end tests driving the `pocketbook` binary against a temporary data directory

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pocketbook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketbook").unwrap();
    cmd.env("POCKETBOOK_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn run(dir: &TempDir, args: &[&str]) {
    pocketbook(dir).args(args).assert().success();
}

/// Initialized store with a profile, January income and two expenses
fn january_setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);
    run(&dir, &["person", "set", "Ana", "Petrovic", "--birth-date", "1990-05-17"]);
    run(&dir, &["income", "add", "Salary", "1000", "--month", "2025-01"]);
    run(
        &dir,
        &["expense", "add", "Market", "200", "--category", "Groceries", "--month", "2025-01"],
    );
    run(
        &dir,
        &["expense", "add", "Rent", "300", "--category", "housing", "--month", "2025-01"],
    );
    dir
}

#[test]
fn test_init_creates_starter_categories() {
    let dir = TempDir::new().unwrap();

    pocketbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());

    pocketbook(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Entertainment"));
}

#[test]
fn test_init_again_lists_existing_categories() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);
    run(&dir, &["category", "add", "Pets", "--color", "#aa5500"]);

    pocketbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Existing categories kept"))
        .stdout(predicate::str::contains("Pets (#aa5500)"))
        .stdout(predicate::str::contains("Starter categories created").not());
}

#[test]
fn test_report_show() {
    let dir = january_setup();

    pocketbook(&dir)
        .args(["report", "show", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Petrovic"))
        .stdout(predicate::str::contains("Monthly Report: January 2025"))
        .stdout(predicate::str::contains("$1000.00"))
        .stdout(predicate::str::contains("$500.00"))
        .stdout(predicate::str::contains("40.0%"))
        .stdout(predicate::str::contains("60.0%"));
}

#[test]
fn test_report_for_empty_month() {
    let dir = january_setup();

    pocketbook(&dir)
        .args(["report", "show", "--month", "2025-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No income or expenses recorded"));
}

#[test]
fn test_report_export_default_location() {
    let dir = january_setup();

    pocketbook(&dir)
        .args(["report", "export", "--month", "2025-01", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    let path = dir
        .path()
        .join("exports")
        .join("Report_Ana_Petrovic_2025-01.csv");
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("Expense,Housing,Rent,300.00,60.0"));
}

#[test]
fn test_report_export_to_output() {
    let dir = january_setup();
    let output = dir.path().join("statement.txt");

    pocketbook(&dir)
        .args(["report", "export", "--month", "2025-01", "--output"])
        .arg(&output)
        .assert()
        .success();

    let content = std::fs::read_to_string(output).unwrap();
    assert!(content.contains("MONTHLY FINANCIAL REPORT"));
    assert!(content.contains("Rent"));
}

#[test]
fn test_category_delete_rejected_while_referenced() {
    let dir = january_setup();

    pocketbook(&dir)
        .args(["category", "delete", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    pocketbook(&dir)
        .args(["category", "show", "Groceries"])
        .assert()
        .success();

    pocketbook(&dir)
        .args(["category", "delete", "Health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted category: Health"));
}

#[test]
fn test_expense_with_unknown_category() {
    let dir = january_setup();

    pocketbook(&dir)
        .args(["expense", "add", "Gadget", "99", "--category", "Gadgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_negative_amount_rejected() {
    let dir = january_setup();

    pocketbook(&dir)
        .args(["income", "add", "Refund", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn test_amount_above_maximum_rejected() {
    let dir = january_setup();

    pocketbook(&dir)
        .args(["income", "add", "Jackpot", "92233720368547758.07", "--month", "2025-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));

    pocketbook(&dir)
        .args(["report", "show", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00"));
}

#[test]
fn test_income_requires_profile() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);

    pocketbook(&dir)
        .args(["income", "add", "Salary", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Person not found"));
}

#[test]
fn test_history_snapshot_follows_changes() {
    let dir = january_setup();

    pocketbook(&dir)
        .args(["history", "show", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Rent"));

    pocketbook(&dir)
        .args(["history", "log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense"));
}
