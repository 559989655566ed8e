use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trackit(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trackit").unwrap();
    cmd.env("TRACKIT_DATA_DIR", base).env_remove("RUST_LOG");
    cmd
}

fn write_month(base: &Path, month: &str, contents: &str) {
    let data = base.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join(format!("{}.csv", month)), contents).unwrap();
}

#[test]
fn show_missing_month_prints_notice() {
    let temp_dir = TempDir::new().unwrap();

    trackit(temp_dir.path())
        .args(["show", "March"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data found for March."))
        .stdout(predicate::str::contains("Top Category: None    Total: Rs.0.00"));
}

#[test]
fn show_month_with_transactions() {
    let temp_dir = TempDir::new().unwrap();
    write_month(
        temp_dir.path(),
        "January",
        "Jan 1,Swiggy order,200\nJan 2,Uber ride,100\nJan 3,Netflix,50\nbroken row\n",
    );

    trackit(temp_dir.path())
        .args(["show", "jan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January (3 transactions)"))
        .stdout(predicate::str::contains("Swiggy order"))
        .stdout(predicate::str::contains("Entertainment"))
        .stdout(predicate::str::contains("Top Category: Food    Total: Rs.350.00"));
}

#[test]
fn limit_set_then_show_reports_violation() {
    let temp_dir = TempDir::new().unwrap();
    write_month(temp_dir.path(), "January", "Jan 1,Zomato,500\n");

    trackit(temp_dir.path())
        .args(["limit", "set", "January", "food", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Limit saved successfully!"));

    trackit(temp_dir.path())
        .args(["show", "January"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Food exceeded its limit (Rs.300.00) by Rs.200.00",
        ));

    let limits = fs::read_to_string(temp_dir.path().join("data").join("limits.csv")).unwrap();
    assert_eq!(limits, "Month,Category,Limit\nJanuary,Food,300.00\n");
}

#[test]
fn limit_set_twice_keeps_one_row() {
    let temp_dir = TempDir::new().unwrap();

    for amount in ["300", "450.5"] {
        trackit(temp_dir.path())
            .args(["limit", "set", "May", "Shopping", amount])
            .assert()
            .success();
    }

    let limits = fs::read_to_string(temp_dir.path().join("data").join("limits.csv")).unwrap();
    assert_eq!(limits, "Month,Category,Limit\nMay,Shopping,450.50\n");

    trackit(temp_dir.path())
        .args(["limit", "list", "May"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rs.450.50"));
}

#[test]
fn limit_set_reloads_displayed_month() {
    let temp_dir = TempDir::new().unwrap();
    write_month(temp_dir.path(), "February", "Feb 1,Jio recharge,999\n");

    trackit(temp_dir.path())
        .args([
            "limit",
            "set",
            "February",
            "Bills & Utilities",
            "500",
            "--displayed",
            "February",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("February (1 transactions)"))
        .stdout(predicate::str::contains(
            "Bills & Utilities exceeded its limit (Rs.500.00) by Rs.499.00",
        ));
}

#[test]
fn limit_set_rejects_bad_input() {
    let temp_dir = TempDir::new().unwrap();

    trackit(temp_dir.path())
        .args(["limit", "set", "January", "Food", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter a valid number for limit"));

    trackit(temp_dir.path())
        .args(["limit", "set", "January", "Groceries", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    assert!(!temp_dir.path().join("data").join("limits.csv").exists());
}

#[test]
fn summary_view_shows_breakdown() {
    let temp_dir = TempDir::new().unwrap();
    write_month(temp_dir.path(), "April", "Apr 1,Zomato,500\nApr 2,Uber,100\n");
    fs::write(
        temp_dir.path().join("data").join("limits.csv"),
        "Month,Category,Limit\nApril,Food,300\nApril,Transport,250\n",
    )
    .unwrap();

    trackit(temp_dir.path())
        .args(["summary", "April"])
        .assert()
        .success()
        .stdout(predicate::str::contains("===== Monthly Summary: April ====="))
        .stdout(predicate::str::contains("Total Spent: Rs.600.00"))
        .stdout(predicate::str::contains("**Exceeded by Rs.200.00**"))
        .stdout(predicate::str::contains("| Remaining: Rs.150.00"))
        .stdout(predicate::str::contains("Top Category: Food (Rs.500.00)"));
}

#[test]
fn summary_exports_csv() {
    let temp_dir = TempDir::new().unwrap();
    write_month(temp_dir.path(), "June", "Jun 1,Netflix,199\n");
    let out = temp_dir.path().join("june.csv");

    trackit(temp_dir.path())
        .args(["summary", "June", "--output"])
        .arg(&out)
        .assert()
        .success();

    let exported = fs::read_to_string(&out).unwrap();
    assert_eq!(
        exported,
        "Category,Spent,Limit,Remaining,Overage\nEntertainment,199.00,,,\nTOTAL,199.00,,,\n"
    );
}

#[test]
fn malformed_amount_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();
    write_month(temp_dir.path(), "July", "Jul 1,Uber,12\nJul 2,Ola,twelve\n");

    trackit(temp_dir.path())
        .args(["show", "July"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Total: Rs.0.00"))
        .stderr(predicate::str::contains("Malformed amount 'twelve'"));
}

#[test]
fn categorize_command() {
    let temp_dir = TempDir::new().unwrap();

    trackit(temp_dir.path())
        .args(["categorize", "Amazon electricity bill"])
        .assert()
        .success()
        .stdout("Bills & Utilities\n");
}

#[test]
fn invalid_month_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    trackit(temp_dir.path())
        .args(["show", "Smarch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn limit_saved_even_when_displayed_month_fails_to_reload() {
    let temp_dir = TempDir::new().unwrap();
    write_month(temp_dir.path(), "March", "Mar 1,Zomato,oops\n");

    trackit(temp_dir.path())
        .args(["limit", "set", "March", "Food", "100", "--displayed", "March"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Limit saved successfully!"))
        .stdout(predicate::str::contains("Top Category: None    Total: Rs.0.00"))
        .stderr(predicate::str::contains("Could not reload March"))
        .stderr(predicate::str::contains("Malformed amount 'oops'"));

    let limits = fs::read_to_string(temp_dir.path().join("data").join("limits.csv")).unwrap();
    assert_eq!(limits, "Month,Category,Limit\nMarch,Food,100.00\n");
}

#[test]
fn oversized_amount_is_rejected_as_malformed() {
    let temp_dir = TempDir::new().unwrap();
    write_month(
        temp_dir.path(),
        "January",
        "Jan 1,Zomato,90000000000000000\nJan 2,Swiggy,90000000000000000\n",
    );

    trackit(temp_dir.path())
        .args(["summary", "January"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed amount '90000000000000000'"));
}

#[test]
fn corrupt_settings_only_break_commands_that_read_them() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.json"), "{not json").unwrap();

    trackit(temp_dir.path())
        .args(["categorize", "Zomato dinner"])
        .assert()
        .success()
        .stdout("Food\n");

    trackit(temp_dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bills & Utilities"));

    trackit(temp_dir.path())
        .args(["show", "January"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn init_writes_settings_once() {
    let temp_dir = TempDir::new().unwrap();

    trackit(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(temp_dir.path().join("config.json").exists());
    assert!(temp_dir.path().join("data").is_dir());

    trackit(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}
