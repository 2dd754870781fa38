use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "smartspend";

fn command(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("SMARTSPEND_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn cli_income_set_and_show() {
    let dir = TempDir::new().unwrap();

    command(&dir)
        .args(["income", "set", "52000"])
        .assert()
        .success()
        .stdout(contains("Income set to $52000.00 per year"));

    command(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(contains("Monthly: $4333.33"))
        .stdout(contains("Weekly:  $1000.00"));
}

#[test]
fn cli_expense_flow_feeds_summary() {
    let dir = TempDir::new().unwrap();

    command(&dir)
        .args([
            "expense",
            "add",
            "50",
            "--category",
            "Groceries",
            "--date",
            "2025-07-01",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded $50.00 (Groceries)"));

    command(&dir)
        .args(["goal", "contribute", "20", "--date", "2025-07-15", "--description", "Trip"])
        .assert()
        .success()
        .stdout(contains("Saved $20.00 toward 'Trip'"));

    command(&dir)
        .args(["summary", "--view", "monthly", "--period", "July 2025"])
        .assert()
        .success()
        .stdout(contains("SmartSpend Report - July 2025"))
        .stdout(contains("Total spent in this time period: $50.00"))
        .stdout(contains("Total saved in this time period: $20.00"));
}

#[test]
fn cli_rejects_negative_amount() {
    let dir = TempDir::new().unwrap();

    command(&dir)
        .args(["expense", "add", "--category", "Other", "--", "-5"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    command(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn cli_goal_list_shows_progress() {
    let dir = TempDir::new().unwrap();

    command(&dir)
        .args(["goal", "add", "Trip", "100"])
        .assert()
        .success()
        .stdout(contains("Created goal 'Trip' with target $100.00"));

    command(&dir)
        .args(["goal", "contribute", "20", "--description", "Trip"])
        .assert()
        .success();

    command(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(contains("Trip"))
        .stdout(contains("$80.00"));
}

#[test]
fn cli_export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    command(&dir)
        .args([
            "expense",
            "add",
            "50",
            "--category",
            "Groceries",
            "--date",
            "2025-07-01",
        ])
        .assert()
        .success();

    command(&dir)
        .args([
            "export",
            "--period",
            "July 2025",
            "--format",
            "csv",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("Exported 'July 2025' report"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.contains("Expense,2025-07-01,50.00,Groceries"));
    assert!(csv.contains("Total Spent,,50.00,"));
}
