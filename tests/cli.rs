//! End-to-end CLI tests
//!
//! Each test writes a transaction CSV into a temp directory, points the
//! settings directory there as well, and asserts on the binary's output.

use std::error::Error;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write test csv");
    path
}

fn cashflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashflow").expect("binary exists");
    cmd.env("CASHFLOW_CLI_DATA_DIR", dir.path());
    cmd
}

#[test]
fn balance_prints_current_balance() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "fecha,monto,tipo,categoria\n\
         2024-01-05,100,ingreso,Salario\n\
         2024-01-20,40,gasto,Comida\n",
    );

    cashflow(&dir)
        .arg("balance")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current balance: $60.00 COP"));
    Ok(())
}

#[test]
fn balance_counts_unknown_kinds_as_neither() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "fecha,monto,tipo\n\
         2024-01-05,100,ingreso\n\
         2024-01-06,500,transferencia\n",
    );

    cashflow(&dir)
        .arg("balance")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current balance: $100.00 COP"));
    Ok(())
}

#[test]
fn report_prints_monthly_table() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "date,amount,type,category\n\
         2024-01-05,100,income,Salary\n\
         2024-01-20,40,expense,Food\n",
    );

    cashflow(&dir)
        .arg("report")
        .arg(&csv)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Monthly Cash Flow Report")
                .and(predicate::str::contains("Income (COP)"))
                .and(predicate::str::contains("January 2024"))
                .and(predicate::str::contains("0.40"))
                .and(predicate::str::contains("45.00")),
        );
    Ok(())
}

#[test]
fn report_on_empty_file_prints_notice() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(&dir, "ledger.csv", "fecha,monto,tipo\n");

    cashflow(&dir)
        .arg("report")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions to report."));
    Ok(())
}

#[test]
fn report_exports_csv() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "date,amount,type\n\
         2024-01-05,100,income\n\
         2024-01-20,40,expense\n",
    );
    let out = dir.path().join("report.csv");

    cashflow(&dir)
        .arg("report")
        .arg(&csv)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report exported to:"));

    let exported = std::fs::read_to_string(&out)?;
    assert!(exported.starts_with(
        "Period,Income,Expense,Net Flow,Cumulative Flow,Burn Rate,Liquidity,Profitability %,Cash Runway Days"
    ));
    assert!(exported.contains("2024-01,100.00,40.00,60.00,60.00,0.40,2.50,60.00,45.00"));
    Ok(())
}

#[test]
fn project_prints_future_months() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "date,amount,type\n\
         2024-01-05,100,income\n\
         2024-02-05,200,income\n",
    );

    cashflow(&dir)
        .arg("project")
        .arg(&csv)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cash Flow Projection")
                .and(predicate::str::contains("Month 1"))
                .and(predicate::str::contains("Month 4"))
                .and(predicate::str::contains("300.00")),
        );
    Ok(())
}

#[test]
fn project_honors_horizon_flag() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "date,amount,type\n2024-01-05,100,income\n",
    );

    cashflow(&dir)
        .arg("project")
        .arg(&csv)
        .arg("--horizon")
        .arg("2")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Month 2").and(predicate::str::contains("Month 3").not()),
        );
    Ok(())
}

#[test]
fn project_without_data_fails() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(&dir, "ledger.csv", "date,amount,type\n");

    cashflow(&dir)
        .arg("project")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient data"));
    Ok(())
}

#[test]
fn project_exports_csv() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "date,amount,type\n\
         2024-01-05,100,income\n\
         2024-02-05,200,income\n",
    );
    let out = dir.path().join("projection.csv");

    cashflow(&dir)
        .arg("project")
        .arg(&csv)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Projection exported to:"));

    let exported = std::fs::read_to_string(&out)?;
    assert!(exported.starts_with("Future Period,Projected Income,Projected Expense"));
    assert!(exported.contains("1,300.00,0.00"));
    Ok(())
}

#[test]
fn alerts_flags_heavy_categories() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "fecha,monto,tipo,categoria\n\
         2024-01-02,300,gasto,Rent\n\
         2024-01-03,120,gasto,Food\n\
         2024-01-04,80,gasto,Utilities\n",
    );

    cashflow(&dir)
        .arg("alerts")
        .arg(&csv)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Categories above 20% of total expenses")
                .and(predicate::str::contains("Rent"))
                .and(predicate::str::contains("$300.00 COP"))
                .and(predicate::str::contains("Food"))
                .and(predicate::str::contains("Utilities").not()),
        );
    Ok(())
}

#[test]
fn alerts_honors_threshold_flag() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "fecha,monto,tipo,categoria\n\
         2024-01-02,300,gasto,Rent\n\
         2024-01-03,120,gasto,Food\n",
    );

    cashflow(&dir)
        .arg("alerts")
        .arg(&csv)
        .arg("--threshold")
        .arg("0.5")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Categories above 50%")
                .and(predicate::str::contains("Rent"))
                .and(predicate::str::contains("Food").not()),
        );
    Ok(())
}

#[test]
fn alerts_without_expenses_prints_notice() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "fecha,monto,tipo,categoria\n2024-01-05,100,ingreso,Salario\n",
    );

    cashflow(&dir)
        .arg("alerts")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded"));
    Ok(())
}

#[test]
fn simulate_prints_summary() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "fecha,monto,tipo\n2024-01-05,100,ingreso\n",
    );

    cashflow(&dir)
        .args(["simulate"])
        .arg(&csv)
        .args(["--amount", "30", "--kind", "expense"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Current balance:   $100.00 COP")
                .and(predicate::str::contains("Resulting balance: $70.00 COP"))
                .and(predicate::str::contains("-$30.00 COP")),
        );
    Ok(())
}

#[test]
fn simulate_rejects_unknown_kind() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "fecha,monto,tipo\n2024-01-05,100,ingreso\n",
    );

    cashflow(&dir)
        .arg("simulate")
        .arg(&csv)
        .args(["--amount", "10", "--kind", "Depósito"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction kind"));
    Ok(())
}

#[test]
fn load_rejects_unparseable_date() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(
        &dir,
        "ledger.csv",
        "fecha,monto,tipo\nnot-a-date,100,ingreso\n",
    );

    cashflow(&dir)
        .arg("balance")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Invalid input schema")
                .and(predicate::str::contains("record 0")),
        );
    Ok(())
}

#[test]
fn load_rejects_missing_columns() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let csv = write_csv(&dir, "ledger.csv", "fecha,monto\n2024-01-05,100\n");

    cashflow(&dir)
        .arg("balance")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "must contain the columns: fecha, monto, tipo",
        ));
    Ok(())
}

#[test]
fn missing_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    cashflow(&dir)
        .arg("balance")
        .arg(dir.path().join("nothing.csv"))
        .assert()
        .failure();
    Ok(())
}

#[test]
fn config_prints_paths_and_settings() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    cashflow(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("cashflow-cli Configuration")
                .and(predicate::str::contains("COP"))
                .and(predicate::str::contains("4 months")),
        );
    Ok(())
}

#[test]
fn first_run_writes_settings_file() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    cashflow(&dir).arg("config").assert().success();

    assert!(dir.path().join("config.json").exists());
    Ok(())
}

#[test]
fn no_arguments_prints_hint() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    cashflow(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Run 'cashflow --help'"));
    Ok(())
}
