use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_handlers_default() {
    let mut cmd = Command::new(cargo_bin!("trxps-payments"));
    cmd.arg("handlers");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "trxps,trxps,Trxps,trxps_payments.handler.trxps",
        ))
        .stdout(predicate::str::contains("iDEAL").not());
}

#[test]
fn test_handlers_override() {
    let mut cmd = Command::new(cargo_bin!("trxps-payments"));
    cmd.args(["handlers", "--handlers", "ideal,paypal"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "ideal,iDEAL,iDEAL,trxps_payments.handler.ideal",
        ))
        .stdout(predicate::str::contains("paypal,paypal,PayPal"));
}

#[test]
fn test_unknown_handler() {
    let mut cmd = Command::new(cargo_bin!("trxps-payments"));
    cmd.args(["handlers", "--handlers", "bitcoin"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown payment handler: bitcoin"));
}

#[test]
fn test_sync_prints_records() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, r#"{{ "enabledHandlers": ["ideal", "sofort"] }}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("trxps-payments"));
    cmd.arg("sync").arg("--config").arg(config.path());

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "iDEAL");
    assert_eq!(records[0]["customFields"]["trxps_payment_method_name"], "iDEAL");
    assert_eq!(records[0]["active"], false);
    assert_eq!(records[1]["name"], "SOFORT Banking");
}

#[test]
fn test_sync_activate_requires_api_key() {
    let mut cmd = Command::new(cargo_bin!("trxps-payments"));
    cmd.args(["sync", "--activate"]).env_remove("TRXPS_API_KEY");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Trxps API key is not set"));
}

#[test]
fn test_invalid_config_file() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, r#"{{ "pluginClass": "" }}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("trxps-payments"));
    cmd.arg("handlers").arg("--config").arg(config.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("pluginClass must not be empty"));
}
