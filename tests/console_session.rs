use assert_cmd::Command;
use predicates::prelude::*;

fn warehouse(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("warehouse").unwrap();
    cmd.env("WAREHOUSE_HOME", home).env("NO_COLOR", "1");
    cmd
}

fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn widget_order_end_to_end() {
    let temp_dir = tempfile::tempdir().unwrap();

    warehouse(temp_dir.path())
        .write_stdin(script(&[
            "n", // skip restore
            "2", "Widget", "9.99", "10", // add product
            "1", "Jane", "Doe", "1 Main St", "555-0100", // add client
            "5", "C1", "P1", "3", // wishlist
            "6", "C1", // place order
            "4", // view products
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added: P1 Widget"))
        .stdout(predicate::str::contains("Client added: C1 Jane Doe"))
        .stdout(predicate::str::contains("total 29.97"))
        .stdout(predicate::str::contains("$29.97"));
}

#[test]
fn saved_state_survives_restart() {
    let temp_dir = tempfile::tempdir().unwrap();

    warehouse(temp_dir.path())
        .write_stdin(script(&[
            "n", "2", "Widget", "9.99", "10", "1", "Jane", "Doe", "1 Main St", "555-0100", "10",
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully saved"));
    assert!(temp_dir.path().join("warehouse.json").exists());

    // A client added after the restore must not reuse C1.
    warehouse(temp_dir.path())
        .write_stdin(script(&[
            "y", "1", "John", "Roe", "2 Side St", "555-0101", "3", "0",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully retrieved"))
        .stdout(predicate::str::contains("Client added: C2 John Roe"))
        .stdout(predicate::str::contains("Jane Doe"));
}

#[test]
fn unknown_ids_are_reported_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();

    warehouse(temp_dir.path())
        .write_stdin(script(&["n", "6", "C404", "8", "P404", "1", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Client not found: C404"))
        .stdout(predicate::str::contains("Product not found: P404"));
}

#[test]
fn end_of_input_exits_zero() {
    let temp_dir = tempfile::tempdir().unwrap();

    warehouse(temp_dir.path())
        .write_stdin("n\n1\nJane\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter client last name"));
}

#[test]
fn missing_snapshot_starts_fresh() {
    let temp_dir = tempfile::tempdir().unwrap();

    warehouse(temp_dir.path())
        .write_stdin(script(&["y", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting fresh"))
        .stdout(predicate::str::contains("Enter a number between 0 and 12"));
}
