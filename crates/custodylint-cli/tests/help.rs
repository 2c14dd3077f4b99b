use assert_cmd::Command;

/// Helper to get a Command for the custodylint binary.
#[allow(deprecated)]
fn custodylint_cmd() -> Command {
    Command::cargo_bin("custodylint").unwrap()
}

#[test]
fn help_works() {
    custodylint_cmd().arg("--help").assert().success();
}

#[test]
fn analyze_help_works() {
    custodylint_cmd().args(["analyze", "--help"]).assert().success();
}

#[test]
fn unknown_subcommand_fails() {
    custodylint_cmd().arg("frobnicate").assert().failure();
}
