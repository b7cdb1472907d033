// tests/cli_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("vxrail-health").unwrap();
    for var in [
        "VXRAIL_HOST",
        "VXRAIL_USERNAME",
        "VXRAIL_PASSWORD",
        "VXRAIL_MIN_VERSION",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_unreachable_manager_exits_zero() {
    cli()
        .args([
            "--host",
            "http://127.0.0.1:1",
            "--username",
            "admin",
            "--password",
            "secret",
            "--timeout-secs",
            "2",
            "check",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cluster Health: UNHEALTHY"))
        .stdout(predicate::str::contains("Overall Status: UNHEALTHY"))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn test_default_command_is_check() {
    cli()
        .args(["--host", "http://127.0.0.1:1", "-u", "admin", "-p", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Summary ==="));
}

#[test]
fn test_missing_password_fails_setup() {
    cli()
        .args(["--host", "http://127.0.0.1:1", "--username", "admin", "check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Overall Status").not())
        .stderr(predicate::str::contains("password"));
}

#[test]
fn test_path_in_host_fails_setup() {
    cli()
        .args(["--host", "https://gw.lab/vxm", "-u", "admin", "-p", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not include a path"));
}
