#![allow(dead_code)]

use std::ffi::OsStr;

/// Run the `a55-hello` binary with `args` and `envs`, and check that it
/// writes exactly `stdout` and `stderr` and exits successfully.
pub fn run_greeter<A: AsRef<OsStr>>(
    args: &[A],
    envs: &[(&str, &str)],
    stdout: &str,
    stderr: &'static str,
) {
    use assert_cmd::Command;

    let mut command = Command::cargo_bin("a55-hello").unwrap();
    command.args(args);
    // Keep the test environment's logger settings out of stderr.
    command.env_remove("RUST_LOG");
    command.envs(envs.iter().copied());
    command
        .assert()
        .stdout(stdout.to_owned())
        .stderr(stderr)
        .success();
}

/// The line the binary prints for a process with `argc` arguments.
pub fn expected_line(argc: usize) -> String {
    format!("[A55] Hello from FRDM\u{2011}i.MX93! argc={argc}\n")
}
