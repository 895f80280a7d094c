//! Runs the `another-command` binary end to end.

use std::process::{Command, Output};

fn run_binary(envs: &[(&str, &str)]) -> Output {
  let bin = env!("CARGO_BIN_EXE_another-command");

  Command::new(bin)
      .env_remove("FASTSUM_LOG_THRESHOLD")
      .envs(envs.iter().copied())
      .output()
      .expect("failed to run another-command")
}

fn stdout_lines(output: &Output) -> Vec<String> {
  String::from_utf8_lossy(&output.stdout).lines().map(str::to_owned).collect()
}

#[test]
fn prints_greeting_sum_and_library_hello() {
  let output = run_binary(&[]);

  assert!(
    output.status.success(),
    "expected success, got {:?}\nstderr:\n{}",
    output.status.code(),
    String::from_utf8_lossy(&output.stderr)
  );
  assert_eq!(output.status.code(), Some(0));
  assert_eq!(
    stdout_lines(&output),
    [
      "Yes, i am the other binary.",
      "Also, the super fast sum of 1 + 2 is 3",
      "Hello from the library.",
    ]
  );
}

#[test]
fn verbose_logging_stays_off_stdout() {
  let output = run_binary(&[("FASTSUM_LOG_THRESHOLD", "255")]);
  let lines  = stdout_lines(&output);

  assert!(output.status.success());
  assert_eq!(lines[0], "Yes, i am the other binary.");
  assert_eq!(lines[1], "Also, the super fast sum of 1 + 2 is 3");
  assert_eq!(lines.len(), 3);

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("summing 2 values"), "expected bridge trace on stderr, got:\n{stderr}");
}

#[test]
fn invalid_threshold_is_ignored() {
  let output = run_binary(&[("FASTSUM_LOG_THRESHOLD", "very")]);

  assert!(output.status.success());
  assert_eq!(stdout_lines(&output)[1], "Also, the super fast sum of 1 + 2 is 3");

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("ignoring invalid FASTSUM_LOG_THRESHOLD"), "got:\n{stderr}");
}
