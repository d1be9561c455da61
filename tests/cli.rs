use std::fs;

use assert_cmd::Command;

/// Drives one interactive session: feeds `stdin` to the binary and returns
/// the captured stdout and stderr. The session must end cleanly.
fn run_session(args: &[&str], stdin: &str) -> (String, String) {
    let output = Command::cargo_bin("shunt").unwrap()
                                            .args(args)
                                            .write_stdin(stdin)
                                            .output()
                                            .unwrap();
    assert!(output.status.success(), "session exited with {:?}", output.status);
    (String::from_utf8(output.stdout).unwrap(), String::from_utf8(output.stderr).unwrap())
}

#[test]
fn one_shot_expression() {
    Command::cargo_bin("shunt").unwrap()
                               .arg("2 + 3 * 4")
                               .assert()
                               .success()
                               .stdout("Result: 14\n");
}

#[test]
fn one_shot_fractional_result() {
    Command::cargo_bin("shunt").unwrap()
                               .arg("7 / 2")
                               .assert()
                               .success()
                               .stdout("Result: 3.5\n");
}

#[test]
fn division_by_zero_fails() {
    Command::cargo_bin("shunt").unwrap()
                               .arg("5 / 0")
                               .assert()
                               .failure()
                               .stderr("Error: Division by zero.\n");
}

#[test]
fn unclosed_parenthesis_fails() {
    Command::cargo_bin("shunt").unwrap()
                               .arg("(2 + 3")
                               .assert()
                               .failure()
                               .stderr("Error: Malformed expression: found '(' that was never closed.\n");
}

#[test]
fn expression_from_file() {
    let path =
        std::env::temp_dir().join(format!("shunt_cli_test_expression_{}.txt", std::process::id()));
    fs::write(&path, "(2 + 3) * 4\n").unwrap();

    Command::cargo_bin("shunt").unwrap()
                               .arg("--file")
                               .arg(&path)
                               .assert()
                               .success()
                               .stdout("Result: 20\n");

    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_fails() {
    Command::cargo_bin("shunt").unwrap()
                               .arg("--file")
                               .arg("does_not_exist.txt")
                               .assert()
                               .failure();
}

#[test]
fn session_greets_and_evaluates_lines() {
    let (stdout, _) = run_session(&[], "2 + 2\n7 / 2\nexit\n");
    assert!(stdout.contains("Welcome to shunt"), "missing greeting: {stdout}");
    assert!(stdout.contains("Result: 4"), "missing first result: {stdout}");
    assert!(stdout.contains("Result: 3.5"), "missing second result: {stdout}");
}

#[test]
fn session_help_command() {
    let (stdout, _) = run_session(&[], "help\nexit\n");
    assert!(stdout.contains("-----HELP-----"), "missing help header: {stdout}");
    assert!(stdout.contains("Supported symbols: +, -, /, ^, *"),
            "missing symbol list: {stdout}");
}

#[test]
fn session_version_command() {
    let (stdout, _) = run_session(&[], "version\nexit\n");
    let expected = concat!("shunt version ", env!("CARGO_PKG_VERSION"));
    assert!(stdout.contains(expected), "missing version line: {stdout}");
}

#[test]
fn session_continues_after_an_error() {
    let (stdout, stderr) = run_session(&[], "5 / 0\n2 + 2\nexit\n");
    assert!(stderr.contains("Error: Division by zero."), "missing error: {stderr}");
    assert!(stdout.contains("Result: 4"), "loop did not continue: {stdout}");
}

#[test]
fn session_rejects_lines_over_the_length_bound() {
    let (stdout, stderr) = run_session(&["--max-line-len", "10"], "9 + 9 + 9 + 9\n2 + 2\nexit\n");
    assert!(stderr.contains("longer than 10 characters"), "missing length error: {stderr}");
    assert!(!stdout.contains("Result: 36"), "long line was evaluated: {stdout}");
    assert!(stdout.contains("Result: 4"), "loop did not continue: {stdout}");
}

#[test]
fn end_of_input_ends_the_session() {
    // No `exit`; the session ends when stdin runs out.
    let (stdout, _) = run_session(&[], "2 + 2\n");
    assert!(stdout.contains("Result: 4"), "missing result: {stdout}");
}
