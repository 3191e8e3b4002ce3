use repokit_util::errors::RepokitError;
use repokit_util::process::CommandBuilder;

#[test]
fn test_builder_simple_command() {
    let output = CommandBuilder::new("echo").arg("hello").exec().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "hello");
}

#[test]
fn test_builder_multiple_args() {
    let output = CommandBuilder::new("echo")
        .args(["one", "two", "three"])
        .exec()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "one two three");
}

#[test]
fn test_builder_with_env() {
    let output = CommandBuilder::new("sh")
        .arg("-c")
        .arg("echo $MY_TEST_VAR")
        .env("MY_TEST_VAR", "repokit_test_value")
        .exec()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "repokit_test_value");
}

#[test]
fn test_builder_with_cwd() {
    let tmp = tempfile::TempDir::new().unwrap();

    // Write a marker file and verify the command can see it from the cwd.
    let marker = tmp.path().join("repokit_cwd_test.marker");
    std::fs::write(&marker, "ok").unwrap();

    #[cfg(unix)]
    let output = CommandBuilder::new("ls")
        .arg("repokit_cwd_test.marker")
        .cwd(tmp.path())
        .exec()
        .unwrap();

    #[cfg(windows)]
    let output = CommandBuilder::new("cmd")
        .args(["/C", "dir", "/b", "repokit_cwd_test.marker"])
        .cwd(tmp.path())
        .exec()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().contains("repokit_cwd_test.marker"));
}

#[test]
fn test_builder_nonexistent_program() {
    let result = CommandBuilder::new("nonexistent_program_xyz_123").exec();
    assert!(result.is_err());
}

#[test]
fn test_command_line_joins_program_and_args() {
    let builder = CommandBuilder::new("git").args(["push", "--force-with-lease"]);
    assert_eq!(builder.command_line(), "git push --force-with-lease");
}

#[test]
fn test_run_returns_stdout_on_success() {
    let stdout = CommandBuilder::new("echo").arg("captured").run().unwrap();
    assert_eq!(stdout.trim(), "captured");
}

#[cfg(unix)]
#[test]
fn test_run_failure_reports_command_code_and_streams() {
    let result = CommandBuilder::new("sh")
        .args(["-c", "echo some-output; echo some-diagnostic 1>&2; exit 3"])
        .run();
    match result {
        Err(RepokitError::CommandFailed {
            command,
            code,
            stdout,
            stderr,
        }) => {
            assert!(command.starts_with("sh -c"), "got: {command}");
            assert_eq!(code, 3);
            assert!(stdout.contains("some-output"), "got: {stdout}");
            assert!(stderr.contains("some-diagnostic"), "got: {stderr}");
        }
        other => panic!("expected CommandFailed, got: {other:?}"),
    }
}

#[cfg(windows)]
#[test]
fn test_run_failure_reports_command_code_and_streams() {
    let result = CommandBuilder::new("cmd").args(["/C", "exit 3"]).run();
    match result {
        Err(RepokitError::CommandFailed { command, code, .. }) => {
            assert!(command.starts_with("cmd /C"), "got: {command}");
            assert_eq!(code, 3);
        }
        other => panic!("expected CommandFailed, got: {other:?}"),
    }
}
