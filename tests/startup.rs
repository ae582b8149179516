//! Startup behavior of the service binary.

mod common;

use common::{bullets, run, run_in, scratch_dir, stderr, valid_dotenv, valid_env};

const BIN: &str = env!("CARGO_BIN_EXE_stellarstream-backend");

#[test]
fn test_invalid_environment_exits_before_logging() {
    let output = run(BIN, &[], &[("CONTRACT_ID", "CABC")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let err = stderr(&output);
    assert!(!err.contains("Configuration loaded"));
    let lines = bullets(&err);
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[2],
        "  ✗ CONTRACT_ID: CONTRACT_ID must be a valid Stellar contract address \
         (56 chars, starting with \"C\")"
    );
}

#[test]
fn test_valid_environment_starts() {
    let mut vars = valid_env();
    vars.push(("RUST_LOG", "stellarstream_backend=info"));

    let output = run(BIN, &[], &vars);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let logs = common::stdout(&output);
    assert!(logs.contains("Configuration loaded"));
    assert!(!logs.contains("s3cret"));
}

#[test]
fn test_parent_directory_dotenv_is_not_loaded() {
    let dir = scratch_dir();
    std::fs::write(dir.join(".env"), valid_dotenv()).unwrap();
    let nested = dir.join("backend");
    std::fs::create_dir_all(&nested).unwrap();

    let output = run_in(&nested, BIN, &[], &[]);
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).contains("Configuration loaded"));
    assert_eq!(bullets(&stderr(&output)).len(), 4);
}
