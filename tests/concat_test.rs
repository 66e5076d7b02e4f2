use anyhow::Result;
use echo_server::core::concat;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

#[test]
fn test_concatenates_files_in_argument_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.txt");
    let third = temp_dir.path().join("third.bin");
    fs::write(&first, "alpha\n")?;
    fs::write(&second, "beta\n")?;
    fs::write(&third, [0u8, 159, 146, 150])?;

    let mut output = Vec::new();
    let copied = concat::concat_files(&[&first, &second, &third], &mut output)?;

    let mut expected = b"alpha\nbeta\n".to_vec();
    expected.extend([0u8, 159, 146, 150]);
    assert_eq!(copied, expected.len() as u64);
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn test_missing_file_aborts_before_later_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let present = temp_dir.path().join("present.txt");
    let missing = temp_dir.path().join("missing.txt");
    let never_read = temp_dir.path().join("never_read.txt");
    fs::write(&present, "kept\n")?;
    fs::write(&never_read, "must not appear\n")?;

    let mut output = Vec::new();
    let result = concat::concat_files(&[&present, &missing, &never_read], &mut output);

    assert!(result.is_err());
    assert_eq!(output, b"kept\n");
    Ok(())
}

#[test]
fn test_concat_binary_copies_stdin_to_stdout() -> Result<()> {
    let payload: Vec<u8> = (0u8..=255).cycle().take(4096).collect();

    let mut child = Command::new(env!("CARGO_BIN_EXE_concat"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child.stdin.take().unwrap().write_all(&payload)?;
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    assert_eq!(output.stdout, payload);
    Ok(())
}

#[test]
fn test_concat_binary_fails_on_missing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("missing.txt");

    let output = Command::new(env!("CARGO_BIN_EXE_concat"))
        .arg(&missing)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}
