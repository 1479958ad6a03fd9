use assert_cmd::cargo::cargo_bin;
use std::fs;
use std::process::{Command, Stdio};
use tempfile::TempDir;

#[test]
fn exits_successfully_when_downstream_pipe_closes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let markdown = temp.path().join("long.md");
    let document: String = (0..20_000)
        .map(|idx| format!("## Heading number {idx}\n"))
        .collect();
    fs::write(&markdown, document)?;

    let mut cmd = Command::new(cargo_bin("markdown-toc"));
    cmd.arg(&markdown)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;
    drop(child.stdout.take());

    let output = child.wait_with_output()?;
    assert!(
        output.status.success(),
        "expected success, got status: {status:?}",
        status = output.status
    );
    assert!(
        output.stderr.is_empty(),
        "expected stderr to be empty, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
