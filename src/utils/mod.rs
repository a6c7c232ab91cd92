use crate::core::BackendError;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run a program to completion, capturing stdout and stderr, and give up
/// after `limit`. The child is killed if the deadline passes.
pub async fn run_output_with_timeout(
    program: &str,
    args: &[String],
    limit: Duration,
) -> Result<Output, BackendError> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| BackendError::Engine(format!("failed to start {}: {}", program, e)))?;

    match timeout(limit, child.wait_with_output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(BackendError::Engine(format!(
            "failed to wait for {}: {}",
            program, e
        ))),
        Err(_) => Err(BackendError::Engine(format!(
            "{} timed out after {}s",
            program,
            limit.as_secs()
        ))),
    }
}

/// Last non-empty line of a process's stderr, for log messages.
pub fn stderr_summary(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no output")
        .trim()
        .to_string()
}
