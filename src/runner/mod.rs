//! Single-step external process execution.
//!
//! Every collaborator is driven the same way: spawn, wait for exit, capture
//! both output streams. The exit code and captured streams are folded into
//! one typed result so call sites never inspect status ad hoc.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Captured output of a successful external step.
#[derive(Debug, Clone)]
pub struct StepOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Failure of an external step.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// The process could not be started at all.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The process ran but exited non-zero. Carries the captured stderr.
    #[error("{program} {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl StepError {
    /// Diagnostic text captured from the process error stream, if any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Failed { stderr, .. } => Some(stderr),
            Self::Spawn { .. } => None,
        }
    }
}

/// Run one external process to completion and capture its streams.
///
/// stdin is closed; stdout and stderr are piped. No timeout is enforced,
/// so a collaborator that never exits blocks its invocation. The child is
/// killed if this future is dropped.
pub async fn run_step<I, S>(program: &Path, args: I) -> Result<StepOutput, StepError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let name = program.display().to_string();
    debug!("Running {}", name);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| StepError::Spawn {
            program: name.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(StepError::Failed {
            program: name,
            status: output.status,
            stderr,
        });
    }

    debug!("{} completed", name);
    Ok(StepOutput { stdout, stderr })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_step_captures_both_streams() {
        let output = run_step(Path::new("sh"), ["-c", "echo out; echo err >&2"])
            .await
            .unwrap();
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_failure_with_stderr() {
        let err = run_step(Path::new("sh"), ["-c", "echo broken >&2; exit 3"])
            .await
            .unwrap_err();
        match err {
            StepError::Failed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "broken\n");
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let err = run_step(Path::new("/nonexistent/scribehook-test-bin"), ["x"])
            .await
            .unwrap_err();
        assert!(matches!(err, StepError::Spawn { .. }));
        assert!(err.stderr().is_none());
    }

    #[tokio::test]
    async fn test_failed_error_stderr_accessor() {
        let err = run_step(Path::new("sh"), ["-c", "echo diag >&2; exit 1"])
            .await
            .unwrap_err();
        assert_eq!(err.stderr(), Some("diag\n"));
    }
}
