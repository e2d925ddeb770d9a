//! Wrapper around the external transcription capability.
//!
//! The production engine is a script executed through a package runner; it
//! writes the transcript to stdout and diagnostics to stderr. The trait is
//! the seam for swapping engines without touching the workflow.

use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::runner::{run_step, StepError};

#[async_trait]
pub trait Transcriber: Send + Sync {
    fn name(&self) -> &'static str;

    /// Convert the audio file at `audio_path` into text.
    ///
    /// Returns the engine's stdout as-is; trimming and the empty-result
    /// decision belong to the caller.
    async fn transcribe(&self, audio_path: &Path) -> Result<String, StepError>;
}

/// Transcription via an external script driven by a package runner.
pub struct ScriptTranscriber {
    runner: PathBuf,
    script: PathBuf,
}

impl ScriptTranscriber {
    pub fn new(runner: PathBuf, script: PathBuf) -> Self {
        Self { runner, script }
    }
}

#[async_trait]
impl Transcriber for ScriptTranscriber {
    fn name(&self) -> &'static str {
        "transcription script"
    }

    async fn transcribe(&self, audio_path: &Path) -> Result<String, StepError> {
        debug!(
            "Transcribing {:?} via {:?} {:?}",
            audio_path, self.runner, self.script
        );
        let output = run_step(
            &self.runner,
            [
                OsStr::new("run"),
                self.script.as_os_str(),
                audio_path.as_os_str(),
                OsStr::new("--format"),
                OsStr::new("text"),
            ],
        )
        .await?;
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn write_stub(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("stub-runner");
        fs::write(&path, body).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[tokio::test]
    async fn test_transcribe_invokes_runner_with_script_contract() {
        let dir = tempfile::tempdir().unwrap();
        let args_file = dir.path().join("args");
        let runner = write_stub(
            dir.path(),
            &format!(
                "#!/bin/sh\nprintf '%s\\n' \"$@\" > {}\nprintf 'hello'\n",
                args_file.display()
            ),
        );
        let script = dir.path().join("transcribe.py");

        let transcriber = ScriptTranscriber::new(runner, script.clone());
        let audio = dir.path().join("audio.ogg");
        let text = transcriber.transcribe(&audio).await.unwrap();
        assert_eq!(text, "hello");

        let recorded = fs::read_to_string(&args_file).unwrap();
        let args: Vec<&str> = recorded.lines().collect();
        assert_eq!(
            args,
            vec![
                "run",
                script.to_str().unwrap(),
                audio.to_str().unwrap(),
                "--format",
                "text",
            ]
        );
    }

    #[tokio::test]
    async fn test_transcribe_preserves_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let runner = write_stub(dir.path(), "#!/bin/sh\nprintf '  hello world \\n'\n");

        let transcriber =
            ScriptTranscriber::new(runner, dir.path().join("transcribe.py"));
        let text = transcriber
            .transcribe(&dir.path().join("audio.ogg"))
            .await
            .unwrap();
        assert_eq!(text, "  hello world \n");
    }

    #[tokio::test]
    async fn test_engine_failure_carries_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        let runner = write_stub(
            dir.path(),
            "#!/bin/sh\necho 'model not loaded' >&2\nexit 2\n",
        );

        let transcriber =
            ScriptTranscriber::new(runner, dir.path().join("transcribe.py"));
        let err = transcriber
            .transcribe(&dir.path().join("audio.ogg"))
            .await
            .unwrap_err();
        assert_eq!(err.stderr(), Some("model not loaded\n"));
    }
}
