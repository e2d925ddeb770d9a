use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use which::which;

/// Override for the messaging platform CLI location.
pub const MESSAGING_BIN_ENV: &str = "SCRIBEHOOK_MESSAGING_BIN";
/// Override for the transcription script location.
pub const TRANSCRIBE_SCRIPT_ENV: &str = "SCRIBEHOOK_TRANSCRIBE_SCRIPT";
/// Override for the package runner used to execute the transcription script.
pub const RUNNER_BIN_ENV: &str = "SCRIBEHOOK_RUNNER_BIN";
/// Override for the parent directory of per-invocation scratch directories.
pub const SCRATCH_ROOT_ENV: &str = "SCRIBEHOOK_SCRATCH_ROOT";

/// Collaborator locations, resolved once at startup.
///
/// The workflow itself never reads the process environment; everything it
/// shells out to comes through this struct.
#[derive(Debug, Clone)]
pub struct Config {
    /// Messaging platform CLI (downloads files, sends messages).
    pub messaging_bin: PathBuf,
    /// Transcription script executed through the package runner.
    pub transcribe_script: PathBuf,
    /// Package runner binary, resolved on PATH if relative.
    pub runner_bin: PathBuf,
    /// Parent directory for per-invocation scratch directories.
    pub scratch_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().context("Unable to determine home directory")?;

        let messaging_bin = env::var_os(MESSAGING_BIN_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".npm-global").join("bin").join("clawdbot"));

        let transcribe_script = env::var_os(TRANSCRIBE_SCRIPT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                home.join("clawd")
                    .join("skills")
                    .join("elevenlabs")
                    .join("scripts")
                    .join("transcribe.py")
            });

        let runner_bin = env::var_os(RUNNER_BIN_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("uv"));

        let scratch_root = env::var_os(SCRATCH_ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        info!(
            "Using messaging client {:?}, transcription script {:?}",
            messaging_bin, transcribe_script
        );

        Ok(Self {
            messaging_bin,
            transcribe_script,
            runner_bin,
            scratch_root,
        })
    }

    /// Log a warning for each collaborator that does not look callable.
    ///
    /// Advisory only: the workflow still attempts the calls, and the step
    /// runner reports the real failure if one occurs.
    pub fn warn_on_missing_collaborators(&self) {
        if !self.messaging_bin.exists() {
            warn!("Messaging client not found at {:?}", self.messaging_bin);
        }
        if !self.transcribe_script.exists() {
            warn!(
                "Transcription script not found at {:?}",
                self.transcribe_script
            );
        }
        if !self.runner_bin.exists() && which(&self.runner_bin).is_err() {
            warn!("Package runner {:?} not found on PATH", self.runner_bin);
        }
    }
}
