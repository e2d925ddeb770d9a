//! Per-invocation scratch directory.
//!
//! Each invocation gets one directory under the configured scratch root,
//! holding exactly one file: the downloaded audio. The directory is removed
//! on every exit path, including panics, because removal rides on `Drop`.
//! The name carries a millisecond timestamp plus tempfile's random suffix,
//! so concurrent invocations never collide.

use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const SCRATCH_PREFIX: &str = "voice-transcribe-";

/// Name of the one file a scratch directory owns.
pub const AUDIO_FILE_NAME: &str = "audio.ogg";

#[derive(Debug)]
pub struct ScratchDir {
    dir: tempfile::TempDir,
}

impl ScratchDir {
    /// Create a fresh scratch directory under `root`.
    pub fn create(root: &Path) -> io::Result<Self> {
        let prefix = format!("{}{}-", SCRATCH_PREFIX, Utc::now().timestamp_millis());
        let dir = tempfile::Builder::new().prefix(&prefix).tempdir_in(root)?;
        debug!("Created scratch directory {:?}", dir.path());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where the downloaded audio lands.
    pub fn audio_path(&self) -> PathBuf {
        self.dir.path().join(AUDIO_FILE_NAME)
    }
}
