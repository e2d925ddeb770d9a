//! Wrapper around the external messaging platform CLI.
//!
//! The platform is opaque: downloading a file and sending a message are the
//! only two operations the hook needs, both mapped 1:1 onto the CLI.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::runner::{run_step, StepError};

#[derive(Debug, Clone)]
pub struct MessagingClient {
    bin: PathBuf,
}

impl MessagingClient {
    pub fn new(bin: PathBuf) -> Self {
        Self { bin }
    }

    /// Download a platform file by identifier into `dest`.
    pub async fn download_file(&self, file_id: &str, dest: &Path) -> Result<(), StepError> {
        debug!("Downloading file {} to {:?}", file_id, dest);
        run_step(
            &self.bin,
            [
                OsStr::new("file"),
                OsStr::new("download"),
                OsStr::new(file_id),
                OsStr::new("--output"),
                dest.as_os_str(),
            ],
        )
        .await?;
        Ok(())
    }

    /// Send a text message to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), StepError> {
        debug!("Sending {} chars to chat {}", text.len(), chat_id);
        let target = chat_id.to_string();
        run_step(
            &self.bin,
            [
                OsStr::new("message"),
                OsStr::new("send"),
                OsStr::new("--target"),
                OsStr::new(&target),
                OsStr::new("--message"),
                OsStr::new(text),
            ],
        )
        .await?;
        Ok(())
    }
}
