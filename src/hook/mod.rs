//! Voice-message transcription hook.
//!
//! Reacts to an inbound chat message carrying a voice or audio attachment:
//! downloads the audio into a scratch directory, transcribes it, and replies
//! to the originating chat with the transcript. Every step failure is
//! terminal for the invocation and reaches the chat user only as the absence
//! of a reply; the scratch directory is removed no matter which path runs.

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::Config;
use crate::event::{HookContext, VoiceMessage};
use crate::messaging::MessagingClient;
use crate::scratch::ScratchDir;
use crate::transcription::{ScriptTranscriber, Transcriber};

/// Fixed rich-text label prepended to every transcript reply.
pub const TRANSCRIPT_LABEL: &str = "📝 *Transcript:*";

/// Which path an invocation took. The host runtime ignores this; logging
/// and tests consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// The event was not an actionable voice/audio message.
    Ignored,
    /// Transcript delivered to the originating chat.
    Replied,
    /// The messaging client could not download the attachment.
    DownloadFailed,
    /// The transcription engine exited non-zero.
    TranscriptionFailed,
    /// The engine produced only whitespace; nothing to send.
    EmptyTranscript,
    /// A transcript was produced but the reply send failed.
    ReplyFailed,
}

/// Handle one inbound event.
///
/// Non-actionable events return [`HookOutcome::Ignored`] without side
/// effects. The only `Err` this returns is a scratch directory that could
/// not be created; with nowhere to download to, nothing else is attempted.
pub async fn handle_event(config: &Config, ctx: &HookContext) -> Result<HookOutcome> {
    let Some(voice) = ctx.voice_message() else {
        return Ok(HookOutcome::Ignored);
    };

    info!("Received voice message, transcribing...");

    let scratch = ScratchDir::create(&config.scratch_root)
        .context("Failed to create scratch directory")?;

    let client = MessagingClient::new(config.messaging_bin.clone());
    let transcriber =
        ScriptTranscriber::new(config.runner_bin.clone(), config.transcribe_script.clone());

    // The scratch guard outlives the workflow, so the directory is removed
    // whether this returns a reply, an abort, or unwinds.
    let outcome = run_workflow(&client, &transcriber, &voice, &scratch).await;
    Ok(outcome)
}

async fn run_workflow(
    client: &MessagingClient,
    transcriber: &dyn Transcriber,
    voice: &VoiceMessage,
    scratch: &ScratchDir,
) -> HookOutcome {
    let audio_file = scratch.audio_path();

    if let Err(err) = client.download_file(&voice.file_id, &audio_file).await {
        error!("Failed to download audio file: {}", err);
        return HookOutcome::DownloadFailed;
    }

    info!(
        "Transcribing {:?} with {}",
        audio_file,
        transcriber.name()
    );
    let raw = match transcriber.transcribe(&audio_file).await {
        Ok(text) => text,
        Err(err) => {
            error!("Transcription failed: {}", err);
            return HookOutcome::TranscriptionFailed;
        }
    };

    let transcript = raw.trim();
    if transcript.is_empty() {
        info!("Empty transcript, skipping reply");
        return HookOutcome::EmptyTranscript;
    }

    let reply = format!("{}\n{}", TRANSCRIPT_LABEL, transcript);
    match client.send_message(voice.chat_id, &reply).await {
        Ok(()) => {
            info!("Sent transcript to chat {}", voice.chat_id);
            HookOutcome::Replied
        }
        Err(err) => {
            error!("Failed to send reply: {}", err);
            HookOutcome::ReplyFailed
        }
    }
}
