//! Inbound event model.
//!
//! The host runtime hands the hook one JSON context per invocation. Every
//! level of the payload is optional; anything that does not satisfy the
//! trigger contract simply yields no [`VoiceMessage`].

use serde::Deserialize;

/// Top-level context supplied by the host runtime.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookContext {
    #[serde(default)]
    pub event: HookEvent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookEvent {
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub message: Option<Message>,
}

/// A chat message, possibly carrying a voice or audio attachment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub voice: Option<Attachment>,
    #[serde(default)]
    pub audio: Option<Attachment>,
    #[serde(default)]
    pub chat: Option<Chat>,
}

/// A file handle meaningful only to the messaging platform.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub file_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Chat {
    #[serde(default)]
    pub id: Option<i64>,
}

/// An actionable voice/audio message: attachment handle plus reply target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceMessage {
    pub file_id: String,
    pub chat_id: i64,
}

impl HookContext {
    /// Extract the actionable voice message, if the event carries one.
    ///
    /// Returns `None` when the event has no message, the message has neither
    /// a voice nor an audio attachment, the attachment has no (or an empty)
    /// file identifier, or the message has no chat identifier. A `voice`
    /// attachment wins over `audio` when both are present.
    pub fn voice_message(&self) -> Option<VoiceMessage> {
        let message = self.event.payload.message.as_ref()?;
        let attachment = message.voice.as_ref().or(message.audio.as_ref())?;
        let file_id = attachment.file_id.as_deref().filter(|id| !id.is_empty())?;
        let chat_id = message.chat.as_ref()?.id?;

        Some(VoiceMessage {
            file_id: file_id.to_string(),
            chat_id,
        })
    }
}
