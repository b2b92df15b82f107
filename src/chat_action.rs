use std::fmt;

use crate::error::Error;

/// Activity shown to chat members while the bot is busy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
}

impl ChatAction {
    /// Map a legacy numeric kind (1..=7) to an action.
    ///
    /// Any other value is rejected here instead of being sent to Telegram as
    /// an empty action.
    pub fn from_kind(kind: u8) -> Result<Self, Error> {
        match kind {
            1 => Ok(ChatAction::Typing),
            2 => Ok(ChatAction::UploadPhoto),
            3 => Ok(ChatAction::RecordVideo),
            4 => Ok(ChatAction::UploadVideo),
            5 => Ok(ChatAction::RecordAudio),
            6 => Ok(ChatAction::UploadAudio),
            7 => Ok(ChatAction::UploadDocument),
            other => Err(Error::InvalidActionKind(other)),
        }
    }

    /// Wire value of the `action` field
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatAction::Typing => "typing",
            ChatAction::UploadPhoto => "upload_photo",
            ChatAction::RecordVideo => "record_video",
            ChatAction::UploadVideo => "upload_video",
            ChatAction::RecordAudio => "record_audio",
            ChatAction::UploadAudio => "upload_audio",
            ChatAction::UploadDocument => "upload_document",
        }
    }
}

impl fmt::Display for ChatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
