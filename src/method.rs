use std::fmt;

/// Bot API endpoints used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    SendMessage,
    SendPhoto,
    SendDocument,
    SendAudio,
    SendVideo,
    SendChatAction,
    SetWebhook,
}

impl Method {
    /// Path segment following `/bot<token>/`
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::SendMessage => "sendMessage",
            Method::SendPhoto => "sendPhoto",
            Method::SendDocument => "sendDocument",
            Method::SendAudio => "sendAudio",
            Method::SendVideo => "sendVideo",
            Method::SendChatAction => "sendChatAction",
            Method::SetWebhook => "setWebhook",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_has_its_own_endpoint() {
        assert_eq!(Method::SendVideo.as_str(), "sendVideo");
        assert_ne!(Method::SendVideo.as_str(), Method::SendPhoto.as_str());
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::SetWebhook.to_string(), "setWebhook");
        assert_eq!(Method::SendChatAction.to_string(), "sendChatAction");
    }
}
