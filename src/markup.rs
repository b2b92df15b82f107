use serde::Serialize;

use crate::error::Error;

/// Rows of button labels for a custom reply keyboard
pub type KeyboardLayout = Vec<Vec<String>>;

/// `reply_markup` payload attached to a text message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    /// Show a custom keyboard
    Keyboard { keyboard: KeyboardLayout },
    /// Remove the active custom keyboard
    HideKeyboard { hide_keyboard: bool },
}

impl ReplyMarkup {
    /// Build a keyboard markup from any nested sequence of labels
    pub fn keyboard<R, L>(rows: R) -> Self
    where
        R: IntoIterator<Item = L>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        ReplyMarkup::Keyboard {
            keyboard: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn hide() -> Self {
        ReplyMarkup::HideKeyboard {
            hide_keyboard: true,
        }
    }

    /// Serialize to the JSON string carried in the form field
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}
