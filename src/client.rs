use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Client as ReqwestClient;

use crate::chat_action::ChatAction;
use crate::configuration::Configuration;
use crate::error::Error;
use crate::markup::ReplyMarkup;
use crate::method::Method;
use crate::response::{ApiResponse, OperationResult};

/// Destination chat: a numeric id or a public `@username`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        ChatId::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        ChatId::Username(username)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{}", id),
            ChatId::Username(name) => f.write_str(name),
        }
    }
}

/// One multipart form field
#[derive(Debug, Clone, PartialEq)]
enum Field {
    Text(String),
    File(PathBuf),
}

/// Ordered parameter set for a single request
#[derive(Debug, Default)]
struct Params {
    fields: Vec<(&'static str, Field)>,
}

impl Params {
    fn for_chat(chat_id: &ChatId) -> Self {
        Params::default().text("chat_id", chat_id.to_string())
    }

    fn text<S: Into<String>>(mut self, name: &'static str, value: S) -> Self {
        self.fields.push((name, Field::Text(value.into())));
        self
    }

    /// Absent values are left out of the form entirely
    fn optional_text(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    fn file<P: AsRef<Path>>(mut self, name: &'static str, path: P) -> Result<Self, Error> {
        let resolved = resolve_attachment(path.as_ref())?;
        self.fields.push((name, Field::File(resolved)));
        Ok(self)
    }

    fn into_form(self) -> Result<Form, Error> {
        let mut form = Form::new();
        for (name, field) in self.fields {
            form = match field {
                Field::Text(value) => form.text(name, value),
                Field::File(path) => form.file(name, path)?,
            };
        }
        Ok(form)
    }
}

/// Resolve an attachment to an absolute path of an existing regular file
fn resolve_attachment(path: &Path) -> Result<PathBuf, Error> {
    let resolved = fs::canonicalize(path).map_err(|_| Error::file_not_found(path))?;
    if !resolved.is_file() {
        return Err(Error::file_not_found(path));
    }
    Ok(resolved)
}

/// Append the webhook query marker, respecting an existing query string
fn webhook_url(url: &str, marker: &str) -> String {
    if marker.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, marker)
}

/// Blocking client for the Telegram Bot API
///
/// Each operation performs exactly one POST and never retries. Remote and
/// transport failures come back as an unsuccessful [`OperationResult`];
/// `Err` is reserved for problems caught before anything is sent.
pub struct BotClient {
    config: Configuration,
    client: ReqwestClient,
}

impl BotClient {
    /// Create a client with default options for the given token
    pub fn new<S: AsRef<str>>(bot_token: S) -> Result<Self, Error> {
        Self::with_configuration(Configuration::new(bot_token))
    }

    /// Create a client from an explicit configuration
    pub fn with_configuration(config: Configuration) -> Result<Self, Error> {
        config.validate()?;
        let client = Self::build_http_client(&config)?;

        Ok(BotClient { config, client })
    }

    fn build_http_client(config: &Configuration) -> Result<ReqwestClient, Error> {
        let options = config.client_options();
        if options.accept_invalid_certs {
            error!("TLS certificate verification is disabled");
        }

        Ok(ReqwestClient::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.read_timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()?)
    }

    /// Get the client configuration
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Full URL of an endpoint: `<api_url>/bot<token>/<method>`
    pub fn endpoint(&self, method: Method) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_url(),
            self.config.bot_token(),
            method
        )
    }

    /// Send a text message
    pub fn send_message<C: Into<ChatId>>(
        &self,
        chat_id: C,
        text: &str,
        disable_preview: bool,
    ) -> Result<OperationResult, Error> {
        let params = Params::for_chat(&chat_id.into())
            .text("text", text)
            .text("disable_web_page_preview", disable_preview.to_string());

        self.dispatch(Method::SendMessage, params, |response| {
            OperationResult::from_response(response, "Message sent")
        })
    }

    /// Upload a photo with an optional caption
    pub fn send_photo<C: Into<ChatId>, P: AsRef<Path>>(
        &self,
        chat_id: C,
        photo: P,
        caption: Option<&str>,
    ) -> Result<OperationResult, Error> {
        let params = Params::for_chat(&chat_id.into())
            .file("photo", photo)?
            .optional_text("caption", caption);

        self.dispatch(Method::SendPhoto, params, |response| {
            OperationResult::from_response(response, "Photo sent")
        })
    }

    /// Upload a file as a document
    pub fn send_document<C: Into<ChatId>, P: AsRef<Path>>(
        &self,
        chat_id: C,
        document: P,
    ) -> Result<OperationResult, Error> {
        let params = Params::for_chat(&chat_id.into()).file("document", document)?;

        self.dispatch(Method::SendDocument, params, |response| {
            OperationResult::from_response(response, "Document sent")
        })
    }

    /// Upload an audio track with optional performer and title
    pub fn send_audio<C: Into<ChatId>, P: AsRef<Path>>(
        &self,
        chat_id: C,
        audio: P,
        performer: Option<&str>,
        title: Option<&str>,
    ) -> Result<OperationResult, Error> {
        let params = Params::for_chat(&chat_id.into())
            .file("audio", audio)?
            .optional_text("performer", performer)
            .optional_text("title", title);

        self.dispatch(Method::SendAudio, params, |response| {
            OperationResult::from_response(response, "Audio sent")
        })
    }

    /// Upload a video with an optional caption
    pub fn send_video<C: Into<ChatId>, P: AsRef<Path>>(
        &self,
        chat_id: C,
        video: P,
        caption: Option<&str>,
    ) -> Result<OperationResult, Error> {
        let params = Params::for_chat(&chat_id.into())
            .file("video", video)?
            .optional_text("caption", caption);

        self.dispatch(Method::SendVideo, params, |response| {
            OperationResult::from_response(response, "Video sent")
        })
    }

    /// Show an activity indicator such as "typing..." in the chat
    pub fn send_chat_action<C: Into<ChatId>>(
        &self,
        chat_id: C,
        action: ChatAction,
    ) -> Result<OperationResult, Error> {
        let params = Params::for_chat(&chat_id.into()).text("action", action.as_str());

        self.dispatch(Method::SendChatAction, params, |response| {
            OperationResult::from_response(response, "Chat action sent")
        })
    }

    /// Like [`send_chat_action`](Self::send_chat_action), taking the numeric
    /// kind 1..=7. Other kinds fail with [`Error::InvalidActionKind`] and
    /// nothing is sent.
    pub fn send_chat_action_kind<C: Into<ChatId>>(
        &self,
        chat_id: C,
        kind: u8,
    ) -> Result<OperationResult, Error> {
        let action = ChatAction::from_kind(kind)?;
        self.send_chat_action(chat_id, action)
    }

    /// Send a text message together with a custom reply keyboard
    pub fn send_keyboard<C, R, L>(
        &self,
        chat_id: C,
        text: &str,
        layout: R,
    ) -> Result<OperationResult, Error>
    where
        C: Into<ChatId>,
        R: IntoIterator<Item = L>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let markup = ReplyMarkup::keyboard(layout).to_json()?;
        let params = Params::for_chat(&chat_id.into())
            .text("reply_markup", markup)
            .text("text", text);

        self.dispatch(Method::SendMessage, params, |response| {
            OperationResult::from_response(response, "Keyboard shown")
        })
    }

    /// Send a text message that removes the active custom keyboard
    pub fn hide_keyboard<C: Into<ChatId>>(
        &self,
        chat_id: C,
        text: &str,
    ) -> Result<OperationResult, Error> {
        let markup = ReplyMarkup::hide().to_json()?;
        let params = Params::for_chat(&chat_id.into())
            .text("reply_markup", markup)
            .text("text", text);

        self.dispatch(Method::SendMessage, params, |response| {
            OperationResult::from_response(response, "Keyboard hidden")
        })
    }

    /// Register a webhook URL. The configured query marker is appended
    /// before registration. A missing or empty URL is rejected locally.
    pub fn set_webhook(&self, url: Option<&str>) -> Result<OperationResult, Error> {
        let url = match url {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                let e = Error::invalid_argument("no valid webhook URL given");
                error!("{}", e);
                return Ok(OperationResult::failure(e.to_string()));
            }
        };

        let params =
            Params::default().text("url", webhook_url(url, self.config.webhook_marker()));

        self.dispatch(Method::SetWebhook, params, OperationResult::echo_description)
    }

    /// Clear the registered webhook
    pub fn del_webhook(&self) -> Result<OperationResult, Error> {
        self.dispatch(
            Method::SetWebhook,
            Params::default(),
            OperationResult::echo_description,
        )
    }

    /// Build the form, send it and normalize the outcome.
    ///
    /// Form building errors are local and propagate; anything after that is
    /// folded into a failed result.
    fn dispatch<F>(
        &self,
        method: Method,
        params: Params,
        normalize: F,
    ) -> Result<OperationResult, Error>
    where
        F: FnOnce(ApiResponse) -> OperationResult,
    {
        let form = params.into_form()?;

        let result = match self.send(method, form) {
            Ok(response) => normalize(response),
            Err(e) => OperationResult::failure(e.to_string()),
        };

        if result.success {
            info!("{} succeeded: {}", method, result.info);
        } else {
            error!("{} returned: {}", method, result.info);
        }

        Ok(result)
    }

    /// POST a multipart form to an endpoint and decode the JSON reply
    fn send(&self, method: Method, form: Form) -> Result<ApiResponse, Error> {
        debug!("Sending {} request", method);

        // Request URLs embed the bot token; keep it out of error messages.
        let response = self
            .client
            .post(self.endpoint(method))
            .multipart(form)
            .send()
            .map_err(|e| Error::Http(e.without_url()))?;
        info!("Received response with status code: {}", response.status());

        // Telegram answers errors with non-2xx codes and a JSON body, so the
        // status is not checked here.
        let body = response.text().map_err(|e| Error::Http(e.without_url()))?;
        Ok(serde_json::from_str(&body)?)
    }
}
