use std::time::Duration;

use crate::error::Error;

/// Default Telegram Bot API host
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Default query marker appended to webhook URLs
pub const DEFAULT_WEBHOOK_MARKER: &str = "sender=telegram";

/// HTTP client options for API requests
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Total read timeout; `None` blocks until the server answers
    pub read_timeout: Option<Duration>,
    /// Skip TLS certificate verification. Unsafe; only for hosts that cannot
    /// present a valid certificate chain.
    pub accept_invalid_certs: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions {
            connect_timeout: Duration::from_secs(6000),
            read_timeout: None,
            accept_invalid_certs: false,
        }
    }
}

/// Configuration for a [`BotClient`](crate::BotClient)
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Telegram Bot API token
    bot_token: String,
    /// Base URL of the Bot API
    api_url: String,
    /// Query marker appended on webhook registration
    webhook_marker: String,
    /// HTTP client options
    client_options: ClientOptions,
}

impl Configuration {
    /// Create a configuration with default options for the given token.
    ///
    /// The token is stored verbatim; a bad token only shows up as an
    /// authorization failure from the remote side.
    pub fn new<S: AsRef<str>>(bot_token: S) -> Self {
        Configuration {
            bot_token: bot_token.as_ref().to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            webhook_marker: DEFAULT_WEBHOOK_MARKER.to_string(),
            client_options: ClientOptions::default(),
        }
    }

    /// Get the Telegram Bot API token
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    /// Set the base API URL (a trailing slash is dropped)
    pub fn set_api_url<S: AsRef<str>>(&mut self, url: S) {
        self.api_url = url.as_ref().trim_end_matches('/').to_string();
    }

    /// Get the base API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Set the query marker appended to webhook URLs
    pub fn set_webhook_marker<S: AsRef<str>>(&mut self, marker: S) {
        self.webhook_marker = marker.as_ref().to_string();
    }

    /// Get the webhook query marker
    pub fn webhook_marker(&self) -> &str {
        &self.webhook_marker
    }

    /// Set client options
    pub fn set_client_options(&mut self, options: ClientOptions) {
        self.client_options = options;
    }

    /// Get client options
    pub fn client_options(&self) -> &ClientOptions {
        &self.client_options
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        if self.api_url.is_empty() {
            return Err(Error::configuration("API URL is empty"));
        }

        Ok(())
    }
}
