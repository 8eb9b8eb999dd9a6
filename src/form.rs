use std::fmt;

use crate::discord::{SendOutcome, WebhookRequest};
use crate::validate;

pub const ERROR_FIELDS: &str = "Error with one or more fields";
pub const ERROR_DISCORD: &str = "Error with Discord";
pub const ERROR_SENDING: &str = "Error sending message";

/// Submit button label: Send -> Sending... -> {Sent | Error}. Editing any
/// field puts the form back at Send for the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Send,
    Sending,
    Sent,
    Error,
}

impl Default for SendState {
    fn default() -> Self {
        SendState::Send
    }
}

impl fmt::Display for SendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendState::Send => write!(f, "Send"),
            SendState::Sending => write!(f, "Sending..."),
            SendState::Sent => write!(f, "Sent"),
            SendState::Error => write!(f, "Error"),
        }
    }
}

/// State backing the form: field values, inline errors for the two required
/// fields, the bottom-of-form send error, and the submit label. Owned by the
/// front end; the send logic only ever sees immutable snapshots of it.
#[derive(Debug, Default)]
pub struct FormState {
    webhook_url: String,
    message: String,
    username: String,
    avatar_url: String,
    webhook_url_error: Option<&'static str>,
    message_error: Option<&'static str>,
    send_error: Option<&'static str>,
    state: SendState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_webhook_url(&mut self, value: impl Into<String>) {
        self.webhook_url = value.into();
        self.webhook_url_error = None;
        self.reset_attempt();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
        self.message_error = None;
        self.reset_attempt();
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
        self.reset_attempt();
    }

    pub fn set_avatar_url(&mut self, value: impl Into<String>) {
        self.avatar_url = value.into();
        self.reset_attempt();
    }

    // Any edit clears the previous attempt's result.
    fn reset_attempt(&mut self) {
        self.state = SendState::Send;
        self.send_error = None;
    }

    /// Validate and, if the required fields are present, hand back the
    /// request to send. Returns None while a send is already in flight.
    pub fn submit(&mut self) -> Option<WebhookRequest> {
        if self.state == SendState::Sending {
            return None;
        }

        self.send_error = None;
        let errors = validate::check(&self.webhook_url, &self.message);
        self.webhook_url_error = errors.webhook_url;
        self.message_error = errors.message;

        if !errors.is_clear() {
            self.state = SendState::Error;
            return None;
        }

        self.state = SendState::Sending;
        Some(WebhookRequest {
            webhook_url: self.webhook_url.clone(),
            message: self.message.clone(),
            username: self.username.clone(),
            avatar_url: self.avatar_url.clone(),
        })
    }

    /// Fold the outcome of a send attempt back into the form. A successful
    /// send clears the message field for the next one.
    pub fn complete(&mut self, outcome: &SendOutcome) {
        match outcome {
            SendOutcome::Success => {
                self.state = SendState::Sent;
                self.send_error = None;
                self.message.clear();
            }
            SendOutcome::ClientError(_) => {
                self.state = SendState::Error;
                self.send_error = Some(ERROR_FIELDS);
            }
            SendOutcome::ServerError(_) => {
                self.state = SendState::Error;
                self.send_error = Some(ERROR_DISCORD);
            }
            SendOutcome::TransportError(_) | SendOutcome::Unexpected(_) => {
                self.state = SendState::Error;
                self.send_error = Some(ERROR_SENDING);
            }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn webhook_url_error(&self) -> Option<&'static str> {
        self.webhook_url_error
    }

    pub fn message_error(&self) -> Option<&'static str> {
        self.message_error
    }

    pub fn send_error(&self) -> Option<&'static str> {
        self.send_error
    }

    pub fn state(&self) -> SendState {
        self.state
    }
}
