use std::time::Duration;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info};

/// Field values captured from the form at the moment of submission.
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    pub webhook_url: String,
    pub message: String,
    pub username: String,
    pub avatar_url: String,
}

#[derive(Debug)]
pub enum SendOutcome {
    Success,
    ClientError(u16),
    ServerError(u16),
    TransportError(String),
    Unexpected(u16),
}

// Discord's execute-webhook body. The optional keys must be absent, not
// null, when the form left them blank.
#[derive(Serialize, Debug)]
struct Payload<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<&'a str>,
}

fn payload(request: &WebhookRequest) -> Payload<'_> {
    fn non_blank(value: &str) -> Option<&str> {
        (!value.trim().is_empty()).then_some(value)
    }

    Payload {
        content: &request.message,
        username: non_blank(&request.username),
        avatar_url: non_blank(&request.avatar_url),
    }
}

fn classify(status: u16) -> SendOutcome {
    match status {
        200..=299 => SendOutcome::Success,
        400..=499 => SendOutcome::ClientError(status),
        500..=599 => SendOutcome::ServerError(status),
        _ => SendOutcome::Unexpected(status),
    }
}

pub async fn send(client: &Client, request: &WebhookRequest) -> SendOutcome {
    debug!("Sending discord message: {}", request.message);

    let res = client.post(&request.webhook_url)
        .json(&payload(request))
        .timeout(Duration::from_secs(5))
        .send()
        .await;

    let response = match res {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to send message: {}", e);
            return SendOutcome::TransportError(format!("{}", e));
        }
    };

    let status = response.status().as_u16();
    let outcome = classify(status);
    match outcome {
        SendOutcome::Success => info!("Sent message to discord."),
        _ => error!("Webhook returned HTTP {}", status),
    }

    outcome
}
