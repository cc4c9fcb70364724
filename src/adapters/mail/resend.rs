use super::{MailError, Mailer};
use crate::config::MailConfig;
use crate::domain::contact::OutboundMessage;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Mailer backed by the Resend HTTP API.
pub struct ResendMailer {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

// The API key must never leak through Debug-formatted logs.
impl std::fmt::Debug for ResendMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendMailer")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
}

impl ResendMailer {
    /// Builds a client with the per-send timeout applied at the transport
    /// level, so a hung provider surfaces as a delivery failure instead of
    /// stalling the request.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.send_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.resend_api_url.trim_end_matches('/').to_string(),
            api_key: config.resend_api_key.clone(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let request = SendRequest {
            from: &message.from,
            to: [&message.to],
            reply_to: &message.reply_to,
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .http
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| if e.is_timeout() { MailError::Timeout } else { MailError::Transport(e) })?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        Err(MailError::Provider(format!("status {status}: {detail}")))
    }
}
