use crate::domain::contact::OutboundMessage;
use async_trait::async_trait;
use thiserror::Error;

pub mod resend;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Provider rejected the send: {0}")]
    Provider(String),
    #[error("Provider call timed out")]
    Timeout,
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Sends a single transactional email. One attempt, no retry.
    ///
    /// # Errors
    /// Returns `MailError::Provider` if the provider reports a failure,
    /// `MailError::Timeout` if the call exceeds the configured bound.
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}
