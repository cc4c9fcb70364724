use crate::adapters::mail::Mailer;
use crate::api::schemas::contact::ContactForm;
use crate::config::ContactConfig;
use crate::domain::contact::{OutboundMessage, is_valid_email};
use crate::error::{AppError, Result};
use anyhow::anyhow;
use std::sync::Arc;
use time::OffsetDateTime;

/// Fastest plausible human form fill. Anything quicker is scripted.
const MIN_FILL_TIME_MS: i64 = 2000;

/// Linear submission pipeline: honeypot, timing, validation, build, dispatch.
/// Stateless across invocations; safe to call concurrently.
#[derive(Clone, Debug)]
pub struct ContactService {
    sender: String,
    destination: String,
    mailer: Arc<dyn Mailer>,
}

impl ContactService {
    #[must_use]
    pub fn new(config: &ContactConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            sender: config.form_sender.clone(),
            destination: config.form_destination_email.clone(),
            mailer,
        }
    }

    /// Runs one submission through the pipeline.
    ///
    /// Spam-flagged submissions return `Ok(())` without touching the mailer,
    /// observably identical to a delivered one so probing bots learn nothing.
    ///
    /// # Errors
    /// Returns `AppError::MissingFields` or `AppError::InvalidEmailFormat`
    /// for client-caused rejections, `AppError::Delivery` when the provider
    /// fails the send, and `AppError::Internal` for malformed configuration.
    pub async fn submit(&self, form: ContactForm) -> Result<()> {
        if !form.website.is_empty() {
            tracing::debug!("Honeypot field populated, suppressing submission");
            return Ok(());
        }

        // A missing or non-numeric timestamp is treated as spam-suspect:
        // the real form always posts one.
        let Some(timestamp_ms) = form.timestamp_ms else {
            tracing::debug!("Submission without usable timestamp, suppressing");
            return Ok(());
        };
        // Saturating: an extreme client-supplied timestamp must not overflow
        // the subtraction.
        let elapsed_ms = now_ms().saturating_sub(timestamp_ms);
        if elapsed_ms < MIN_FILL_TIME_MS {
            tracing::debug!(elapsed_ms, "Form filled implausibly fast, suppressing submission");
            return Ok(());
        }

        if form.name.is_empty() || form.email.is_empty() || form.message.is_empty() {
            return Err(AppError::MissingFields);
        }

        if !is_valid_email(&form.email) {
            return Err(AppError::InvalidEmailFormat);
        }

        if !is_valid_email(&self.destination) {
            return Err(AppError::Internal(anyhow!(
                "configured form destination is not a valid address: {:?}",
                self.destination
            )));
        }

        let message =
            OutboundMessage::contact(&self.sender, &self.destination, &form.name, &form.email, &form.message);

        self.mailer.send(&message).await.map_err(AppError::Delivery)?;

        tracing::info!(reply_to = %message.reply_to, "Contact submission delivered");
        Ok(())
    }
}

fn now_ms() -> i64 {
    i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}
