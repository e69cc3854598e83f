//! Transactional email transports.

use crate::config::MailConfig;
use crate::error::{Result, SalonError};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

/// Sends one HTML email to the dealership inbox.
///
/// Implementations make a single attempt; failures are returned, not retried.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, subject: &str, html_body: &str, reply_to: &str) -> Result<()>;
}

/// Sender and recipient addresses for lead notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub recipient: String,
    pub sender: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            recipient: MailConfig::DEFAULT_RECIPIENT.to_string(),
            sender: MailConfig::DEFAULT_SENDER.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct OutgoingMessage<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Delivers mail through a JSON transactional-email HTTP API.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    settings: MailSettings,
}

impl HttpMailer {
    pub fn new(api_url: impl Into<String>, api_key: Option<String>, settings: MailSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(MailConfig::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SalonError::Config {
                message: format!("Failed to build mail client: {}", e),
            })?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key,
            settings,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, subject: &str, html_body: &str, reply_to: &str) -> Result<()> {
        let message = OutgoingMessage {
            from: &self.settings.sender,
            to: [&self.settings.recipient],
            reply_to,
            subject,
            html: html_body,
        };

        let mut request = self.client.post(&self.api_url).json(&message);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!("Posting notification to {}", self.api_url);
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SalonError::Mail {
                message: format!("mail API returned {}: {}", status, body),
                status_code: Some(status.as_u16()),
            });
        }

        info!("Notification sent to {}", self.settings.recipient);
        Ok(())
    }
}

/// Logs notifications instead of sending them. Used when no mail API is configured.
#[derive(Debug, Clone, Default)]
pub struct LogMailer {
    settings: MailSettings,
}

impl LogMailer {
    pub fn new(settings: MailSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, subject: &str, html_body: &str, reply_to: &str) -> Result<()> {
        info!(
            "Mail delivery disabled; would send {:?} to {} (reply-to {}, {} bytes)",
            subject,
            self.settings.recipient,
            reply_to,
            html_body.len()
        );
        Ok(())
    }
}
