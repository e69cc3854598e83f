//! Lead notifications.
//!
//! This module provides:
//! - Parsing of the contact and sell-car form payloads
//! - The HTML email templates
//! - The [`Mailer`] trait and its transports
//! - [`LeadNotifier`], which ties the three together for the HTTP handler

mod form;
mod mailer;
mod template;

pub use form::{ContactForm, FormRequest, LeadForm, SellCarForm};
pub use mailer::{HttpMailer, LogMailer, MailSettings, Mailer};
pub use template::{condition_label, render_html, subject_label, subject_line, timestamp_now};

use crate::error::Result;
use std::sync::Arc;
use tracing::{error, info};

/// Validates lead submissions and forwards them through a [`Mailer`].
#[derive(Clone)]
pub struct LeadNotifier {
    mailer: Arc<dyn Mailer>,
}

impl LeadNotifier {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Validate, render and send one submission.
    pub async fn submit(&self, request: &FormRequest) -> Result<()> {
        let lead = LeadForm::from_request(request)?;
        let subject = subject_line(&lead);
        let body = render_html(&lead, &timestamp_now());

        if let Err(e) = self.mailer.send(&subject, &body, lead.reply_to()).await {
            error!("Error sending {} notification: {}", lead.kind(), e);
            return Err(e);
        }

        info!("Dispatched {} notification", lead.kind());
        Ok(())
    }
}
