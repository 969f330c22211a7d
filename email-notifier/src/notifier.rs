use crate::config::MailConfig;
use crate::transport::{MailTransport, OutgoingMail, SmtpMailTransport};
use anyhow::Result;
use async_trait::async_trait;
use interfaces::{JobListing, ListingNotifier, NotifyOutcome};
use tracing::{debug, error, info};

/// Line written after every listing in the message body.
pub const DELIMITER: &str = "------------------------";

pub fn compose_subject(count: usize) -> String {
    format!("New job listings ({} found)", count)
}

pub fn compose_body(listings: &[JobListing]) -> String {
    let mut body = String::from("New job listings:\n\n");
    for listing in listings {
        body.push_str(&format!(
            "Title: {}\nCompany: {}\nLocation: {}\nLink: {}\n{}\n",
            listing.title, listing.company, listing.location, listing.link, DELIMITER
        ));
    }
    body
}

pub fn compose_mail(config: &MailConfig, listings: &[JobListing]) -> OutgoingMail {
    OutgoingMail {
        from: config.sender.clone(),
        to: config.recipient.clone(),
        subject: compose_subject(listings.len()),
        body: compose_body(listings),
    }
}

/// Emails newly found listings through a [`MailTransport`].
///
/// Without a fixed configuration the mail settings are read from the
/// environment on every notification.
pub struct EmailNotifier<T: MailTransport = SmtpMailTransport> {
    transport: T,
    config: Option<MailConfig>,
}

impl EmailNotifier<SmtpMailTransport> {
    pub fn smtp() -> Self {
        Self::new(SmtpMailTransport::new())
    }
}

impl<T: MailTransport> EmailNotifier<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: None,
        }
    }

    pub fn with_config(transport: T, config: MailConfig) -> Self {
        Self {
            transport,
            config: Some(config),
        }
    }

    async fn deliver(&self, listings: &[JobListing]) -> Result<()> {
        let config = match &self.config {
            Some(cfg) => cfg.clone(),
            None => MailConfig::from_env()?,
        };

        let mail = compose_mail(&config, listings);
        self.transport.send(&config, &mail).await
    }
}

#[async_trait]
impl<T: MailTransport> ListingNotifier for EmailNotifier<T> {
    async fn notify(&self, new_listings: &[JobListing]) -> NotifyOutcome {
        if new_listings.is_empty() {
            debug!("No new listings, skipping notification email");
            return NotifyOutcome::Skipped;
        }

        match self.deliver(new_listings).await {
            Ok(()) => {
                info!("Notification email sent for {} new listings", new_listings.len());
                NotifyOutcome::Sent {
                    count: new_listings.len(),
                }
            }
            Err(e) => {
                error!("Failed to send notification email: {:#}", e);
                NotifyOutcome::Failed {
                    reason: format!("{:#}", e),
                }
            }
        }
    }
}
