use crate::config::MailConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::debug;

/// A plain-text message ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, config: &MailConfig, mail: &OutgoingMail) -> Result<()>;
}

/// Authenticated SMTP delivery over an encrypted connection.
pub struct SmtpMailTransport {
    timeout: Duration,
}

impl SmtpMailTransport {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for SmtpMailTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, config: &MailConfig, mail: &OutgoingMail) -> Result<()> {
        let from: Mailbox = mail
            .from
            .parse()
            .with_context(|| format!("Invalid sender address '{}'", mail.from))?;
        let to: Mailbox = mail
            .to
            .parse()
            .with_context(|| format!("Invalid recipient address '{}'", mail.to))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())
            .context("Failed to build email message")?;

        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.server)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
        }
        .with_context(|| format!("Failed to set up SMTP relay {}", config.server))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(config.username.clone(), config.password.clone()))
            .timeout(Some(self.timeout))
            .build();

        debug!("Sending mail via {}:{}", config.server, config.port);
        transport
            .send(message)
            .await
            .with_context(|| format!("SMTP delivery through {} failed", config.server))?;

        Ok(())
    }
}
