// Shared doubles and fixtures for the notifier tests
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use email_notifier::{MailConfig, MailCredentials, MailTransport, OutgoingMail};
use interfaces::{JobListing, JobSource, PLACEHOLDER};
use std::sync::{Arc, Mutex};

/// Records every mail instead of sending it.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub sent: Arc<Mutex<Vec<OutgoingMail>>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, _config: &MailConfig, mail: &OutgoingMail) -> Result<()> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

/// Fails every delivery, like an SMTP server rejecting the login.
pub struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn send(&self, _config: &MailConfig, _mail: &OutgoingMail) -> Result<()> {
        Err(anyhow::anyhow!("535 authentication failed"))
    }
}

pub fn test_config() -> MailConfig {
    let credentials = MailCredentials {
        username: "scraper@example.com".to_string(),
        password: "app-password".to_string(),
        recipient: "me@example.com".to_string(),
    };
    MailConfig::from_uri_and_credentials("smtps://smtp.example.com:465", &credentials).unwrap()
}

pub fn sample_listings() -> Vec<JobListing> {
    let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    vec![
        JobListing {
            title: "UX Designer".to_string(),
            company: "Studio Kléber".to_string(),
            location: "Strasbourg, Grand Est".to_string(),
            link: "https://www.linkedin.com/jobs/view/1".to_string(),
            source: JobSource::LinkedIn,
            date_added: date,
        },
        JobListing {
            title: "Graphic Designer".to_string(),
            company: PLACEHOLDER.to_string(),
            location: "67000 Strasbourg".to_string(),
            link: PLACEHOLDER.to_string(),
            source: JobSource::Apec,
            date_added: date,
        },
    ]
}
