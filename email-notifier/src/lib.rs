pub mod config;
pub mod notifier;
pub mod transport;

pub use config::{MailConfig, MailCredentials, DEFAULT_SMTP_URI};
pub use notifier::{compose_body, compose_mail, compose_subject, EmailNotifier, DELIMITER};
pub use transport::{MailTransport, OutgoingMail, SmtpMailTransport};
