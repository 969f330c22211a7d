use anyhow::{Context, Result};
use std::env;
use std::fmt;
use url::Url;

pub const DEFAULT_SMTP_URI: &str = "smtps://smtp.gmail.com:465";

/// Account used to send notifications and the address that receives them.
#[derive(Clone)]
pub struct MailCredentials {
    pub username: String,
    pub password: String,
    pub recipient: String,
}

impl MailCredentials {
    /// Reads `EMAIL_USER`, `EMAIL_PASSWORD` and `NOTIFICATION_EMAIL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            username: require_env("EMAIL_USER")?,
            password: require_env("EMAIL_PASSWORD")?,
            recipient: require_env("NOTIFICATION_EMAIL")?,
        })
    }
}

#[derive(Clone)]
pub struct MailConfig {
    pub server: String,
    pub port: u16,
    /// Implicit TLS when true, STARTTLS upgrade otherwise.
    pub use_tls: bool,
    pub username: String,
    pub password: String,
    pub sender: String,
    pub recipient: String,
}

impl MailConfig {
    /// Parse the SMTP endpoint from a URI and combine it with credentials.
    /// Expected URI format: smtps://[username@]server[:port] or smtp://...
    pub fn from_uri_and_credentials(uri: &str, credentials: &MailCredentials) -> Result<Self> {
        let parsed_uri = Url::parse(uri)
            .map_err(|e| anyhow::anyhow!("Invalid SMTP URI '{}': {}", uri, e))?;

        let (use_tls, default_port) = match parsed_uri.scheme() {
            "smtps" => (true, 465),
            "smtp" => (false, 587),
            other => {
                return Err(anyhow::anyhow!(
                    "URI must use 'smtps://' or 'smtp://' scheme, got: {}",
                    other
                ))
            }
        };

        let server = parsed_uri
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("No server specified in URI: {}", uri))?
            .to_string();

        let port = parsed_uri.port().unwrap_or(default_port);

        let username = {
            let user = parsed_uri.username();
            if !user.is_empty() {
                user.to_string()
            } else {
                credentials.username.clone()
            }
        };

        Ok(Self {
            server,
            port,
            use_tls,
            sender: credentials.username.clone(),
            username,
            password: credentials.password.clone(),
            recipient: credentials.recipient.clone(),
        })
    }

    /// Build the configuration from the process environment. Called at send
    /// time, so a missing variable only shows up when a notification is due.
    pub fn from_env() -> Result<Self> {
        let uri = env::var("SMTP_URI").unwrap_or_else(|_| DEFAULT_SMTP_URI.to_string());
        let credentials = MailCredentials::from_env()?;
        Self::from_uri_and_credentials(&uri, &credentials)
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("use_tls", &self.use_tls)
            .field("username", &self.username)
            .field("password", &"***")
            .field("sender", &self.sender)
            .field("recipient", &self.recipient)
            .finish()
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{} is not set", name))
}
