//! Relay and party configuration.

use std::fmt;

use crate::error::MailError;

/// Default SMTP submission port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Port served with implicit TLS instead of STARTTLS.
pub const SMTPS_PORT: u16 = 465;

/// Who the email is sent as, and how to reach the relay.
///
/// `email` doubles as the relay login, `username` is the display name.
#[derive(Clone)]
pub struct EmailSender {
    pub username: String,
    pub email: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl fmt::Debug for EmailSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSender")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReceiver {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub sender: EmailSender,
    pub receiver: EmailReceiver,
}

impl RelayConfig {
    /// Create configuration from environment variables.
    ///
    /// # Required Environment Variables
    /// - `SMTP_HOST`: relay hostname
    /// - `SMTP_EMAIL`: sender address, also used as the relay login
    /// - `SMTP_PASSWORD`: relay password
    /// - `CONTACT_TO_EMAIL`: recipient address
    ///
    /// # Optional Environment Variables
    /// - `SMTP_PORT`: relay port (default: 587)
    /// - `SMTP_USERNAME`: sender display name (default: sender address)
    /// - `CONTACT_TO_NAME`: recipient display name (default: recipient address)
    pub fn from_env() -> Result<Self, MailError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MailError> {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            optional(key)
                .ok_or_else(|| MailError::Config(format!("{} environment variable not set", key)))
        };

        let host = required("SMTP_HOST")?;
        let email = required("SMTP_EMAIL")?;
        let password = required("SMTP_PASSWORD")?;
        let to_email = required("CONTACT_TO_EMAIL")?;

        let port = match optional("SMTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| MailError::Config(format!("SMTP_PORT `{}` is not a port: {}", raw, e)))?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            sender: EmailSender {
                username: optional("SMTP_USERNAME").unwrap_or_else(|| email.clone()),
                email,
                password,
                host,
                port,
            },
            receiver: EmailReceiver {
                username: optional("CONTACT_TO_NAME").unwrap_or_else(|| to_email.clone()),
                email: to_email,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_EMAIL", "site@example.com"),
        ("SMTP_PASSWORD", "hunter2"),
        ("CONTACT_TO_EMAIL", "me@example.com"),
    ];

    #[test]
    fn applies_defaults() {
        let config = RelayConfig::from_lookup(lookup(REQUIRED)).unwrap();
        assert_eq!(config.sender.port, DEFAULT_SMTP_PORT);
        assert_eq!(config.sender.username, "site@example.com");
        assert_eq!(config.receiver.username, "me@example.com");
        assert_eq!(config.receiver.email, "me@example.com");
    }

    #[test]
    fn reads_optional_values() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([("SMTP_PORT", "465"), ("SMTP_USERNAME", "Portfolio"), ("CONTACT_TO_NAME", "Me")]);
        let config = RelayConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.sender.port, SMTPS_PORT);
        assert_eq!(config.sender.username, "Portfolio");
        assert_eq!(config.receiver.username, "Me");
    }

    #[test]
    fn missing_required_value_is_config_error() {
        let pairs: Vec<_> = REQUIRED.iter().copied().filter(|(k, _)| *k != "SMTP_PASSWORD").collect();
        let err = RelayConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, MailError::Config(ref msg) if msg.contains("SMTP_PASSWORD")));
    }

    #[test]
    fn rejects_bad_port() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SMTP_PORT", "smtp"));
        assert!(matches!(
            RelayConfig::from_lookup(lookup(&pairs)),
            Err(MailError::Config(_))
        ));
    }

    #[test]
    fn debug_output_hides_password() {
        let config = RelayConfig::from_lookup(lookup(REQUIRED)).unwrap();
        let printed = format!("{:?}", config.sender);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
