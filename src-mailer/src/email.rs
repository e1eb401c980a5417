//! SMTP delivery.

use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use crate::compose::compose;
use crate::config::{EmailReceiver, EmailSender, RelayConfig, SMTPS_PORT};
use crate::error::MailError;
use crate::message::{build_message, Attachment};

/// Sends templated emails from one sender to one receiver.
#[derive(Debug, Clone)]
pub struct Email {
    sender: EmailSender,
    receiver: EmailReceiver,
}

impl Email {
    #[must_use]
    pub const fn new(sender: EmailSender, receiver: EmailReceiver) -> Self {
        Self { sender, receiver }
    }

    #[must_use]
    pub fn from_config(config: RelayConfig) -> Self {
        Self::new(config.sender, config.receiver)
    }

    /// Create from environment variables, see [`RelayConfig::from_env`].
    pub fn from_env() -> Result<Self, MailError> {
        Ok(Self::from_config(RelayConfig::from_env()?))
    }

    pub fn sender(&self) -> &EmailSender {
        &self.sender
    }

    pub fn receiver(&self) -> &EmailReceiver {
        &self.receiver
    }

    // Port 465 speaks TLS from the first byte. Anything else upgrades with
    // STARTTLS when the relay offers it and stays in plain text otherwise.
    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let builder = if self.sender.port == SMTPS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.sender.host)?
        } else {
            let tls = TlsParameters::new(self.sender.host.clone())?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.sender.host)
                .tls(Tls::Opportunistic(tls))
        };

        let credentials = Credentials::new(self.sender.email.clone(), self.sender.password.clone());

        Ok(builder
            .port(self.sender.port)
            .credentials(credentials)
            .build())
    }

    /// Inline the template's CSS, derive the text body and deliver both, with
    /// `attachment` when given.
    ///
    /// Resolves once the relay accepted the message. Connection and
    /// authentication failures come back as [`MailError::Delivery`]; nothing is
    /// retried.
    pub async fn send(
        &self,
        template_html: &str,
        subject: &str,
        attachment: Option<Attachment>,
    ) -> Result<(), MailError> {
        let composed = compose(template_html)?;
        let message = build_message(
            &self.sender,
            &self.receiver,
            subject,
            &composed,
            attachment.as_ref(),
        )?;

        tracing::debug!(
            host = %self.sender.host,
            port = self.sender.port,
            to = %self.receiver.email,
            "Connecting to SMTP relay"
        );

        let mailer = self.transport()?;
        if let Err(e) = mailer.send(message).await {
            tracing::error!(
                host = %self.sender.host,
                to = %self.receiver.email,
                error = %e,
                "Email delivery failed"
            );
            return Err(e.into());
        }

        tracing::info!(
            to = %self.receiver.email,
            receiver = %self.receiver.username,
            subject = subject,
            attachment = attachment.as_ref().map(|a| a.filename.as_str()),
            "Email sent successfully"
        );

        Ok(())
    }
}
