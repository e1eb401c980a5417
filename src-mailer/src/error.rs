//! Errors surfaced by the mailer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail configuration: {0}")]
    Config(String),

    #[error("invalid email address `{address}`: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to inline CSS: {0}")]
    Inline(String),

    #[error("failed to derive plain-text body: {0}")]
    PlainText(String),

    #[error("failed to render email template: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("invalid attachment `{filename}`: {reason}")]
    Attachment { filename: String, reason: String },

    #[error("failed to build email message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("email delivery failed: {0}")]
    Delivery(#[from] lettre::transport::smtp::Error),
}
