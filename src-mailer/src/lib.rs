//! Contact-form mailer.
//!
//! Renders a message into HTML email with inlined CSS and a derived plain-text
//! alternative, then delivers it through an authenticated SMTP relay.

mod compose;
mod config;
mod email;
mod error;
mod message;
mod template;

pub use compose::{compose, ComposedEmail, TEXT_WIDTH};
pub use config::{EmailReceiver, EmailSender, RelayConfig, DEFAULT_SMTP_PORT, SMTPS_PORT};
pub use email::Email;
pub use error::MailError;
pub use message::{build_message, Attachment};
pub use template::contact_form_template;
