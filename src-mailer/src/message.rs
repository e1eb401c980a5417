//! MIME message assembly.

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart};
use lettre::{Address, Message};

use crate::compose::ComposedEmail;
use crate::config::{EmailReceiver, EmailSender};
use crate::error::MailError;

/// A single binary file sent along with the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Guessed from the file extension, `application/octet-stream` when unknown.
    pub fn content_type(&self) -> Result<ContentType, MailError> {
        let mime = mime_guess::from_path(&self.filename).first_or_octet_stream();
        ContentType::parse(mime.essence_str()).map_err(|e| MailError::Attachment {
            filename: self.filename.clone(),
            reason: e.to_string(),
        })
    }
}

fn parse_address(address: &str) -> Result<Address, MailError> {
    address.trim().parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

/// Builds `From: "<sender name>" <sender address>`, `To: <receiver address>`
/// with text and HTML alternatives, wrapped in multipart/mixed when a file is
/// attached.
pub fn build_message(
    sender: &EmailSender,
    receiver: &EmailReceiver,
    subject: &str,
    composed: &ComposedEmail,
    attachment: Option<&Attachment>,
) -> Result<Message, MailError> {
    let from = Mailbox::new(Some(sender.username.clone()), parse_address(&sender.email)?);
    let to = Mailbox::new(None, parse_address(&receiver.email)?);

    let bodies = MultiPart::alternative_plain_html(composed.text.clone(), composed.html.clone());

    let body = match attachment {
        Some(file) => MultiPart::mixed().multipart(bodies).singlepart(
            lettre::message::Attachment::new(file.filename.clone())
                .body(file.content.clone(), file.content_type()?),
        ),
        None => bodies,
    };

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .multipart(body)?;

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> EmailSender {
        EmailSender {
            username: "Portfolio Site".to_string(),
            email: "site@example.com".to_string(),
            password: "secret".to_string(),
            host: "smtp.example.com".to_string(),
            port: 587,
        }
    }

    fn receiver() -> EmailReceiver {
        EmailReceiver {
            username: "Owner".to_string(),
            email: "owner@example.com".to_string(),
        }
    }

    fn composed() -> ComposedEmail {
        ComposedEmail {
            html: "<p style=\"color: red;\">Hello there</p>".to_string(),
            text: "Hello there".to_string(),
        }
    }

    fn render(message: &Message) -> String {
        String::from_utf8_lossy(&message.formatted()).into_owned()
    }

    #[test]
    fn builds_text_and_html_alternatives() {
        let message = build_message(&sender(), &receiver(), "New message", &composed(), None).unwrap();
        let raw = render(&message);

        assert!(raw.contains("Subject: New message"));
        assert!(raw.contains("Portfolio Site"));
        assert!(raw.contains("<site@example.com>"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("text/html"));
        assert!(!raw.contains("multipart/mixed"));

        let recipients: Vec<String> = message.envelope().to().iter().map(|a| a.to_string()).collect();
        assert_eq!(recipients, vec!["owner@example.com".to_string()]);
    }

    #[test]
    fn attaches_file_with_guessed_type() {
        // not valid UTF-8, so the part is base64 encoded
        let file = Attachment::new("resume.pdf", b"%PDF-1.4\xff\xfe".to_vec());
        let message = build_message(&sender(), &receiver(), "CV", &composed(), Some(&file)).unwrap();
        let raw = render(&message);

        assert!(raw.contains("multipart/mixed"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("resume.pdf"));
        assert!(raw.contains("application/pdf"));
        assert!(raw.contains("Content-Transfer-Encoding: base64"));
        assert!(raw.contains("JVBERi0xLjT//g=="));
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        let file = Attachment::new("blob.zzz-unknown", vec![0u8, 1, 2]);
        let message = build_message(&sender(), &receiver(), "Blob", &composed(), Some(&file)).unwrap();
        assert!(render(&message).contains("application/octet-stream"));
    }

    #[test]
    fn rejects_invalid_sender_address() {
        let mut bad = sender();
        bad.email = "not an address".to_string();
        let err = build_message(&bad, &receiver(), "x", &composed(), None).unwrap_err();
        assert!(matches!(err, MailError::Address { .. }));
    }
}
