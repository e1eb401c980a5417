//! Contact-form email template.

use handlebars::{html_escape, Handlebars};
use serde::Serialize;

use crate::error::MailError;

#[derive(Serialize)]
struct ContactForm<'a> {
    sender_name: &'a str,
    sender_email: &'a str,
    subject: &'a str,
    /// Already escaped, rendered raw.
    message_html: String,
}

/// Renders the "new contact form message" email.
///
/// Every value is HTML-escaped; line breaks in `message` become `<br>`.
pub fn contact_form_template(
    sender_name: &str,
    sender_email: &str,
    subject: &str,
    message: &str,
) -> Result<String, MailError> {
    let message_html = message
        .split('\n')
        .map(html_escape)
        .collect::<Vec<_>>()
        .join("<br>");

    let data = ContactForm {
        sender_name,
        sender_email,
        subject,
        message_html,
    };

    let html = Handlebars::new().render_template(CONTACT_FORM_TEMPLATE, &data)?;
    Ok(html)
}

const CONTACT_FORM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body {
      font-family: Arial, sans-serif;
      line-height: 1.6;
      color: #333;
      max-width: 600px;
      margin: 0 auto;
      padding: 20px;
    }
    .header {
      background: linear-gradient(135deg, #3b82f6 0%, #10b981 100%);
      color: white;
      padding: 30px;
      border-radius: 10px 10px 0 0;
      text-align: center;
    }
    .content {
      background: #f9fafb;
      padding: 30px;
      border-radius: 0 0 10px 10px;
    }
    .message-box {
      background: white;
      padding: 20px;
      border-radius: 8px;
      border-left: 4px solid #3b82f6;
      margin: 20px 0;
    }
    .sender-info {
      background: #eff6ff;
      padding: 15px;
      border-radius: 8px;
      margin-top: 20px;
    }
    .footer {
      text-align: center;
      margin-top: 30px;
      padding-top: 20px;
      border-top: 2px solid #e5e7eb;
      color: #6b7280;
      font-size: 14px;
    }
  </style>
</head>
<body>
  <div class="header">
    <h1>📬 New Contact Form Message</h1>
  </div>
  <div class="content">
    <p>You have received a new message from your portfolio website.</p>

    <div class="sender-info">
      <p><strong>From:</strong> {{sender_name}}</p>
      <p><strong>Email:</strong> <a href="mailto:{{sender_email}}">{{sender_email}}</a></p>
      <p><strong>Subject:</strong> {{subject}}</p>
    </div>

    <div class="message-box">
      <h3>Message:</h3>
      <p>{{{message_html}}}</p>
    </div>

    <div class="footer">
      <p>This email was sent from your portfolio contact form.</p>
      <p>Reply directly to this email to respond to {{sender_name}}.</p>
    </div>
  </div>
</body>
</html>
"#;
