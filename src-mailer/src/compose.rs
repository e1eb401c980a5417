//! HTML preparation: CSS inlining and the plain-text alternative.

use crate::error::MailError;

/// Column width of the derived plain-text body.
pub const TEXT_WIDTH: usize = 80;

/// Both bodies of a multipart/alternative message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEmail {
    pub html: String,
    pub text: String,
}

/// Moves every stylesheet rule into `style` attributes (mail clients drop
/// `<style>` blocks) and converts the inlined markup to plain text.
pub fn compose(template_html: &str) -> Result<ComposedEmail, MailError> {
    let html = css_inline::inline(template_html).map_err(|e| MailError::Inline(e.to_string()))?;
    let text = html2text::from_read(html.as_bytes(), TEXT_WIDTH)
        .map_err(|e| MailError::PlainText(e.to_string()))?;

    Ok(ComposedEmail { html, text })
}
