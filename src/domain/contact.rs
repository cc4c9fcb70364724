/// A transactional email derived from a validated submission, ready to hand
/// to the delivery provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

impl OutboundMessage {
    /// Builds the outbound message for a contact-form submission.
    ///
    /// `reply_to` is set to the submitter's address so a plain reply reaches
    /// them rather than the fixed sender. Untrusted values are escaped into
    /// the HTML body as text content.
    #[must_use]
    pub fn contact(sender: &str, destination: &str, name: &str, email: &str, message: &str) -> Self {
        Self {
            from: sender.to_string(),
            to: destination.to_string(),
            reply_to: email.to_string(),
            subject: format!("💌 Nuevo contacto: {name}"),
            html: render_body(name, email, message),
        }
    }
}

/// Checks the contact-form email pattern: one-or-more non-space/non-`@`
/// characters, `@`, one-or-more, `.`, one-or-more. Deliberately loose beyond
/// that; deliverability is the provider's problem.
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Escapes a value for insertion into HTML text content.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_body(name: &str, email: &str, message: &str) -> String {
    let name = escape_html(name);
    let email = escape_html(email);
    let message = escape_html(message);

    format!(
        r#"<div style="font-family: 'Helvetica Neue', Arial, sans-serif; max-width: 600px; margin: 0 auto; background: #0A0A0A; color: #F5F0E8; padding: 40px; border-radius: 12px;">
    <div style="text-align: center; margin-bottom: 32px; border-bottom: 1px solid #2A2A2A; padding-bottom: 24px;">
        <h1 style="color: #D4AF37; font-size: 24px; margin: 0;">CHAP<span style="color: #F5F0E8;">MAGIC</span></h1>
        <p style="color: #D9D0C0; font-size: 12px; letter-spacing: 3px; margin-top: 8px;">NUEVO MENSAJE DE CONTACTO</p>
    </div>
    <div style="margin-bottom: 24px;">
        <p style="color: #D4AF37; font-size: 11px; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 4px;">Nombre</p>
        <p style="font-size: 18px; margin: 0;">{name}</p>
    </div>
    <div style="margin-bottom: 24px;">
        <p style="color: #D4AF37; font-size: 11px; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 4px;">Email</p>
        <p style="font-size: 18px; margin: 0;"><a href="mailto:{email}" style="color: #D4AF37;">{email}</a></p>
    </div>
    <div style="margin-bottom: 24px; padding: 20px; background: #1A1A1A; border-radius: 8px; border-left: 3px solid #D4AF37;">
        <p style="color: #D4AF37; font-size: 11px; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 8px;">Mensaje</p>
        <p style="font-size: 16px; line-height: 1.6; margin: 0; white-space: pre-wrap;">{message}</p>
    </div>
    <div style="text-align: center; margin-top: 32px; padding-top: 24px; border-top: 1px solid #2A2A2A;">
        <p style="color: #D9D0C0; font-size: 11px;">Puedes responder directamente a este email para contactar a {name}</p>
    </div>
</div>"#
    )
}
