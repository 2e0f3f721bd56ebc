//! Message bodies for the transactional emails

use tb_core::services::mail::Recipient;

/// Subject plus plain text and HTML renditions of one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailContent {
    pub subject: String,
    pub text: String,
    pub html: String,
}

pub fn welcome(to: &Recipient, url: &str) -> MailContent {
    let text = format!(
        "Hi {name},\n\n\
         Welcome to Tourbook, we're glad to have you!\n\n\
         We're all a big family here, so make sure to upload your user photo so we get to know you a bit better:\n\
         {url}\n\n\
         If you need any help with booking your next tour, please don't hesitate to contact us!\n\n\
         - The Tourbook team",
        name = to.first_name,
        url = url,
    );
    let html = format!(
        "<p>Hi {name},</p>\
         <p>Welcome to Tourbook, we're glad to have you!</p>\
         <p>We're all a big family here, so make sure to upload your user photo so we get to know you a bit better.</p>\
         <p><a href=\"{url}\">Upload user photo</a></p>\
         <p>If you need any help with booking your next tour, please don't hesitate to contact us!</p>\
         <p>- The Tourbook team</p>",
        name = escape(&to.first_name),
        url = escape(url),
    );

    MailContent {
        subject: "Welcome to the Tourbook family!".to_string(),
        text,
        html,
    }
}

pub fn password_reset(to: &Recipient, url: &str, expires_in_minutes: i64) -> MailContent {
    let text = format!(
        "Hi {name},\n\n\
         Forgot your password? Submit a PATCH request with your new password and passwordConfirm to:\n\
         {url}\n\n\
         The link is valid for {minutes} minutes.\n\
         If you didn't forget your password, please ignore this email!",
        name = to.first_name,
        url = url,
        minutes = expires_in_minutes,
    );
    let html = format!(
        "<p>Hi {name},</p>\
         <p>Forgot your password? Submit a PATCH request with your new password and passwordConfirm to:</p>\
         <p><a href=\"{url}\">{url}</a></p>\
         <p>The link is valid for {minutes} minutes.</p>\
         <p>If you didn't forget your password, please ignore this email!</p>",
        name = escape(&to.first_name),
        url = escape(url),
        minutes = expires_in_minutes,
    );

    MailContent {
        subject: format!("Your password reset token (valid for {} min)", expires_in_minutes),
        text,
        html,
    }
}

fn escape(value: &str) -> String {
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
