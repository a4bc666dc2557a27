//! Signup confirmation email content.
//!
//! The body is a fixed Polish askama template. Askama escapes every
//! interpolated value because the template has an `.html` extension.

use askama::Template;

use crate::core::models::{OutboundEmail, SignupDetails};
use crate::errors::FunctionError;

pub const SUBJECT_PREFIX: &str = "Potwierdzenie zapisu na wydarzenie: ";

#[derive(Template)]
#[template(path = "signup_confirmation.html")]
struct SignupConfirmationTemplate<'a> {
    event_name: &'a str,
    event_date: &'a str,
    event_location: &'a str,
}

/// Plain-text subject line, not HTML.
#[must_use]
pub fn confirmation_subject(event_name: &str) -> String {
    format!("{SUBJECT_PREFIX}{event_name}")
}

/// # Errors
///
/// Returns `TemplateError` if rendering fails.
pub fn confirmation_html(details: &SignupDetails) -> Result<String, FunctionError> {
    let html = SignupConfirmationTemplate {
        event_name: &details.event_name,
        event_date: &details.event_date,
        event_location: &details.event_location,
    }
    .render()?;
    Ok(html)
}

/// Assembles the confirmation email for a single recipient.
///
/// # Errors
///
/// Returns `TemplateError` if the body cannot be rendered.
pub fn build_confirmation_email(
    from: &str,
    details: &SignupDetails,
) -> Result<OutboundEmail, FunctionError> {
    Ok(OutboundEmail {
        from: from.to_string(),
        to: vec![details.user_email.clone()],
        subject: confirmation_subject(&details.event_name),
        html: confirmation_html(details)?,
    })
}
