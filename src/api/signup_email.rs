//! `send-signup-email` function: sends an event registration confirmation.

use lambda_runtime::LambdaEvent;
use serde_json::{Value, json};
use tracing::{error, info};

use super::{helpers, parsing};
use crate::clients::EmailSender;
use crate::core::models::SignupEmailRequest;
use crate::errors::FunctionError;
use crate::templates;

pub const EMAIL_SENT_MESSAGE: &str = "Email sent successfully";

#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<S>(
    sender: &S,
    email_from: &str,
    event: LambdaEvent<Value>,
) -> Result<Value, lambda_runtime::Error>
where
    S: EmailSender + ?Sized,
{
    let payload = event.payload;
    let method = parsing::request_method(&payload).unwrap_or("");

    if !method.eq_ignore_ascii_case("POST") {
        info!(method = %method, "Rejecting non-POST request");
        return Ok(helpers::method_not_allowed());
    }

    let body = match parsing::extract_body(&payload) {
        Ok(body) => body,
        Err(e) => {
            error!("Function error: {}", e);
            return Ok(helpers::error_to_response(&e));
        }
    };

    Ok(send_signup_email(sender, email_from, &body).await)
}

/// Validates the signup, renders the confirmation and sends it.
///
/// 400 for an unparsable body or missing fields, 500 when the provider
/// rejects the email or cannot be reached.
pub async fn send_signup_email<S>(sender: &S, email_from: &str, body: &str) -> Value
where
    S: EmailSender + ?Sized,
{
    match try_send(sender, email_from, body).await {
        Ok(data) => helpers::json_response(
            200,
            &json!({ "message": EMAIL_SENT_MESSAGE, "data": data }),
        ),
        Err(e @ FunctionError::ValidationError(_)) => {
            info!("Signup email request rejected: {}", e);
            helpers::error_to_response(&e)
        }
        Err(e @ FunctionError::EmailError(_)) => {
            error!("Resend error: {}", e.client_message());
            helpers::error_to_response(&e)
        }
        Err(e) => {
            error!("Function error: {}", e);
            helpers::error_to_response(&e)
        }
    }
}

async fn try_send<S>(sender: &S, email_from: &str, body: &str) -> Result<Value, FunctionError>
where
    S: EmailSender + ?Sized,
{
    let request: SignupEmailRequest = parsing::parse_json_object(body)?;
    let details = request.validate()?;

    let email = templates::build_confirmation_email(email_from, &details)?;
    info!(event_name = %details.event_name, "Sending signup confirmation");

    sender.send(&email).await
}
