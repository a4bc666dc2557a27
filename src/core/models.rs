use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::FunctionError;

/// Error report posted by the app when an event operation fails. Field
/// values are kept as sent, whatever their JSON type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLogRequest {
    #[serde(default)]
    pub event_id: Value,
    #[serde(default)]
    pub error_message: Value,
    #[serde(default)]
    pub operation_type: Value,
    #[serde(default)]
    pub event_data: Value,
}

/// Row inserted into the error log table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorLogRow {
    pub user_id: Option<String>,
    pub event_id: Value,
    pub error_message: Value,
    pub operation_type: Value,
    pub event_data_snapshot: Value,
}

impl ErrorLogRow {
    #[must_use]
    pub fn new(user_id: Option<String>, request: ErrorLogRequest) -> Self {
        Self {
            user_id,
            event_id: request.event_id,
            error_message: request.error_message,
            operation_type: request.operation_type,
            event_data_snapshot: request.event_data,
        }
    }
}

/// Authenticated user as returned by the auth endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupEmailRequest {
    #[serde(default)]
    pub user_email: Value,
    #[serde(default)]
    pub event_name: Value,
    #[serde(default)]
    pub event_date: Value,
    #[serde(default)]
    pub event_location: Value,
}

/// A signup request with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    pub user_email: String,
    pub event_name: String,
    pub event_date: String,
    pub event_location: String,
}

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

impl SignupEmailRequest {
    /// # Errors
    ///
    /// Returns `ValidationError` when any field is missing.
    pub fn validate(self) -> Result<SignupDetails, FunctionError> {
        // Absent, null, false, 0 and "" count as missing.
        fn present(field: Value) -> Option<String> {
            match field {
                Value::Null | Value::Bool(false) => None,
                Value::String(s) if s.is_empty() => None,
                Value::String(s) => Some(s),
                Value::Number(n) if n.as_f64() == Some(0.0) => None,
                other => Some(other.to_string()),
            }
        }

        match (
            present(self.user_email),
            present(self.event_name),
            present(self.event_date),
            present(self.event_location),
        ) {
            (Some(user_email), Some(event_name), Some(event_date), Some(event_location)) => {
                Ok(SignupDetails {
                    user_email,
                    event_name,
                    event_date,
                    event_location,
                })
            }
            _ => Err(FunctionError::ValidationError(
                MISSING_FIELDS_MESSAGE.to_string(),
            )),
        }
    }
}

/// Request body for the email provider's send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}
