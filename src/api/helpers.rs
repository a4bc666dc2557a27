//! API Gateway proxy response builders shared by both functions.

use serde_json::{Value, json};

use crate::errors::FunctionError;

pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

/// Returns a response whose body is `body` serialized as JSON.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response with a `message` field.
#[must_use]
pub fn ok_message(message: &str) -> Value {
    json_response(200, &json!({ "message": message }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Maps a failure to its status code and bare message.
#[must_use]
pub fn error_to_response(error: &FunctionError) -> Value {
    err_response(error.status_code(), error.client_message())
}

/// Returns a plain-text 405.
#[must_use]
pub fn method_not_allowed() -> Value {
    json!({
        "statusCode": 405,
        "headers": { "Content-Type": "text/plain" },
        "body": METHOD_NOT_ALLOWED
    })
}
