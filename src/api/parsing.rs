use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::FunctionError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Case-insensitive lookup in the proxy event's `headers` object.
pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Header from a full proxy event, `None` when the event has no headers.
pub fn event_header<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    payload
        .get("headers")
        .and_then(|headers| get_header_value(headers, name))
}

/// HTTP method of a proxy event. Payload v2 keeps it under
/// `requestContext.http.method`, v1 under `httpMethod`.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Returns the request body as text, decoding base64 bodies.
pub fn extract_body(payload: &Value) -> Result<String, FunctionError> {
    let Some(body) = payload.get("body").filter(|b| !b.is_null()) else {
        return Err(FunctionError::ParseError("Missing body".to_string()));
    };

    let Some(body_str) = body.as_str() else {
        return Err(FunctionError::ParseError("Invalid body format".to_string()));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Ok(body_str.to_string());
    }

    let bytes = STANDARD
        .decode(body_str)
        .map_err(|e| FunctionError::ParseError(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| FunctionError::ParseError(format!("Body is not UTF-8: {e}")))
}

/// Parses a JSON request body into `T`.
pub fn parse_json_body<T: DeserializeOwned>(body: &str) -> Result<T, FunctionError> {
    serde_json::from_str(body)
        .map_err(|e| FunctionError::ParseError(format!("Invalid JSON body: {e}")))
}

/// Parses a body that must be a JSON object into `T`. Arrays and scalars
/// are rejected so they cannot bind to struct fields by position.
pub fn parse_json_object<T: DeserializeOwned>(body: &str) -> Result<T, FunctionError> {
    let value: Value = parse_json_body(body)?;
    if !value.is_object() {
        return Err(FunctionError::ParseError(
            "Request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| FunctionError::ParseError(format!("Invalid JSON body: {e}")))
}
