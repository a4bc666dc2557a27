//! Downstream service clients and the traits the handlers depend on.
//!
//! The handlers only see [`ErrorLogStore`] and [`EmailSender`]; the
//! Supabase and Resend implementations live in their own modules.

pub mod resend_client;
pub mod supabase_client;
#[cfg(test)]
mod test_server;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::core::models::{AuthUser, ErrorLogRow, OutboundEmail};
use crate::errors::FunctionError;

pub use resend_client::ResendClient;
pub use supabase_client::{SupabaseClient, SupabaseClientFactory};

/// Database access scoped to one caller credential.
#[async_trait]
pub trait ErrorLogStore: Send + Sync {
    /// Resolves the user the credential belongs to. `Ok(None)` when the
    /// credential carries no user session.
    async fn current_user(&self) -> Result<Option<AuthUser>, FunctionError>;

    async fn insert_error_log(&self, row: &ErrorLogRow) -> Result<(), FunctionError>;
}

/// Builds a store for each request from the caller's `Authorization` value.
pub trait ErrorLogStoreFactory: Send + Sync {
    type Store: ErrorLogStore;

    fn scoped(&self, credential: Option<&str>) -> Self::Store;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one email and returns the provider's success payload.
    async fn send(&self, email: &OutboundEmail) -> Result<Value, FunctionError>;
}

/// Joins `path` onto a base URL that has no trailing slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> anyhow::Result<Url> {
    let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
        .with_context(|| format!("invalid base URL '{base_url}'"))?;
    base.join(path.trim_start_matches('/'))
        .with_context(|| format!("invalid endpoint path '{path}'"))
}

/// Pulls a human readable message out of a downstream error response.
///
/// PostgREST and Resend use `message`, the auth server uses `msg` or
/// `error_description`.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let found = ["message", "msg", "error_description", "error"]
            .iter()
            .find_map(|key| json.get(*key).and_then(Value::as_str));
        if let Some(message) = found {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .map_or_else(|| status.to_string(), str::to_string)
    } else {
        trimmed.to_string()
    }
}
