//! Supabase REST client scoped to a caller credential.
//!
//! Talks to the auth server (`/auth/v1/user`) to resolve the caller and to
//! PostgREST (`/rest/v1/{table}`) to insert rows. Every request carries the
//! project `apikey` and the caller's `Authorization` header so row level
//! security sees the real user.

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, info};

use super::{ErrorLogStore, ErrorLogStoreFactory, endpoint, error_message};
use crate::core::config::LogErrorConfig;
use crate::core::models::{AuthUser, ErrorLogRow};
use crate::errors::FunctionError;

/// Creates one [`SupabaseClient`] per request. Holds the connection pool and
/// project settings, never a credential.
#[derive(Debug, Clone)]
pub struct SupabaseClientFactory {
    http: HttpClient,
    config: LogErrorConfig,
}

impl SupabaseClientFactory {
    #[must_use]
    pub fn new(config: LogErrorConfig) -> Self {
        Self {
            http: HttpClient::new(),
            config,
        }
    }
}

impl ErrorLogStoreFactory for SupabaseClientFactory {
    type Store = SupabaseClient;

    fn scoped(&self, credential: Option<&str>) -> SupabaseClient {
        SupabaseClient::new(self.http.clone(), &self.config, credential)
    }
}

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: HttpClient,
    base_url: String,
    anon_key: String,
    authorization: String,
    table: String,
}

impl SupabaseClient {
    /// Without a caller credential the anon key is used as bearer token,
    /// which makes the request anonymous.
    #[must_use]
    pub fn new(http: HttpClient, config: &LogErrorConfig, credential: Option<&str>) -> Self {
        let authorization = credential
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map_or_else(
                || format!("Bearer {}", config.supabase_anon_key),
                str::to_string,
            );

        Self {
            http,
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
            authorization,
            table: config.error_log_table.clone(),
        }
    }

    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    fn request(&self, method: reqwest::Method, url: url::Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.authorization)
    }
}

#[async_trait]
impl ErrorLogStore for SupabaseClient {
    async fn current_user(&self) -> Result<Option<AuthUser>, FunctionError> {
        let url = endpoint(&self.base_url, "auth/v1/user")?;
        let resp = self.request(reqwest::Method::GET, url).send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!(status = %status, "Credential carries no user session");
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FunctionError::DatabaseError(error_message(status, &body)));
        }

        let user: AuthUser = resp
            .json()
            .await
            .map_err(|e| FunctionError::DatabaseError(format!("auth user parse: {e}")))?;
        Ok(Some(user))
    }

    async fn insert_error_log(&self, row: &ErrorLogRow) -> Result<(), FunctionError> {
        let url = endpoint(&self.base_url, &format!("rest/v1/{}", self.table))?;
        let resp = self
            .request(reqwest::Method::POST, url)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        let status = resp.status();

        if status.is_success() {
            info!(table = %self.table, "Inserted error log row");
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(FunctionError::DatabaseError(error_message(status, &body)))
    }
}
