//! Resend transactional email client.

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::info;

use super::{EmailSender, endpoint, error_message};
use crate::core::config::SignupEmailConfig;
use crate::core::models::OutboundEmail;
use crate::errors::FunctionError;

static SHARED_CLIENT: OnceCell<ResendClient> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct ResendClient {
    http: HttpClient,
    api_url: String,
    api_key: String,
}

impl ResendClient {
    #[must_use]
    pub fn new(config: &SignupEmailConfig) -> Self {
        Self::with_http(HttpClient::new(), config)
    }

    #[must_use]
    pub fn with_http(http: HttpClient, config: &SignupEmailConfig) -> Self {
        Self {
            http,
            api_url: config.resend_api_url.clone(),
            api_key: config.resend_api_key.clone(),
        }
    }

    /// Process-wide client, built on first use and kept until the process
    /// exits. Later calls ignore `config`.
    pub fn shared(config: &SignupEmailConfig) -> &'static ResendClient {
        SHARED_CLIENT.get_or_init(|| ResendClient::new(config))
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: &OutboundEmail) -> Result<Value, FunctionError> {
        let url = endpoint(&self.api_url, "emails")?;
        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FunctionError::EmailError(error_message(status, &body)));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| FunctionError::EmailError(format!("send response parse: {e}")))?;
        info!(email_id = ?data.get("id"), "Email accepted by Resend");
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::test_server::{StubServer, closed_base_url, http_client};
    use serde_json::json;

    fn config(api_url: &str) -> SignupEmailConfig {
        SignupEmailConfig {
            resend_api_key: "re_test".to_string(),
            resend_api_url: api_url.to_string(),
            email_from: "TeamMates <onboarding@resend.dev>".to_string(),
        }
    }

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "TeamMates <onboarding@resend.dev>".to_string(),
            to: vec!["a@b.com".to_string()],
            subject: "Potwierdzenie zapisu na wydarzenie: Kickoff".to_string(),
            html: "<h3>Kickoff</h3>".to_string(),
        }
    }

    #[test]
    fn test_shared_client_is_built_once() {
        let first = config("https://api.resend.com");
        let second = SignupEmailConfig {
            resend_api_key: "re_second".to_string(),
            ..first.clone()
        };

        let a = ResendClient::shared(&first);
        let b = ResendClient::shared(&second);
        assert!(std::ptr::eq(a, b));
        assert_eq!(b.api_key, "re_test");
    }

    #[tokio::test]
    async fn test_send_posts_email_with_bearer_key() {
        let server = StubServer::respond(200, "OK", r#"{"id":"email-1"}"#).await;
        let client = ResendClient::with_http(http_client(), &config(&server.base_url));

        let data = client.send(&email()).await.unwrap();
        assert_eq!(data, json!({ "id": "email-1" }));

        let request = server.request().await;
        assert_eq!(request.request_line, "POST /emails HTTP/1.1");
        assert_eq!(request.header("authorization"), Some("Bearer re_test"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(
            request.json_body(),
            json!({
                "from": "TeamMates <onboarding@resend.dev>",
                "to": ["a@b.com"],
                "subject": "Potwierdzenie zapisu na wydarzenie: Kickoff",
                "html": "<h3>Kickoff</h3>"
            })
        );
    }

    #[tokio::test]
    async fn test_send_maps_provider_error_message() {
        let body =
            r#"{"statusCode":422,"name":"validation_error","message":"Invalid `to` field."}"#;
        let server = StubServer::respond(422, "Unprocessable Entity", body).await;
        let client = ResendClient::with_http(http_client(), &config(&server.base_url));

        let err = client.send(&email()).await.unwrap_err();
        assert!(matches!(&err, FunctionError::EmailError(m) if m == "Invalid `to` field."));
        server.request().await;
    }

    #[tokio::test]
    async fn test_send_rejects_non_json_success_body() {
        let server = StubServer::respond(200, "OK", "accepted").await;
        let client = ResendClient::with_http(http_client(), &config(&server.base_url));

        let err = client.send(&email()).await.unwrap_err();
        assert!(
            matches!(&err, FunctionError::EmailError(m) if m.starts_with("send response parse")),
            "got: {err:?}"
        );
        server.request().await;
    }

    #[tokio::test]
    async fn test_send_unreachable_provider_is_http_error() {
        let client = ResendClient::with_http(http_client(), &config(&closed_base_url().await));

        let err = client.send(&email()).await.unwrap_err();
        assert!(matches!(err, FunctionError::HttpError(_)), "got: {err:?}");
    }
}
