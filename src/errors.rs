use thiserror::Error;

#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    ValidationError(String),

    #[error("Database request failed: {0}")]
    DatabaseError(String),

    #[error("Email provider request failed: {0}")]
    EmailError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to render email template: {0}")]
    TemplateError(String),
}

impl FunctionError {
    /// HTTP status for the proxy response. Caller mistakes are 4xx,
    /// everything downstream or internal is 5xx.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            FunctionError::ParseError(_) | FunctionError::ValidationError(_) => 400,
            FunctionError::DatabaseError(_)
            | FunctionError::EmailError(_)
            | FunctionError::HttpError(_)
            | FunctionError::ConfigError(_)
            | FunctionError::TemplateError(_) => 500,
        }
    }

    /// The bare message placed in the `error` field of a response body.
    #[must_use]
    pub fn client_message(&self) -> &str {
        match self {
            FunctionError::ParseError(m)
            | FunctionError::ValidationError(m)
            | FunctionError::DatabaseError(m)
            | FunctionError::EmailError(m)
            | FunctionError::HttpError(m)
            | FunctionError::ConfigError(m)
            | FunctionError::TemplateError(m) => m,
        }
    }
}

impl From<reqwest::Error> for FunctionError {
    fn from(error: reqwest::Error) -> Self {
        FunctionError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for FunctionError {
    fn from(error: serde_json::Error) -> Self {
        FunctionError::ParseError(error.to_string())
    }
}

impl From<anyhow::Error> for FunctionError {
    fn from(error: anyhow::Error) -> Self {
        FunctionError::HttpError(error.to_string())
    }
}

impl From<askama::Error> for FunctionError {
    fn from(error: askama::Error) -> Self {
        FunctionError::TemplateError(error.to_string())
    }
}
