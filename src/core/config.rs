use std::env;

pub const DEFAULT_ERROR_LOG_TABLE: &str = "error_logs";
pub const DEFAULT_SIGNUP_EMAIL_FROM: &str = "TeamMates <onboarding@resend.dev>";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

fn required<F>(lookup: &F, name: &str) -> Result<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(format!("{name}: environment variable is empty")),
        None => Err(format!("{name}: environment variable not found")),
    }
}

fn optional<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Settings for the `log-error` function.
#[derive(Debug, Clone)]
pub struct LogErrorConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub error_log_table: String,
}

impl LogErrorConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            supabase_url: trim_base_url(required(&lookup, "SUPABASE_URL")?),
            supabase_anon_key: required(&lookup, "SUPABASE_ANON_KEY")?,
            error_log_table: optional(&lookup, "ERROR_LOG_TABLE", DEFAULT_ERROR_LOG_TABLE),
        })
    }
}

/// Settings for the `send-signup-email` function.
#[derive(Debug, Clone)]
pub struct SignupEmailConfig {
    pub resend_api_key: String,
    pub resend_api_url: String,
    pub email_from: String,
}

impl SignupEmailConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            resend_api_key: required(&lookup, "RESEND_API_KEY")?,
            resend_api_url: trim_base_url(optional(
                &lookup,
                "RESEND_API_URL",
                DEFAULT_RESEND_API_URL,
            )),
            email_from: optional(&lookup, "SIGNUP_EMAIL_FROM", DEFAULT_SIGNUP_EMAIL_FROM),
        })
    }
}
