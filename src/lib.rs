//! `TeamMates` serverless functions.
//!
//! This crate backs two independent AWS Lambda functions:
//! 1. `log-error` records application error reports in the Supabase
//!    `error_logs` table, attributed to the calling user
//! 2. `send-signup-email` sends an event registration confirmation through
//!    Resend
//!
//! # Architecture
//!
//! Each function is a thin Lambda entry point in [`api`] that unpacks the
//! API Gateway proxy event and delegates to a transport-independent
//! operation. Downstream services are reached through the traits in
//! [`clients`], so the operations can run against fakes.
//!
//! # Example
//!
//! ```no_run
//! use teammates::api::signup_email::send_signup_email;
//! use teammates::clients::ResendClient;
//! use teammates::core::config::SignupEmailConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     teammates::setup_logging();
//!
//!     let config = SignupEmailConfig::from_env()?;
//!     let client = ResendClient::shared(&config);
//!     let body = r#"{"userEmail":"a@b.com","eventName":"Kickoff","eventDate":"2024-05-01","eventLocation":"Warsaw"}"#;
//!
//!     let response = send_signup_email(client, &config.email_from, body).await;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod templates;

pub use errors::FunctionError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Logs at INFO, or DEBUG when built with the `debug-logs` feature. Safe to
/// call more than once; later calls keep the first subscriber.
///
/// # Example
///
/// ```
/// teammates::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let level = if cfg!(feature = "debug-logs") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_filter(tracing_subscriber::filter::LevelFilter::from_level(level));

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
