// Lambda bootstrap for the send-signup-email function

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use teammates::api::signup_email::function_handler;
use teammates::clients::ResendClient;
use teammates::core::config::SignupEmailConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    teammates::setup_logging();

    let config = SignupEmailConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let client = ResendClient::shared(&config);
    let email_from = config.email_from.as_str();

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(client, email_from, event)
    }))
    .await
}
