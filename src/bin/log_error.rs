// Lambda bootstrap for the log-error function

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use teammates::api::log_error::function_handler;
use teammates::clients::SupabaseClientFactory;
use teammates::core::config::LogErrorConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    teammates::setup_logging();

    let config = LogErrorConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let factory = SupabaseClientFactory::new(config);

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(&factory, event)
    }))
    .await
}
