//! `log-error` function: records an application error report in the
//! database on behalf of the calling user.

use lambda_runtime::LambdaEvent;
use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::clients::{ErrorLogStore, ErrorLogStoreFactory};
use crate::core::models::{ErrorLogRequest, ErrorLogRow};
use crate::errors::FunctionError;

pub const LOG_CREATED_MESSAGE: &str = "Log created successfully";

/// Lambda entry point. Always answers with a proxy response; request
/// failures never surface as runtime errors.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<F>(
    factory: &F,
    event: LambdaEvent<Value>,
) -> Result<Value, lambda_runtime::Error>
where
    F: ErrorLogStoreFactory,
{
    let payload = event.payload;
    let authorization = parsing::event_header(&payload, "Authorization");

    let body = match parsing::extract_body(&payload) {
        Ok(body) => body,
        Err(e) => {
            error!("Error in log-error function: {}", e);
            return Ok(helpers::error_to_response(&e));
        }
    };

    Ok(log_error(factory, authorization, &body).await)
}

/// Resolves the caller, parses the report and inserts one row.
///
/// 200 on success, 400 when the body is not a valid report, 500 when the
/// insert fails.
pub async fn log_error<F>(factory: &F, authorization: Option<&str>, body: &str) -> Value
where
    F: ErrorLogStoreFactory,
{
    let store = factory.scoped(authorization);

    match try_log_error(&store, body).await {
        Ok(()) => helpers::ok_message(LOG_CREATED_MESSAGE),
        Err(e @ FunctionError::DatabaseError(_)) => {
            error!("Error inserting log: {}", e.client_message());
            helpers::error_to_response(&e)
        }
        Err(e) => {
            error!("Error in log-error function: {}", e);
            helpers::error_to_response(&e)
        }
    }
}

async fn try_log_error<S: ErrorLogStore>(store: &S, body: &str) -> Result<(), FunctionError> {
    let user_id = resolve_user_id(store).await;
    let request: ErrorLogRequest = parsing::parse_json_object(body)?;

    info!(
        event_id = ?request.event_id,
        operation_type = ?request.operation_type,
        has_user = user_id.is_some(),
        "Recording error log"
    );

    let row = ErrorLogRow::new(user_id, request);
    store.insert_error_log(&row).await
}

/// Best-effort: a failed lookup is logged and the row is written without a
/// user.
async fn resolve_user_id<S: ErrorLogStore>(store: &S) -> Option<String> {
    match store.current_user().await {
        Ok(user) => user.map(|u| u.id),
        Err(e) => {
            warn!("Could not resolve current user: {}", e);
            None
        }
    }
}
