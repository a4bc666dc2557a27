//! Lambda handlers and proxy request/response plumbing

pub mod helpers;
pub mod log_error;
pub mod parsing;
pub mod signup_email;
