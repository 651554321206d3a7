//! Stable, user-facing codes attached to every [`GraphMessage`](crate::messages::GraphMessage).

pub const ACCESS_DENIED: &str = "ACCESS_DENIED";
pub const DIRECTIVE_EXECUTION_ERROR: &str = "DIRECTIVE_EXECUTION_ERROR";
pub const EXECUTION_ERROR: &str = "EXECUTION_ERROR";
pub const INVALID_DOCUMENT: &str = "INVALID_DOCUMENT";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const INVALID_VARIABLE_VALUE: &str = "INVALID_VARIABLE_VALUE";
pub const OPERATION_CANCELED: &str = "OPERATION_CANCELED";
pub const QUERY_TOO_COMPLEX: &str = "QUERY_TOO_COMPLEX";
pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";
pub const UNKNOWN_OPERATION: &str = "UNKNOWN_OPERATION";
