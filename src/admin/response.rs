//! Response envelopes and the admin error taxonomy.
//!
//! Every admin operation answers with one of two JSON shapes:
//! `{ success: true, data, message, timestamp }` or
//! `{ success: false, error, details, timestamp }`. Unexpected internal
//! errors are logged and collapsed to a generic message so no internals
//! leak to clients.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error("missing or invalid authorization token")]
    Unauthorized,

    #[error("origin not allowed")]
    Forbidden,

    #[error("rate limit exceeded")]
    RateLimited { retry_after_seconds: u64 },

    #[error("invalid request: {0}")]
    Invalid(String),

    #[error("internal error")]
    Internal,
}

impl AdminError {
    /// HTTP status code a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            AdminError::Unauthorized => 401,
            AdminError::Forbidden => 403,
            AdminError::RateLimited { .. } => 429,
            AdminError::Invalid(_) => 400,
            AdminError::Internal => 500,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now(),
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl ApiErrorResponse {
    pub fn from_error(error: &AdminError) -> Self {
        let details = match error {
            AdminError::RateLimited {
                retry_after_seconds,
            } => Some(serde_json::json!({ "retry_after": retry_after_seconds })),
            _ => None,
        };
        Self {
            success: false,
            error: error.to_string(),
            details,
            timestamp: Utc::now(),
        }
    }

    /// Convert an arbitrary failure into the generic internal-error body,
    /// logging the real cause server-side.
    pub fn from_unexpected(error: &anyhow::Error) -> Self {
        log::error!("Unexpected admin error: {:#}", error);
        Self::from_error(&AdminError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AdminError::Unauthorized.status_code(), 401);
        assert_eq!(AdminError::Forbidden.status_code(), 403);
        assert_eq!(
            AdminError::RateLimited {
                retry_after_seconds: 30
            }
            .status_code(),
            429
        );
        assert_eq!(AdminError::Internal.status_code(), 500);
    }

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success_with_message(serde_json::json!({"level": "info"}), "ok");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["level"], "info");
        assert_eq!(value["message"], "ok");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_rate_limited_envelope_carries_retry_after() {
        let body = ApiErrorResponse::from_error(&AdminError::RateLimited {
            retry_after_seconds: 42,
        });
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["details"]["retry_after"], 42);
    }

    #[test]
    fn test_internal_error_leaks_nothing() {
        let body = ApiErrorResponse::from_unexpected(&anyhow::anyhow!("db password was wrong"));
        assert_eq!(body.error, "internal error");
        assert!(body.details.is_none());
    }
}
