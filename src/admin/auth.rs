//! Bearer-token and origin checks for the admin surface.

use super::response::AdminError;
use crate::config::AdminSettings;

#[derive(Debug, Clone)]
pub struct AdminAuth {
    api_keys: Vec<String>,
    allowed_origins: Vec<String>,
}

impl AdminAuth {
    pub fn new(api_keys: Vec<String>, allowed_origins: Vec<String>) -> Self {
        Self {
            api_keys,
            allowed_origins,
        }
    }

    pub fn from_settings(settings: &AdminSettings) -> Self {
        Self::new(settings.api_keys.clone(), settings.allowed_origins.clone())
    }

    /// Validate an `Authorization` header value against the key allow-list.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<(), AdminError> {
        let token = authorization
            .and_then(parse_bearer)
            .ok_or(AdminError::Unauthorized)?;

        // Check every key so timing does not reveal which prefix matched
        let mut matched = false;
        for key in &self.api_keys {
            matched |= constant_time_eq(key.as_bytes(), token.as_bytes());
        }
        if matched {
            Ok(())
        } else {
            Err(AdminError::Unauthorized)
        }
    }

    /// Validate a request origin against the allow-list. A request without
    /// an origin (same-origin or CLI caller) is allowed.
    pub fn check_origin(&self, origin: Option<&str>) -> Result<(), AdminError> {
        match origin {
            None => Ok(()),
            Some(origin) if self.allowed_origins.iter().any(|o| o == origin) => Ok(()),
            Some(_) => Err(AdminError::Forbidden),
        }
    }
}

/// Extract the token from a `Bearer <token>` header value.
pub fn parse_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Byte comparison without early exit on mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
