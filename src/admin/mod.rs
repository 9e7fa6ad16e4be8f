//! Admin control plane: runtime log-level configuration guarded by bearer
//! auth, an origin allow-list, and a sliding-window rate limiter.
//!
//! The HTTP transport is out of scope here; this module carries the request
//! flow (origin check, auth, rate limit, operation, envelope) so a hosting
//! transport only maps verbs and serializes the envelopes.

mod auth;
mod health;
mod log_level;
mod rate_limit;
mod response;

pub use auth::{parse_bearer, AdminAuth};
pub use health::{snapshot, HealthSnapshot, SystemInfo};
pub use log_level::{LogLevel, LogLevelConfig, LogLevelPatch, LogLevelStore};
pub use rate_limit::{fingerprint, RateLimitDecision, RateLimiter};
pub use response::{AdminError, ApiErrorResponse, ApiResponse};

use crate::config::AdminSettings;

/// Metadata a transport extracts from an incoming request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub authorization: Option<&'a str>,
    pub origin: Option<&'a str>,
    pub ip: &'a str,
    pub user_agent: &'a str,
}

pub struct AdminApi {
    auth: AdminAuth,
    limiter: RateLimiter,
    store: LogLevelStore,
}

impl AdminApi {
    pub fn new(settings: &AdminSettings, default_level: LogLevel) -> Self {
        Self {
            auth: AdminAuth::from_settings(settings),
            limiter: RateLimiter::from_settings(&settings.rate_limit),
            store: LogLevelStore::new(default_level),
        }
    }

    /// GET /log-level
    pub fn get(&self, ctx: &RequestContext<'_>) -> Result<ApiResponse<LogLevelConfig>, AdminError> {
        self.guard(ctx)?;
        Ok(ApiResponse::success(self.store.current()))
    }

    /// POST /log-level
    pub fn set(
        &self,
        ctx: &RequestContext<'_>,
        config: LogLevelConfig,
    ) -> Result<ApiResponse<LogLevelConfig>, AdminError> {
        self.guard(ctx)?;
        let applied = self.store.replace(config);
        Ok(ApiResponse::success_with_message(
            applied,
            "log level configuration replaced",
        ))
    }

    /// PATCH /log-level
    pub fn patch(
        &self,
        ctx: &RequestContext<'_>,
        patch: LogLevelPatch,
    ) -> Result<ApiResponse<LogLevelConfig>, AdminError> {
        self.guard(ctx)?;
        let applied = self.store.merge(patch);
        Ok(ApiResponse::success_with_message(
            applied,
            "log level configuration updated",
        ))
    }

    /// DELETE /log-level
    pub fn reset(&self, ctx: &RequestContext<'_>) -> Result<ApiResponse<LogLevelConfig>, AdminError> {
        self.guard(ctx)?;
        let applied = self.store.reset();
        Ok(ApiResponse::success_with_message(
            applied,
            "log level configuration reset",
        ))
    }

    pub fn store(&self) -> &LogLevelStore {
        &self.store
    }

    fn guard(&self, ctx: &RequestContext<'_>) -> Result<(), AdminError> {
        self.auth.check_origin(ctx.origin)?;
        self.auth.authorize(ctx.authorization)?;
        self.limiter
            .check(&fingerprint(ctx.ip, ctx.user_agent))
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateLimitSettings;

    fn settings() -> AdminSettings {
        AdminSettings {
            api_keys: vec!["secret".into()],
            allowed_origins: vec!["https://app.example.com".into()],
            rate_limit: RateLimitSettings {
                max_requests: 2,
                window_seconds: 60,
            },
        }
    }

    fn authed<'a>() -> RequestContext<'a> {
        RequestContext {
            authorization: Some("Bearer secret"),
            origin: Some("https://app.example.com"),
            ip: "127.0.0.1",
            user_agent: "test",
        }
    }

    #[test]
    fn test_get_requires_auth() {
        let api = AdminApi::new(&settings(), LogLevel::Info);
        let ctx = RequestContext {
            authorization: None,
            ..authed()
        };
        assert_eq!(api.get(&ctx).unwrap_err(), AdminError::Unauthorized);
    }

    #[test]
    fn test_disallowed_origin_is_forbidden() {
        let api = AdminApi::new(&settings(), LogLevel::Info);
        let ctx = RequestContext {
            origin: Some("https://evil.example"),
            ..authed()
        };
        assert_eq!(api.get(&ctx).unwrap_err(), AdminError::Forbidden);
    }

    #[test]
    fn test_full_verb_cycle() {
        let limiter_settings = AdminSettings {
            rate_limit: RateLimitSettings {
                max_requests: 100,
                window_seconds: 60,
            },
            ..settings()
        };
        let api = AdminApi::new(&limiter_settings, LogLevel::Info);
        let ctx = authed();

        let current = api.get(&ctx).unwrap();
        assert_eq!(current.data.unwrap().global, LogLevel::Info);

        api.patch(
            &ctx,
            LogLevelPatch {
                global: Some(LogLevel::Debug),
                overrides: Default::default(),
            },
        )
        .unwrap();
        assert_eq!(api.store().current().global, LogLevel::Debug);

        let reset = api.reset(&ctx).unwrap();
        assert_eq!(reset.data.unwrap().global, LogLevel::Info);
    }

    #[test]
    fn test_rate_limit_applies_after_auth() {
        let api = AdminApi::new(&settings(), LogLevel::Info);
        let ctx = authed();
        api.get(&ctx).unwrap();
        api.get(&ctx).unwrap();
        match api.get(&ctx) {
            Err(AdminError::RateLimited { .. }) => {}
            other => panic!("expected rate limit, got {:?}", other),
        }
    }
}
