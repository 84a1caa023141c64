use core_config::{ConfigError, FromEnv, env_optional};
use std::fmt;
use std::sync::Arc;

use crate::errors::AppError;

/// Request header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Message returned for every rejected key.
pub const INVALID_API_KEY: &str = "Invalid or missing API key";

/// Shared-secret gate for mutating routes.
///
/// Loaded from environment variables:
/// - `API_KEY` (optional) - when unset, every authenticated request is rejected
#[derive(Clone, Default)]
pub struct ApiKeyAuth {
    secret: Option<Arc<str>>,
}

impl ApiKeyAuth {
    pub fn new(secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self {
            secret: (!secret.is_empty()).then(|| Arc::from(secret)),
        }
    }

    /// A gate with no configured secret; it rejects everything.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Checks a caller-supplied key against the configured secret.
    pub fn authenticate(&self, provided: Option<&str>) -> Result<(), AppError> {
        match (provided, self.secret.as_deref()) {
            (Some(provided), Some(secret)) if provided == secret => Ok(()),
            _ => Err(AppError::Auth(INVALID_API_KEY.to_string())),
        }
    }
}

impl FromEnv for ApiKeyAuth {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(env_optional("API_KEY").map(Self::new).unwrap_or_default())
    }
}

// Keep the secret out of logs.
impl fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("configured", &self.is_configured())
            .finish()
    }
}
