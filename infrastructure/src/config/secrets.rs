//! Instructor unlock code resolution
//!
//! The code is resolved once at startup: the config file value wins,
//! then the `INSTRUCTOR_UNLOCK_CODE` environment variable. Empty
//! strings count as unconfigured. With no code anywhere, the
//! instructor unlock is disabled for the whole session.

use casewalk_application::SecretSource;
use tracing::debug;

pub const UNLOCK_CODE_ENV: &str = "INSTRUCTOR_UNLOCK_CODE";

/// Secret source backed by config plus the process environment.
#[derive(Debug, Clone)]
pub struct EnvSecretSource {
    configured: Option<String>,
}

impl EnvSecretSource {
    /// Resolve the unlock code from the config value, falling back to
    /// the environment.
    pub fn new(config_code: Option<String>) -> Self {
        let configured = config_code
            .filter(|code| !code.is_empty())
            .or_else(|| std::env::var(UNLOCK_CODE_ENV).ok().filter(|code| !code.is_empty()));

        debug!(configured = configured.is_some(), "instructor unlock code resolved");
        Self { configured }
    }
}

impl SecretSource for EnvSecretSource {
    fn unlock_code(&self) -> Option<String> {
        self.configured.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_value_wins() {
        let source = EnvSecretSource::new(Some("from-config".to_string()));
        assert_eq!(source.unlock_code().as_deref(), Some("from-config"));
    }

    #[test]
    fn test_empty_config_value_counts_as_unconfigured() {
        // No env var set in tests, so an empty config value disables unlock.
        let source = EnvSecretSource {
            configured: Some(String::new()).filter(|c| !c.is_empty()),
        };
        assert!(source.unlock_code().is_none());
    }
}
