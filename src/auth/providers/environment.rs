//! Environment variable credential provider.

use crate::auth::{Credential, CredentialProvider};
use crate::{Error, Result};

pub const DEFAULT_ENV_VAR: &str = "EXA_API_KEY";

/// Provider that reads API key from environment variable.
pub struct EnvironmentProvider {
    env_var: String,
}

impl EnvironmentProvider {
    /// Create provider using default EXA_API_KEY.
    pub fn new() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
        }
    }

    /// Create provider with custom environment variable.
    pub fn from_var(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for EnvironmentProvider {
    fn name(&self) -> &str {
        "environment"
    }

    fn resolve(&self) -> Result<Credential> {
        std::env::var(&self.env_var)
            .ok()
            .map(Credential::api_key)
            .filter(|cred| !cred.is_empty())
            .ok_or_else(|| Error::Config(format!("{} not set", self.env_var)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_provider_missing() {
        // SAFETY: Test-only environment setup, variable name unique to this test
        unsafe { std::env::remove_var("EXA_TEST_KEY_NOT_SET") };
        let provider = EnvironmentProvider::from_var("EXA_TEST_KEY_NOT_SET");
        assert!(provider.resolve().is_err());
    }

    #[test]
    fn test_environment_provider_set() {
        // SAFETY: Test-only environment setup, variable name unique to this test
        unsafe { std::env::set_var("EXA_TEST_KEY_SET", "test-key") };
        let provider = EnvironmentProvider::from_var("EXA_TEST_KEY_SET");
        let cred = provider.resolve().unwrap();
        assert_eq!(cred.expose(), "test-key");
        unsafe { std::env::remove_var("EXA_TEST_KEY_SET") };
    }

    #[test]
    fn test_environment_provider_empty_value() {
        // SAFETY: Test-only environment setup, variable name unique to this test
        unsafe { std::env::set_var("EXA_TEST_KEY_EMPTY", "") };
        let provider = EnvironmentProvider::from_var("EXA_TEST_KEY_EMPTY");
        assert!(provider.resolve().is_err());
        unsafe { std::env::remove_var("EXA_TEST_KEY_EMPTY") };
    }

    #[test]
    fn test_default_var_name() {
        assert_eq!(EnvironmentProvider::new().env_var(), "EXA_API_KEY");
    }
}
