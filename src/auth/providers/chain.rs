//! Chain credential provider.

use crate::auth::{Credential, CredentialProvider};
use crate::{Error, Result};

/// Chain provider that tries multiple providers in order.
pub struct ChainProvider {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl ChainProvider {
    /// Create with specified providers.
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// Add a provider to the chain.
    pub fn with<P: CredentialProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl CredentialProvider for ChainProvider {
    fn name(&self) -> &str {
        "chain"
    }

    fn resolve(&self) -> Result<Credential> {
        let mut errors = Vec::new();

        for provider in &self.providers {
            match provider.resolve() {
                Ok(cred) => {
                    tracing::debug!("Credential resolved from: {}", provider.name());
                    return Ok(cred);
                }
                Err(e) => {
                    tracing::debug!("Provider {} failed: {}", provider.name(), e);
                    errors.push(format!("{}: {}", provider.name(), e));
                }
            }
        }

        Err(Error::Config(format!(
            "No credentials found. Tried: {}",
            errors.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{EnvironmentProvider, ExplicitProvider};

    #[test]
    fn test_chain_first_success() {
        let chain = ChainProvider::new(vec![])
            .with(ExplicitProvider::api_key("first"))
            .with(ExplicitProvider::api_key("second"));

        let cred = chain.resolve().unwrap();
        assert_eq!(cred.expose(), "first");
    }

    #[test]
    fn test_chain_skips_failing_provider() {
        let chain = ChainProvider::new(vec![])
            .with(ExplicitProvider::api_key(""))
            .with(ExplicitProvider::api_key("fallback"));

        let cred = chain.resolve().unwrap();
        assert_eq!(cred.expose(), "fallback");
    }

    #[test]
    fn test_chain_all_fail() {
        let chain = ChainProvider::new(vec![])
            .with(EnvironmentProvider::from_var("EXA_TEST_CHAIN_NOT_SET"));

        let err = chain.resolve().unwrap_err();
        assert!(err.to_string().contains("EXA_TEST_CHAIN_NOT_SET"));
        assert!(err.is_configuration_error());
    }
}
