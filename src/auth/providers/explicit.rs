//! Explicit credential provider.

use secrecy::SecretString;

use crate::auth::{Credential, CredentialProvider};
use crate::{Error, Result};

/// Provider with an explicitly configured key.
pub struct ExplicitProvider {
    credential: Credential,
}

impl ExplicitProvider {
    /// Create with credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Create with API key.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::new(Credential::api_key(key))
    }

    pub fn secret(key: SecretString) -> Self {
        Self::new(Credential::from(key))
    }
}

impl CredentialProvider for ExplicitProvider {
    fn name(&self) -> &str {
        "explicit"
    }

    fn resolve(&self) -> Result<Credential> {
        if self.credential.is_empty() {
            return Err(Error::Config("explicit API key is empty".into()));
        }
        Ok(self.credential.clone())
    }
}
