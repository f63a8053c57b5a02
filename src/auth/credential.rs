//! Credential types.

use secrecy::{ExposeSecret, SecretString};

/// Exa API key. `Debug` output is redacted.
#[derive(Clone, Debug)]
pub struct Credential {
    key: SecretString,
}

impl Credential {
    /// Create API key credential.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            key: SecretString::from(key.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.key.expose_secret().is_empty()
    }

    /// Value for the `x-api-key` header.
    pub fn expose(&self) -> &str {
        self.key.expose_secret()
    }
}

impl From<SecretString> for Credential {
    fn from(key: SecretString) -> Self {
        Self { key }
    }
}
