//! Credential provider trait.

use super::Credential;
use crate::Result;

/// Trait for resolving credentials from various sources.
///
/// Resolution runs once, when a client is built; the result is immutable for
/// the lifetime of that client.
pub trait CredentialProvider: Send + Sync {
    /// Provider name for debugging.
    fn name(&self) -> &str;

    /// Resolve credential from this provider.
    fn resolve(&self) -> Result<Credential>;
}
