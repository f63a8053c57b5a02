//! Credential resolution for the Exa API.
//!
//! A key is looked up once, when a [`Client`](crate::Client) is built:
//! an explicitly configured key wins, otherwise `EXA_API_KEY` is read.
//! Keys are kept in [`secrecy::SecretString`] and never logged.

mod credential;
mod provider;
mod providers;

pub use credential::Credential;
pub use provider::CredentialProvider;
pub use providers::{ChainProvider, DEFAULT_ENV_VAR, EnvironmentProvider, ExplicitProvider};

use secrecy::SecretString;

/// Default resolution order: the explicit key if one is given, then the
/// environment.
pub fn default_chain(explicit: Option<&SecretString>) -> ChainProvider {
    default_chain_with_var(explicit, DEFAULT_ENV_VAR)
}

/// Same order as [`default_chain`], reading `env_var` instead of
/// `EXA_API_KEY`.
pub fn default_chain_with_var(
    explicit: Option<&SecretString>,
    env_var: impl Into<String>,
) -> ChainProvider {
    let chain = ChainProvider::new(vec![]);
    let chain = match explicit {
        Some(key) => chain.with(ExplicitProvider::secret(key.clone())),
        None => chain,
    };
    chain.with(EnvironmentProvider::from_var(env_var))
}
