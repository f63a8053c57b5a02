//! Credential provider implementations.

mod chain;
mod environment;
mod explicit;

pub use chain::ChainProvider;
pub use environment::{DEFAULT_ENV_VAR, EnvironmentProvider};
pub use explicit::ExplicitProvider;
