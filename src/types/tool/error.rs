//! Tool error types.

use thiserror::Error;

/// Failure reported through the tool surface.
///
/// Unlike [`crate::Error`] this is `Clone` and carries only messages, so it
/// can be handed to an agent loop and stored alongside the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("network request failed: {message}")]
    Transport { message: String },

    #[error("Exa API error: {status} - {body}")]
    Remote { status: u16, body: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

impl ToolError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<crate::Error> for ToolError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::Config(message) => Self::configuration(message),
            crate::Error::InvalidInput(message) => Self::invalid_input(message),
            crate::Error::Network(e) => Self::transport(e.to_string()),
            crate::Error::Api { status, body } => Self::remote(status, body),
            crate::Error::Decode(e) => Self::decode(e.to_string()),
        }
    }
}
