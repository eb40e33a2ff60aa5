use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid argument `{argument}`: {reason}")]
    Validation {
        argument: &'static str,
        reason: String,
    },

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: TransportError,
    },

    #[error("unsplash API error on {endpoint}: status code {}", .status.as_u16())]
    Upstream {
        endpoint: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("cancelled by caller")]
    Cancelled,
}

impl Error {
    pub(crate) fn missing(argument: &'static str) -> Self {
        Self::Validation {
            argument,
            reason: "missing or empty required parameter".to_string(),
        }
    }

    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            argument,
            reason: reason.into(),
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Validation { .. } => "validation",
            Self::Transport { .. } => "transport",
            Self::Upstream { .. } => "upstream",
            Self::Decode { .. } => "decode",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                source: TransportError::Cancelled,
                ..
            }
        )
    }
}
