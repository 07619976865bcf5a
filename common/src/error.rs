//! Socket option errors.
//!
//! Only two outcomes matter to callers: the OS does not know the option at
//! all, or the call failed for some other reason.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SocketError>;

#[derive(Debug, Error)]
pub enum SocketError {
    /// The option is not implemented by this OS/kernel, or the feature is a stub on this platform.
    #[error("unsupported socket option ({operation})")]
    Unsupported { operation: String },

    /// Any other OS level failure (bad handle, permissions, resource exhaustion, ...).
    #[error("{operation}: {source}")]
    OperationFailed {
        operation: String,
        #[source]
        source: io::Error,
    },
}

impl SocketError {
    pub fn unsupported(operation: impl Into<String>) -> Self {
        SocketError::Unsupported { operation: operation.into() }
    }

    pub fn failed(operation: impl Into<String>, source: io::Error) -> Self {
        SocketError::OperationFailed { operation: operation.into(), source }
    }

    /// `true` when the error denotes a capability gap rather than a hard failure.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, SocketError::Unsupported { .. })
    }

    /// Description of the attempted operation, e.g. `set option TCP_KEEPCNT` for a
    /// capability gap or `set option TCP_KEEPCNT failed` for a hard failure.
    pub fn operation(&self) -> &str {
        match self {
            SocketError::Unsupported { operation } => operation,
            SocketError::OperationFailed { operation, .. } => operation,
        }
    }
}
