//! Host-level failures: what the host runtime would surface as an exception.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// The execution context was torn down before or during the call.
    #[error("execution context has been torn down")]
    ContextTornDown,

    /// A value had the wrong type or a call had too few arguments.
    #[error("TypeError: {message}")]
    TypeError { message: String },

    /// No export is registered under the requested name.
    #[error("module has no export named '{name}'")]
    UnknownExport { name: String },

    /// The module exports were already built.
    #[error("module is already initialized")]
    AlreadyInitialized,
}

impl HostError {
    pub fn type_error(message: impl Into<String>) -> Self {
        HostError::TypeError {
            message: message.into(),
        }
    }
}

/// Result type for calls across the host boundary.
pub type HostResult<T> = Result<T, HostError>;
