use thiserror::Error;

/// Error returned by module runtimes and the proxies built on them.
#[derive(Debug, Error)]
pub enum InteropError {
    /// The runtime could not load the script module.
    #[error("failed to load module '{path}': {message}")]
    ModuleLoad { path: String, message: String },

    /// The invoked script function failed.
    #[error("call to '{path}' failed: {message}")]
    Invocation { path: String, message: String },

    /// The connection to the script host is already gone.
    #[error("script host disconnected: {message}")]
    Disconnected { message: String },

    /// An argument could not be converted to a wire value.
    #[error("failed to serialize argument: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A result could not be converted from its wire value.
    #[error("failed to deserialize result of '{path}': {source}")]
    Deserialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A scope was asked for a service nobody registered.
    #[error("no service registered for {service}")]
    NotRegistered { service: &'static str },
}

impl InteropError {
    pub fn disconnected(message: impl Into<String>) -> Self {
        Self::Disconnected {
            message: message.into(),
        }
    }

    pub fn invocation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invocation {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::Disconnected { .. })
    }
}

/// Result type every bound trait member returns.
pub type InteropResult<T> = Result<T, InteropError>;
