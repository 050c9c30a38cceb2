//! Error types shared across YTP+ crates.

/// Top-level error type for YTP+ operations.
#[derive(Debug, thiserror::Error)]
pub enum YtpError {
    /// None of the candidate executables could be found on the search path.
    #[error("Tool not found: {message} (tried: {})", .tried.join(", "))]
    ToolNotFound { message: String, tried: Vec<String> },

    #[error("No inputs provided for {operation}")]
    EmptyInputs { operation: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using YtpError.
pub type YtpResult<T> = Result<T, YtpError>;

impl YtpError {
    pub fn tool_not_found(msg: impl Into<String>, tried: Vec<String>) -> Self {
        Self::ToolNotFound {
            message: msg.into(),
            tried,
        }
    }

    pub fn empty_inputs(operation: impl Into<String>) -> Self {
        Self::EmptyInputs {
            operation: operation.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    /// Whether this error means an external executable was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ToolNotFound { .. })
    }
}
