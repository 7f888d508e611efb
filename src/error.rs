//! Error taxonomy for the wisdom engine and its tool-call protocol

use thiserror::Error;

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, WisdomError>;

/// Errors surfaced to callers as `{id, error: {code, message}}`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WisdomError {
    #[error("Malformed request: {0}")]
    ProtocolDecode(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid params for {tool}: {message}")]
    InvalidParams { tool: String, message: String },

    #[error("Wisdom engine not initialized")]
    EngineNotInitialized,

    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("No advisor for {kind}: {value}")]
    UnknownContext { kind: String, value: String },

    #[error("Invalid score {0}: must be a finite number between 0 and 100")]
    InvalidScore(f64),

    #[error("Invalid timestamp {value:?}: expected RFC 3339 or YYYY-MM-DD")]
    InvalidTimestamp { value: String },

    #[error("Engine lock poisoned")]
    LockPoisoned,

    #[error("Failed to encode result: {0}")]
    Encode(String),
}

impl WisdomError {
    /// Stable code written into protocol error responses
    pub fn code(&self) -> &'static str {
        match self {
            WisdomError::ProtocolDecode(_) => "ProtocolDecodeError",
            WisdomError::UnknownTool(_) => "UnknownTool",
            WisdomError::InvalidParams { .. } | WisdomError::InvalidTimestamp { .. } => {
                "InvalidParams"
            }
            WisdomError::EngineNotInitialized => "EngineNotInitialized",
            WisdomError::UnknownSource(_) => "UnknownSource",
            WisdomError::UnknownContext { .. } => "UnknownContext",
            WisdomError::InvalidScore(_) => "InvalidScore",
            WisdomError::LockPoisoned | WisdomError::Encode(_) => "Internal",
        }
    }
}
