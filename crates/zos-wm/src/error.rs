//! Error types for the window layer
//!
//! The window operations themselves never fail: unknown ids are ignored,
//! malformed geometry is replaced and out-of-range geometry is clamped.
//! Errors only arise where the host hands us strings or persisted data.

/// Errors raised at the host-facing parsing and persistence edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmError {
    /// A window kind id that does not name any known kind
    UnknownWindowKind(String),

    /// A resize handle direction that is not one of n, s, e, w, ne, nw, se, sw
    InvalidResizeDirection(String),

    /// A configuration value is outside its valid range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),

    /// The preference store rejected a read or write
    PreferenceError(String),
}

impl std::fmt::Display for WmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWindowKind(kind) => write!(f, "unknown window kind: {}", kind),
            Self::InvalidResizeDirection(dir) => {
                write!(f, "invalid resize direction: {}", dir)
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Self::PreferenceError(msg) => write!(f, "preference error: {}", msg),
        }
    }
}

impl std::error::Error for WmError {}

impl From<serde_json::Error> for WmError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for window layer operations
pub type WmResult<T> = Result<T, WmError>;
