//! Unified error types for glyph encoding and editing

use thiserror::Error;

/// Main error type for conlang_glyph operations
#[derive(Debug, Error)]
pub enum GlyphError {
    // === Decoding Errors ===
    #[error("Invalid row token: '{token}'")]
    InvalidRowToken { token: String },

    #[error("Glyph size mismatch: expected {expected} cells, got {actual}")]
    InvalidGlyphSize { expected: usize, actual: usize },

    #[error("Malformed run-length segment: '{segment}'")]
    MalformedRunLength { segment: String },

    #[error("Invalid glyph payload: {message}")]
    InvalidPayload { message: String },

    // === Editor Errors ===
    #[error("Invalid resolution {resolution} (1..={max})", max = crate::MAX_RESOLUTION)]
    InvalidResolution { resolution: usize },

    // === Document Errors ===
    #[error("No {kind} at index {index}")]
    UnknownEntry { kind: &'static str, index: usize },

    // === External Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// Result type alias for conlang_glyph operations
pub type Result<T> = std::result::Result<T, GlyphError>;

impl GlyphError {
    /// Create a payload error from any displayable type
    pub fn payload(msg: impl std::fmt::Display) -> Self {
        Self::InvalidPayload { message: msg.to_string() }
    }

    /// True for errors caused by a corrupt glyph string (as opposed to I/O or config problems)
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRowToken { .. } | Self::InvalidGlyphSize { .. } | Self::MalformedRunLength { .. } | Self::InvalidPayload { .. }
        )
    }
}
