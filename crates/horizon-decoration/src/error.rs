//! Error types for Horizon Decoration.
//!
//! Interactive operations on buttons and groups never fail: invalid calls are
//! ignored. Errors only come from parsing button layout configuration.

/// Result type alias for decoration operations.
pub type Result<T> = std::result::Result<T, DecorationError>;

/// Errors that can occur while loading decoration configuration.
#[derive(Debug, thiserror::Error)]
pub enum DecorationError {
    /// A button layout string contained a character that names no button.
    #[error("Unknown button code '{code}' in layout \"{layout}\"")]
    UnknownButtonCode { code: char, layout: String },

    /// The configuration document could not be parsed.
    #[error("Invalid decoration configuration: {0}")]
    Config(#[from] toml::de::Error),
}
