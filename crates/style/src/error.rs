use thiserror::Error;

/// Errors raised while loading a theme.
#[derive(Error, Debug)]
pub enum StyleParseError {
    #[error("Theme JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}
