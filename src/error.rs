//! Error types for the storefront chat assistant
//!
//! Classification itself never fails; these cover startup concerns only
//! (configuration and catalog loading).

use thiserror::Error;

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

#[derive(Error, Debug)]
pub enum AssistantError {

    // =============================
    // Startup Errors
    // =============================

    #[error("Invalid keyword catalog: {0}")]
    CatalogError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
