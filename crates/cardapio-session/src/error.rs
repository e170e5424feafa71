//! # Error Types
//!
//! Errors at the session boundary. The core itself is silent-safe (see
//! `cardapio_core::error`); what can genuinely fail out here is reading and
//! parsing the catalog document.

use thiserror::Error;

/// Failure to load the menu catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document is not valid JSON for the expected shape.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
