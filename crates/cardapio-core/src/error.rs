//! # Error Types
//!
//! Domain-specific error types for cardapio-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending price text, etc.)
//! 3. Errors are enum variants, never String
//!
//! ## A Deliberately Small Surface
//! This core is built so that almost nothing can fail at runtime:
//! - Cart mutations with an unknown line id are silent no-ops
//! - Building an order message for an empty cart yields `None`, not an error
//! - An incomplete checkout is detected through step predicates, not thrown
//!
//! The one genuine error is malformed catalog price data, and even that is
//! downgraded to a zero amount plus a logged diagnostic by the cart - the
//! typed error exists so the diagnostic can say exactly what was wrong.

use thiserror::Error;

// =============================================================================
// Price Error
// =============================================================================

/// A catalog price string that could not be parsed to a monetary amount.
///
/// ## When This Occurs
/// - A hand-edited catalog entry like `"preço sob consulta"` or `"12,5x"`
/// - A price accidentally left empty
///
/// ## Policy
/// This is a data-quality defect owned by the catalog collaborator. The cart
/// treats the amount as zero so the shopper is never blocked, and logs the
/// raw text so the catalog can be fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// The price text is not a plain non-negative decimal number.
    #[error("malformed catalog price: {raw:?}")]
    Malformed { raw: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_quotes_raw_text() {
        let err = PriceError::Malformed {
            raw: "12,5x".to_string(),
        };
        assert_eq!(err.to_string(), "malformed catalog price: \"12,5x\"");
    }
}
