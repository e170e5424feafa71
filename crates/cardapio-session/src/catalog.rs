//! # Catalog Loading
//!
//! The menu catalog is a static, read-only JSON document: ordered categories,
//! each an ordered sequence of items. This module is the one place the
//! system touches the file system; everything downstream consumes the typed
//! [`Catalog`] and never mutates it.
//!
//! ## Expected Shape
//! ```json
//! {
//!   "categories": [
//!     {
//!       "name": "Hambúrgueres",
//!       "items": [
//!         {
//!           "id": "x-burger",
//!           "name": "X-Burger",
//!           "price": "R$ 12,50",
//!           "description": "Pão, hambúrguer e queijo",
//!           "image": "/imagens/x-burger.jpg"
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use cardapio_core::types::Catalog;

use crate::error::CatalogError;

/// Parses a catalog from a JSON string.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_str(json)?;
    debug!(
        categories = catalog.categories.len(),
        items = catalog
            .categories
            .iter()
            .map(|c| c.items.len())
            .sum::<usize>(),
        "catalog parsed"
    );
    Ok(catalog)
}

/// Loads a catalog from a JSON file on disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let json = fs::read_to_string(path)?;
    parse_catalog(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "categories": [
            {
                "name": "Hambúrgueres",
                "items": [
                    {
                        "id": "x-burger",
                        "name": "X-Burger",
                        "price": "R$ 12,50",
                        "description": "Pão, hambúrguer e queijo"
                    },
                    {
                        "id": "x-bacon",
                        "name": "X-Bacon",
                        "price": "R$ 15,00",
                        "description": "Com bacon crocante",
                        "image": "/imagens/x-bacon.jpg"
                    }
                ]
            },
            {
                "name": "Bebidas",
                "items": [
                    {
                        "id": "refri-lata",
                        "name": "Refrigerante Lata",
                        "price": "R$ 5,00",
                        "description": "350ml"
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_catalog_preserves_order() {
        let catalog = parse_catalog(SAMPLE).unwrap();

        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[0].name, "Hambúrgueres");
        assert_eq!(catalog.categories[0].items[1].id, "x-bacon");
        assert_eq!(
            catalog.categories[0].items[1].image.as_deref(),
            Some("/imagens/x-bacon.jpg")
        );
        assert_eq!(catalog.categories[1].items[0].price, "R$ 5,00");
    }

    #[test]
    fn test_parse_catalog_rejects_garbage() {
        assert!(matches!(
            parse_catalog("not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            parse_catalog(r#"{"categories": "nope"}"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_catalog_missing_file_is_io_error() {
        let err = load_catalog("/definitely/not/here/menu.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
