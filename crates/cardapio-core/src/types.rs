//! # Domain Types
//!
//! Core domain types for the digital menu and ordering flow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CatalogItem   │   │ DeliveryOption  │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (catalog)   │   │  DineIn         │   │  Cash           │       │
//! │  │  name           │   │  Takeaway       │   │  Card           │       │
//! │  │  price (text!)  │   │  Delivery       │   └─────────────────┘       │
//! │  │  description    │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  Catalog ──► Category ──► CatalogItem       Address (delivery only)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A menu item's `id` is its *catalog* identity. A cart line gets its own
//! `line_id` at add-time (see [`crate::cart::CartLine`]) because the same
//! catalog item may sit in the cart as several independent lines, each with
//! its own note.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::DELIVERY_FEE_CENTS;

// =============================================================================
// Catalog
// =============================================================================

/// A menu item as supplied by the catalog collaborator. Read-only input;
/// this core never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Catalog identifier (may repeat across cart lines).
    pub id: String,

    /// Display name shown on the menu and in the order message.
    pub name: String,

    /// Display-formatted price text, e.g. `"R$ 12,50"`.
    ///
    /// Kept as text: the order message echoes it verbatim per item, and the
    /// numeric value is derived on demand by [`crate::money::parse_price`].
    pub price: String,

    /// Item description shown on the menu.
    pub description: String,

    /// Optional image reference for the menu card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// An ordered group of menu items under one heading ("Hambúrgueres",
/// "Bebidas", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub items: Vec<CatalogItem>,
}

/// The whole menu: an ordered collection of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub categories: Vec<Category>,
}

// =============================================================================
// Delivery Option
// =============================================================================

/// How the customer wants to receive the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DeliveryOption {
    /// Eat at the restaurant.
    #[serde(rename = "local")]
    DineIn,
    /// Pick up at the counter and take away.
    #[serde(rename = "retirada")]
    Takeaway,
    /// Home delivery (incurs the flat shipping fee).
    #[serde(rename = "delivery")]
    Delivery,
}

impl DeliveryOption {
    /// The label used in the outbound order message.
    pub const fn label(&self) -> &'static str {
        match self {
            DeliveryOption::DineIn => "local",
            DeliveryOption::Takeaway => "retirada",
            DeliveryOption::Delivery => "delivery",
        }
    }

    /// The shipping fee this option implies: the flat fee for home delivery,
    /// zero otherwise. Derived, never independently settable.
    pub const fn shipping_fee(&self) -> Money {
        match self {
            DeliveryOption::Delivery => Money::from_cents(DELIVERY_FEE_CENTS),
            _ => Money::zero(),
        }
    }
}

impl fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer will pay on delivery/pickup. There is no payment capture
/// in this system; the method only informs the restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Physical cash (may need change, see `change_for`).
    #[serde(rename = "dinheiro")]
    Cash,
    /// Card on the portable terminal at hand-off.
    #[serde(rename = "cartao")]
    Card,
}

impl PaymentMethod {
    /// The label used in the outbound order message.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "dinheiro",
            PaymentMethod::Card => "cartao",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Address
// =============================================================================

/// A delivery address, required only when the delivery option is home
/// delivery. `complement` and `landmark` are optional helper lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
