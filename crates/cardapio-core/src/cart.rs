//! # Cart Module
//!
//! The shopping cart and its mutation operations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Operation               Cart Change           │
//! │  ───────────────          ─────────               ───────────           │
//! │                                                                         │
//! │  Tap menu item ──────────► add_item() ──────────► lines.push(line)     │
//! │                                                                         │
//! │  Change quantity ────────► set_quantity() ──────► line.quantity = n    │
//! │                                                    (n <= 0 removes)     │
//! │                                                                         │
//! │  Edit note ──────────────► set_note() ──────────► line.note = text     │
//! │                                                                         │
//! │  Tap remove ─────────────► remove_line() ───────► lines.retain(..)     │
//! │                                                                         │
//! │  Order sent ─────────────► clear() ─────────────► lines.clear()        │
//! │                                                                         │
//! │  NOTE: Mutations addressed at an unknown line id are silent no-ops.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lines Never Merge
//! Adding the same menu item twice produces two independent lines, each with
//! its own `line_id` and note. "Already in cart: N" badges come from
//! [`Cart::quantity_of`], which sums across lines sharing a catalog id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::{parse_price, Money};
use crate::types::CatalogItem;

// =============================================================================
// Cart Line
// =============================================================================

/// One purchasable entry in the cart.
///
/// ## Design Notes
/// - `catalog_id`: the menu item's identity (may repeat across lines)
/// - `line_id`: this line's own identity, generated at add-time
/// - The item fields are a snapshot: the cart keeps displaying consistent
///   data even if the catalog is edited after the item was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Unique per insertion (UUID v4). Never repeats within a cart.
    pub line_id: String,

    /// Catalog identity of the item this line was created from.
    pub catalog_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Display price text at time of adding (frozen), e.g. `"R$ 12,50"`.
    pub price: String,

    /// Item description at time of adding (frozen).
    pub description: String,

    /// Optional image reference at time of adding (frozen).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Quantity, always >= 1 while the line exists.
    pub quantity: i64,

    /// Free-text note for the kitchen ("sem cebola"). Mutable after adding.
    pub note: String,

    /// When this line was added. Diagnostic only; never reaches the
    /// order message, which must stay a pure function of cart + checkout.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a fresh line from a catalog item: quantity 1, empty note,
    /// newly generated `line_id`.
    fn from_item(item: &CatalogItem) -> Self {
        CartLine {
            line_id: Uuid::new_v4().to_string(),
            catalog_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            quantity: 1,
            note: String::new(),
            added_at: Utc::now(),
        }
    }

    /// The unit price parsed from the frozen display text.
    ///
    /// A malformed price is a catalog data-quality defect: it contributes
    /// zero and emits a warning, never a failure for the shopper.
    pub fn unit_price(&self) -> Money {
        match parse_price(&self.price) {
            Ok(money) => money,
            Err(err) => {
                warn!(
                    line_id = %self.line_id,
                    catalog_id = %self.catalog_id,
                    price = %self.price,
                    %err,
                    "treating malformed catalog price as zero"
                );
                Money::zero()
            }
        }
    }

    /// Line subtotal (unit price × quantity).
    pub fn line_subtotal(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - `line_id` is unique within the cart at all times
/// - Every stored line has quantity >= 1 (reducing to <= 0 removes the line)
/// - Catalog ids may repeat across lines (lines never merge)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a new line for the given catalog item and returns its
    /// freshly generated `line_id`.
    ///
    /// ## Behavior
    /// Always creates a new line - never merges with an existing line for
    /// the same catalog item. Two adds of the same burger are two lines, so
    /// each can carry its own note.
    pub fn add_item(&mut self, item: &CatalogItem) -> String {
        let line = CartLine::from_item(item);
        let line_id = line.line_id.clone();
        self.lines.push(line);
        line_id
    }

    /// Removes the line with the given id. Silent no-op if absent.
    pub fn remove_line(&mut self, line_id: &str) {
        self.lines.retain(|line| line.line_id != line_id);
    }

    /// Replaces a line's quantity.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`Cart::remove_line`]
    /// - Unknown `line_id`: silent no-op
    pub fn set_quantity(&mut self, line_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_line(line_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.line_id == line_id) {
            line.quantity = quantity;
        }
    }

    /// Replaces a line's note. Silent no-op if the line is absent.
    pub fn set_note(&mut self, line_id: &str, note: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.line_id == line_id) {
            line.note = note.to_string();
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines for one catalog item.
    ///
    /// Lines never merge, but the menu still shows a single
    /// "already in cart: N" badge per item - this is where N comes from.
    pub fn quantity_of(&self, catalog_id: &str) -> i64 {
        self.lines
            .iter()
            .filter(|line| line.catalog_id == catalog_id)
            .map(|line| line.quantity)
            .sum()
    }

    /// Cart subtotal: Σ (parsed unit price × quantity) over all lines.
    /// Malformed prices contribute zero (see [`CartLine::unit_price`]).
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_subtotal())
    }

    /// The cart's lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (not total quantity).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
