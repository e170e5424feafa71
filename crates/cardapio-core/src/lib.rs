//! # cardapio-core: Pure Business Logic for the Digital Menu
//!
//! This crate is the **heart** of the digital menu and ordering flow. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Cardápio Digital Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web menu)                          │   │
//! │  │    Menu UI ──► Cart UI ──► Checkout Wizard ──► "Send Order"    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  cardapio-session                               │   │
//! │  │    Session state handle, atomic submit hand-off, catalog load  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cardapio-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │ Catalog   │  │   Money   │  │   Cart    │  │  steps    │  │   │
//! │  │   │ Delivery  │  │ parse_    │  │ CartLine  │  │  gating   │  │   │
//! │  │   │ Payment   │  │  price    │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │   order   │                            │   │
//! │  │                        │ message + │                            │   │
//! │  │                        │ deep link │                            │   │
//! │  │                        └───────────┘                            │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, DeliveryOption, Address, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The shopping cart and its mutation operations
//! - [`checkout`] - Checkout state, setters, and step gating predicates
//! - [`order`] - Order message formatting and the WhatsApp deep link
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: The order message is deterministic - same cart and
//!    checkout state always produce the same bytes
//! 2. **No I/O**: Network, file system, and clock-dependent output are
//!    FORBIDDEN here (timestamps exist on cart lines but never reach the
//!    order message)
//! 3. **Integer Money**: All monetary values are in centavos (i64)
//! 4. **Silent-Safe Mutations**: Cart mutations with unknown line ids are
//!    no-ops, never errors - nothing in this core is fatal
//!
//! ## Example Usage
//!
//! ```rust
//! use cardapio_core::cart::Cart;
//! use cardapio_core::types::CatalogItem;
//!
//! let burger = CatalogItem {
//!     id: "x-burger".to_string(),
//!     name: "X-Burger".to_string(),
//!     price: "R$ 12,50".to_string(),
//!     description: "Pão, hambúrguer e queijo".to_string(),
//!     image: None,
//! };
//!
//! let mut cart = Cart::new();
//! let line_id = cart.add_item(&burger);
//! cart.set_quantity(&line_id, 2);
//!
//! // R$ 12,50 × 2 = 2500 centavos
//! assert_eq!(cart.subtotal().cents(), 2500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod order;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cardapio_core::Cart` instead of
// `use cardapio_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use checkout::{CheckoutState, CheckoutStep};
pub use error::PriceError;
pub use money::Money;
pub use order::{build_order_link, build_order_message, StoreConfig};
pub use types::{Address, Catalog, CatalogItem, Category, DeliveryOption, PaymentMethod};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat home-delivery fee in centavos (R$ 6,00).
///
/// ## Why a constant?
/// The fee is not independently settable: it is derived from the chosen
/// delivery option (non-zero iff home delivery) in the same assignment that
/// records the option, so no reader can ever observe the two out of sync.
pub const DELIVERY_FEE_CENTS: i64 = 600;
