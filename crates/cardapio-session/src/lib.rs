//! # cardapio-session: Session State for the Digital Menu
//!
//! Owns the per-user mutable state and the order hand-off flow, delegating
//! all business rules to `cardapio-core`.
//!
//! ## Design Notes
//!
//! - The session state is an **explicitly passed handle** ([`SessionState`]),
//!   owned by the top-level application object - never an ambient/global
//!   lookup. That keeps the whole core testable without UI scaffolding.
//! - The submit hand-off is a **strict causal sequence** under one lock:
//!   build the message from the in-hand snapshot, then reset. No timers, no
//!   propagation windows, no stale reads between "set payment method" and
//!   "build message".

pub mod catalog;
pub mod error;
pub mod state;

pub use catalog::{load_catalog, parse_catalog};
pub use error::CatalogError;
pub use state::{Session, SessionState};
