//! # Session State
//!
//! The process-wide state container for one user session: one cart plus one
//! checkout state, held in memory only and reset on full reload.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>`:
//! 1. The session is interactive - a single logical mutator at a time
//! 2. The handle is cheap to clone and explicitly passed to whoever needs it
//! 3. Holding the lock across the whole submit sequence is what makes the
//!    hand-off atomic: the link is always built from the complete state
//!
//! ## Hand-Off Sequencing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    submit_order()                                       │
//! │                                                                         │
//! │   lock ──► build link from current snapshot ──┬── Some(link)            │
//! │                                               │      │                  │
//! │                                               │      ▼                  │
//! │                                               │   clear cart            │
//! │                                               │   reset checkout        │
//! │                                               │      │                  │
//! │                                               │      ▼                  │
//! │                                               │   unlock, return link   │
//! │                                               │                         │
//! │                                               └── None (empty cart)     │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                                   unlock, NO reset      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use cardapio_core::cart::{Cart, CartLine};
use cardapio_core::checkout::{CheckoutState, CheckoutStep};
use cardapio_core::order::{build_order_link, StoreConfig};
use cardapio_core::types::{Address, CatalogItem, DeliveryOption, PaymentMethod};
use cardapio_core::Money;

// =============================================================================
// Session
// =============================================================================

/// One user session's state: the cart and the checkout wizard record.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub cart: Cart,
    pub checkout: CheckoutState,
}

impl Session {
    /// Creates a fresh session: empty cart, all checkout fields unset.
    pub fn new() -> Self {
        Session::default()
    }
}

// =============================================================================
// Session State Handle
// =============================================================================

/// Shared handle to one session's state.
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them mutate. A Mutex keeps the
/// sequencing story simple: every mutation is fully applied and visible to
/// the very next read - no batching window, no eventual consistency.
#[derive(Debug, Clone)]
pub struct SessionState {
    inner: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a new empty session state.
    pub fn new() -> Self {
        SessionState {
            inner: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.inner.lock().expect("session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.inner.lock().expect("session mutex poisoned");
        f(&mut session)
    }

    // -------------------------------------------------------------------------
    // Cart Operations
    // -------------------------------------------------------------------------

    /// Adds a catalog item as a new cart line and returns its `line_id`.
    pub fn add_item(&self, item: &CatalogItem) -> String {
        debug!(catalog_id = %item.id, "add_item");
        self.with_session_mut(|s| s.cart.add_item(item))
    }

    /// Removes a cart line. No-op if absent.
    pub fn remove_line(&self, line_id: &str) {
        debug!(%line_id, "remove_line");
        self.with_session_mut(|s| s.cart.remove_line(line_id));
    }

    /// Sets a line's quantity (<= 0 removes it). No-op if absent.
    pub fn set_quantity(&self, line_id: &str, quantity: i64) {
        debug!(%line_id, quantity, "set_quantity");
        self.with_session_mut(|s| s.cart.set_quantity(line_id, quantity));
    }

    /// Sets a line's note. No-op if absent.
    pub fn set_note(&self, line_id: &str, note: &str) {
        debug!(%line_id, "set_note");
        self.with_session_mut(|s| s.cart.set_note(line_id, note));
    }

    /// Empties the cart.
    pub fn clear_cart(&self) {
        debug!("clear_cart");
        self.with_session_mut(|s| s.cart.clear());
    }

    /// Snapshot of the cart lines, in insertion order.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.with_session(|s| s.cart.lines().to_vec())
    }

    /// Total quantity in the cart for one catalog item ("already in
    /// cart: N" badge).
    pub fn quantity_of(&self, catalog_id: &str) -> i64 {
        self.with_session(|s| s.cart.quantity_of(catalog_id))
    }

    /// Current cart subtotal.
    pub fn cart_subtotal(&self) -> Money {
        self.with_session(|s| s.cart.subtotal())
    }

    // -------------------------------------------------------------------------
    // Checkout Operations
    // -------------------------------------------------------------------------

    /// Records the delivery option. The shipping fee is re-derived inside
    /// the same locked mutation, so no reader ever sees them disagree.
    pub fn set_delivery_option(&self, option: DeliveryOption) {
        debug!(option = %option, "set_delivery_option");
        self.with_session_mut(|s| s.checkout.set_delivery_option(option));
    }

    pub fn set_customer_name(&self, name: &str) {
        self.with_session_mut(|s| s.checkout.set_customer_name(name));
    }

    pub fn set_customer_phone(&self, phone: &str) {
        self.with_session_mut(|s| s.checkout.set_customer_phone(phone));
    }

    pub fn set_customer_address(&self, address: Address) {
        self.with_session_mut(|s| s.checkout.set_customer_address(address));
    }

    /// Records the payment method. Choosing card also clears any previously
    /// entered change-for value, mirroring the payment screen's behavior.
    pub fn choose_payment_method(&self, method: PaymentMethod) {
        debug!(method = %method, "choose_payment_method");
        self.with_session_mut(|s| {
            if method == PaymentMethod::Card {
                s.checkout.set_change_for("");
            }
            s.checkout.set_payment_method(method);
        });
    }

    pub fn set_change_for(&self, value: &str) {
        self.with_session_mut(|s| s.checkout.set_change_for(value));
    }

    /// Abandons the checkout: every wizard field back to its initial form.
    /// The cart is left untouched.
    pub fn reset_checkout(&self) {
        debug!("reset_checkout");
        self.with_session_mut(|s| s.checkout.reset());
    }

    /// Snapshot of the full checkout state.
    pub fn checkout(&self) -> CheckoutState {
        self.with_session(|s| s.checkout.clone())
    }

    /// The first wizard step with an unsatisfied requirement, for the
    /// routing layer's redirect policy.
    pub fn first_unsatisfied_step(&self) -> Option<CheckoutStep> {
        self.with_session(|s| s.checkout.first_unsatisfied_step())
    }

    /// Whether the submit step is reachable.
    pub fn can_submit(&self) -> bool {
        self.with_session(|s| s.checkout.can_submit())
    }

    // -------------------------------------------------------------------------
    // Hand-Off
    // -------------------------------------------------------------------------

    /// Builds the order link from the current state and, on success, resets
    /// the session - all under one lock.
    ///
    /// ## Sequencing Guarantee
    /// The link is built from the pre-reset snapshot, and the reset happens
    /// before the lock is released: every mutation requested before this
    /// call is observed by the link build, and no reset occurs when the
    /// build fails (empty cart). The caller dispatches the returned link.
    pub fn submit_order(&self, store: &StoreConfig) -> Option<String> {
        self.with_session_mut(|s| {
            let link = build_order_link(&s.cart, &s.checkout, store);
            match link {
                Some(link) => {
                    info!(lines = s.cart.line_count(), "order handed off, resetting session");
                    s.cart.clear();
                    s.checkout.reset();
                    Some(link)
                }
                None => {
                    debug!("submit_order on empty cart, nothing dispatched");
                    None
                }
            }
        })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> CatalogItem {
        CatalogItem {
            id: "burger".to_string(),
            name: "Burger".to_string(),
            price: "R$ 12,00".to_string(),
            description: String::new(),
            image: None,
        }
    }

    fn filled_session() -> SessionState {
        let state = SessionState::new();
        let line_id = state.add_item(&burger());
        state.set_quantity(&line_id, 2);
        state.set_delivery_option(DeliveryOption::Delivery);
        state.set_customer_name("Ana");
        state.set_customer_phone("11999999999");
        state.set_customer_address(Address {
            street: "Rua A".to_string(),
            number: "10".to_string(),
            complement: None,
            landmark: None,
        });
        state.choose_payment_method(PaymentMethod::Cash);
        state.set_change_for("50,00");
        state
    }

    #[test]
    fn test_mutation_visible_to_next_read() {
        let state = SessionState::new();
        let line_id = state.add_item(&burger());

        // No batching window: the very next read observes the mutation.
        assert_eq!(state.quantity_of("burger"), 1);
        state.set_quantity(&line_id, 5);
        assert_eq!(state.quantity_of("burger"), 5);
        assert_eq!(state.cart_subtotal().cents(), 6000);
    }

    #[test]
    fn test_submit_resets_cart_and_checkout() {
        let state = filled_session();
        assert!(state.can_submit());

        let link = state.submit_order(&StoreConfig::default());
        assert!(link.is_some());

        // After a successful hand-off the session is back to its initial form.
        assert!(state.cart_lines().is_empty());
        assert_eq!(state.checkout(), CheckoutState::new());
    }

    #[test]
    fn test_submit_on_empty_cart_does_not_reset_checkout() {
        let state = SessionState::new();
        state.set_delivery_option(DeliveryOption::Takeaway);
        state.set_customer_name("Ana");

        assert_eq!(state.submit_order(&StoreConfig::default()), None);

        // Failed build: checkout state survives untouched.
        let checkout = state.checkout();
        assert_eq!(checkout.delivery_option, Some(DeliveryOption::Takeaway));
        assert_eq!(checkout.customer_name, "Ana");
    }

    #[test]
    fn test_link_observes_every_prior_mutation() {
        let state = filled_session();

        // A last-moment payment change must be reflected in the link.
        state.choose_payment_method(PaymentMethod::Card);
        let link = state.submit_order(&StoreConfig::default()).unwrap();

        assert!(link.contains("cartao"));
        assert!(!link.contains("troco"));
    }

    #[test]
    fn test_choose_card_clears_change_for() {
        let state = filled_session();
        assert_eq!(state.checkout().change_for, "50,00");

        state.choose_payment_method(PaymentMethod::Card);
        assert_eq!(state.checkout().change_for, "");
    }

    #[test]
    fn test_fee_and_option_never_observed_out_of_sync() {
        let state = filled_session();

        state.set_delivery_option(DeliveryOption::Takeaway);
        let checkout = state.checkout();
        assert_eq!(checkout.delivery_option, Some(DeliveryOption::Takeaway));
        assert!(checkout.shipping_fee.is_zero());
    }

    #[test]
    fn test_reset_checkout_leaves_cart_alone() {
        let state = filled_session();
        state.reset_checkout();

        assert_eq!(state.checkout(), CheckoutState::new());
        assert_eq!(state.quantity_of("burger"), 2);
    }

    #[test]
    fn test_redirect_target_exposed_to_routing_layer() {
        let state = SessionState::new();
        state.add_item(&burger());

        assert_eq!(
            state.first_unsatisfied_step(),
            Some(CheckoutStep::Delivery)
        );
        assert!(!state.can_submit());
    }
}
