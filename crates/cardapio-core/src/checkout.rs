//! # Checkout Module
//!
//! The multi-step checkout state and its step-gating predicates.
//!
//! ## The Wizard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Steps (linear)                              │
//! │                                                                         │
//! │  ┌──────────┐   ┌──────────────┐   ┌──────────┐   ┌─────────┐          │
//! │  │ Delivery │──►│ CustomerInfo │──►│ Address  │──►│ Payment │──► Submit│
//! │  │  option  │   │ name + phone │   │(delivery │   │ method  │          │
//! │  └──────────┘   └──────────────┘   │  only)   │   └─────────┘          │
//! │                                    └──────────┘                         │
//! │                                                                         │
//! │  The routing layer polls is_step_ready() / first_unsatisfied_step()    │
//! │  and steers the user back to the first gap. The state itself never     │
//! │  throws on incompleteness.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Navigation Policy Lives Outside
//! Gating is exposed as pure predicates rather than effects tied to page
//! mounts: mutation and navigation stay decoupled, and the state machine is
//! testable without any UI scaffolding.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Address, DeliveryOption, PaymentMethod};

// =============================================================================
// Checkout Step
// =============================================================================

/// One stage of the linear order-placement wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// Choose dine-in, takeaway, or home delivery.
    Delivery,
    /// Customer name and phone.
    CustomerInfo,
    /// Delivery address. Skipped unless the option is home delivery.
    Address,
    /// Cash or card.
    Payment,
    /// Final review and hand-off to the messaging link.
    Submit,
}

impl CheckoutStep {
    /// All steps, in wizard order.
    pub const ALL: [CheckoutStep; 5] = [
        CheckoutStep::Delivery,
        CheckoutStep::CustomerInfo,
        CheckoutStep::Address,
        CheckoutStep::Payment,
        CheckoutStep::Submit,
    ];
}

// =============================================================================
// Checkout State
// =============================================================================

/// The checkout wizard's single mutable record, one instance per session.
///
/// All fields start unset/empty and are filled incrementally by the setters.
/// `shipping_fee` is derived: it is recomputed in the same assignment that
/// records the delivery option, so no reader can ever observe a stale fee
/// paired with a different option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutState {
    pub delivery_option: Option<DeliveryOption>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: Option<Address>,
    pub payment_method: Option<PaymentMethod>,
    /// Free text ("50,00"): how much cash the customer will hand over, so
    /// the restaurant can bring change. Meaningful only under cash payment.
    /// Deliberately unvalidated - the original flow accepts any text here.
    pub change_for: String,
    /// Derived from `delivery_option`; never independently settable.
    pub shipping_fee: Money,
}

impl CheckoutState {
    /// Creates the initial empty checkout state.
    pub fn new() -> Self {
        CheckoutState::default()
    }

    /// Records the delivery option and recomputes the shipping fee in the
    /// same assignment (flat fee iff home delivery, zero otherwise).
    pub fn set_delivery_option(&mut self, option: DeliveryOption) {
        self.delivery_option = Some(option);
        self.shipping_fee = option.shipping_fee();
    }

    pub fn set_customer_name(&mut self, name: &str) {
        self.customer_name = name.to_string();
    }

    pub fn set_customer_phone(&mut self, phone: &str) {
        self.customer_phone = phone.to_string();
    }

    pub fn set_customer_address(&mut self, address: Address) {
        self.customer_address = Some(address);
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    pub fn set_change_for(&mut self, value: &str) {
        self.change_for = value.to_string();
    }

    /// Resets every field to its initial empty form. Used when the user
    /// abandons checkout and after a successful order hand-off.
    pub fn reset(&mut self) {
        *self = CheckoutState::default();
    }

    // -------------------------------------------------------------------------
    // Step Gating
    // -------------------------------------------------------------------------

    /// Whether an address is required: if and only if the chosen option is
    /// home delivery.
    pub fn address_required(&self) -> bool {
        self.delivery_option == Some(DeliveryOption::Delivery)
    }

    /// Whether the given step's own requirement is satisfied.
    ///
    /// A step that does not apply (address without home delivery) counts as
    /// satisfied. `Submit` has no data of its own; it is "complete" once
    /// reached, so it always reports satisfied here - reachability is what
    /// [`CheckoutState::is_step_ready`] answers.
    pub fn is_step_complete(&self, step: CheckoutStep) -> bool {
        match step {
            CheckoutStep::Delivery => self.delivery_option.is_some(),
            CheckoutStep::CustomerInfo => {
                !self.customer_name.trim().is_empty() && !self.customer_phone.trim().is_empty()
            }
            CheckoutStep::Address => !self.address_required() || self.customer_address.is_some(),
            CheckoutStep::Payment => self.payment_method.is_some(),
            CheckoutStep::Submit => true,
        }
    }

    /// Whether the user may stand on the given step: every earlier step's
    /// requirement must be satisfied. The routing layer polls this on page
    /// entry and redirects to [`CheckoutState::first_unsatisfied_step`]
    /// when it returns false.
    pub fn is_step_ready(&self, step: CheckoutStep) -> bool {
        CheckoutStep::ALL
            .iter()
            .take_while(|s| **s != step)
            .all(|s| self.is_step_complete(*s))
    }

    /// The first step whose requirement is unsatisfied, or `None` when the
    /// checkout is complete through payment (i.e. submit is reachable).
    pub fn first_unsatisfied_step(&self) -> Option<CheckoutStep> {
        CheckoutStep::ALL
            .into_iter()
            .find(|step| !self.is_step_complete(*step))
    }

    /// Whether the submit step is reachable: delivery option, name, phone,
    /// and payment method set, plus an address whenever one is required.
    pub fn can_submit(&self) -> bool {
        self.is_step_ready(CheckoutStep::Submit)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
