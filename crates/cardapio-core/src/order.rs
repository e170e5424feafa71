//! # Order Module
//!
//! Deterministic construction of the outbound order message and its
//! URL-encoded messaging deep link.
//!
//! ## The One Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Hand-Off                                       │
//! │                                                                         │
//! │  Cart + CheckoutState ──► build_order_message() ──► human-readable     │
//! │                                │                     text block         │
//! │                                ▼                                        │
//! │                         build_order_link()                              │
//! │                                │                                        │
//! │                                ▼                                        │
//! │            https://wa.me/<number>?text=<percent-encoded message>       │
//! │                                                                         │
//! │  This link is the sole externally observable artifact of the core.     │
//! │  Same cart + same checkout state = same bytes, always.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no server-side order processing: the "backend" is the messaging
//! deep link, so the message text IS the order record the restaurant sees.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::CheckoutState;
use crate::types::{DeliveryOption, PaymentMethod};

// =============================================================================
// Store Config
// =============================================================================

/// Base URL of the messaging deep-link destination.
const WHATSAPP_ENDPOINT: &str = "https://wa.me/";

/// Fallback shown for a customer field the user never filled in.
const NOT_INFORMED: &str = "Não informado";

/// Store-identifying configuration for the order hand-off.
///
/// The defaults match the deployed restaurant; a deployment can override
/// them from its own config file since the type is serde-deserializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name used in the greeting line.
    pub name: String,
    /// Phone-number-shaped endpoint identifier for the deep link.
    pub whatsapp_number: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            name: "Chiqburgs".to_string(),
            whatsapp_number: "+5521981781693".to_string(),
        }
    }
}

// =============================================================================
// Message Construction
// =============================================================================

/// Builds the formatted order message.
///
/// Pure function of its inputs: no clock, no randomness, no hidden state.
/// Returns `None` when the cart has zero lines - an order cannot be placed
/// with nothing in it, and the caller must tell the user so instead of
/// dispatching.
///
/// ## Message Layout (fixed order)
/// 1. Greeting (store-identifying)
/// 2. Customer name and phone (`Não informado` fallback)
/// 3. One block per cart line: name, quantity, display price; an indented
///    note line when the trimmed note is non-empty; a `---` separator
/// 4. Subtotal, two decimals
/// 5. Delivery option when set; for home delivery also the fee and, when
///    present, the structured address block
/// 6. Grand total (subtotal + shipping fee), always shown
/// 7. Payment method when set; for cash with a change-for value, the
///    literal "bring change for" line
/// 8. Closing confirmation request
pub fn build_order_message(
    cart: &Cart,
    checkout: &CheckoutState,
    store: &StoreConfig,
) -> Option<String> {
    if cart.is_empty() {
        return None;
    }

    let mut msg = String::new();

    msg.push_str(&format!(
        "Olá, {}! Gostaria de fazer o seguinte pedido:\n\n",
        store.name
    ));

    let name = if checkout.customer_name.is_empty() {
        NOT_INFORMED
    } else {
        checkout.customer_name.as_str()
    };
    let phone = if checkout.customer_phone.is_empty() {
        NOT_INFORMED
    } else {
        checkout.customer_phone.as_str()
    };
    msg.push_str(&format!("*Cliente:* {name}\n"));
    msg.push_str(&format!("*Telefone:* {phone}\n\n"));

    msg.push_str("*Itens do Pedido:*\n");
    for line in cart.lines() {
        msg.push_str(&format!(
            "*{}* (Qtd: {}) - {}\n",
            line.name, line.quantity, line.price
        ));
        let note = line.note.trim();
        if !note.is_empty() {
            msg.push_str(&format!("  Observação: {note}\n"));
        }
        msg.push_str("---\n");
    }

    let subtotal = cart.subtotal();
    msg.push_str(&format!("\n*Subtotal dos Produtos: R$ {subtotal}*\n"));

    if let Some(option) = checkout.delivery_option {
        msg.push_str(&format!("*Tipo de Entrega:* {option}\n"));
        if option == DeliveryOption::Delivery {
            msg.push_str(&format!("*Taxa de Entrega:* R$ {}\n", checkout.shipping_fee));
            if let Some(address) = &checkout.customer_address {
                msg.push_str("*Endereço de Entrega:*\n");
                msg.push_str(&format!("  Rua: {}\n", address.street));
                msg.push_str(&format!("  Número: {}\n", address.number));
                if let Some(complement) = address.complement.as_deref().filter(|c| !c.is_empty()) {
                    msg.push_str(&format!("  Complemento: {complement}\n"));
                }
                if let Some(landmark) = address.landmark.as_deref().filter(|l| !l.is_empty()) {
                    msg.push_str(&format!("  Ponto de Referência: {landmark}\n"));
                }
            }
        }
    }

    let total = subtotal + checkout.shipping_fee;
    msg.push_str(&format!("*Total do Pedido: R$ {total}*\n"));

    if let Some(method) = checkout.payment_method {
        msg.push_str(&format!("*Forma de Pagamento:* {method}\n"));
        if method == PaymentMethod::Cash && !checkout.change_for.is_empty() {
            msg.push_str(&format!("  Levar troco para: R$ {}\n", checkout.change_for));
        }
    }

    msg.push_str("\nPor favor, confirme meu pedido.");

    Some(msg)
}

// =============================================================================
// Link Construction
// =============================================================================

/// The set of bytes percent-encoded in the `?text=` payload.
///
/// Matches JavaScript's `encodeURIComponent`: everything except
/// `A-Za-z0-9 - _ . ! ~ * ' ( )` is escaped, so the produced link is
/// byte-identical to what the original frontend emitted.
const ENCODE_URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the messaging deep link carrying the order message.
///
/// Returns `None` iff [`build_order_message`] yields no message (empty
/// cart). Otherwise: `https://wa.me/<number>?text=<encoded message>`.
pub fn build_order_link(
    cart: &Cart,
    checkout: &CheckoutState,
    store: &StoreConfig,
) -> Option<String> {
    let message = build_order_message(cart, checkout, store)?;
    let encoded = utf8_percent_encode(&message, ENCODE_URI_COMPONENT);
    Some(format!(
        "{WHATSAPP_ENDPOINT}{}?text={encoded}",
        store.whatsapp_number
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Address, CatalogItem};
    use percent_encoding::percent_decode_str;

    fn item(id: &str, name: &str, price: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            description: String::new(),
            image: None,
        }
    }

    /// Cart and checkout for the canonical delivery order: 2× Burger at
    /// R$ 12,00, cash with change for 50,00, address Rua A, 10.
    fn delivery_order() -> (Cart, CheckoutState) {
        let mut cart = Cart::new();
        let line_id = cart.add_item(&item("burger", "Burger", "R$ 12,00"));
        cart.set_quantity(&line_id, 2);

        let mut checkout = CheckoutState::new();
        checkout.set_delivery_option(DeliveryOption::Delivery);
        checkout.set_customer_name("Ana");
        checkout.set_customer_phone("11999999999");
        checkout.set_customer_address(Address {
            street: "Rua A".to_string(),
            number: "10".to_string(),
            complement: None,
            landmark: None,
        });
        checkout.set_payment_method(PaymentMethod::Cash);
        checkout.set_change_for("50,00");

        (cart, checkout)
    }

    #[test]
    fn test_empty_cart_yields_no_message() {
        let cart = Cart::new();
        let mut checkout = CheckoutState::new();
        checkout.set_delivery_option(DeliveryOption::DineIn);
        checkout.set_customer_name("Ana");

        assert_eq!(
            build_order_message(&cart, &checkout, &StoreConfig::default()),
            None
        );
        assert_eq!(
            build_order_link(&cart, &checkout, &StoreConfig::default()),
            None
        );
    }

    #[test]
    fn test_delivery_order_message_contents() {
        let (cart, checkout) = delivery_order();
        let msg = build_order_message(&cart, &checkout, &StoreConfig::default()).unwrap();

        assert!(msg.contains("Olá, Chiqburgs!"));
        assert!(msg.contains("*Cliente:* Ana\n"));
        assert!(msg.contains("*Telefone:* 11999999999\n"));
        assert!(msg.contains("*Burger* (Qtd: 2) - R$ 12,00\n"));
        assert!(msg.contains("*Subtotal dos Produtos: R$ 24.00*\n"));
        assert!(msg.contains("*Tipo de Entrega:* delivery\n"));
        assert!(msg.contains("*Taxa de Entrega:* R$ 6.00\n"));
        assert!(msg.contains("  Rua: Rua A\n"));
        assert!(msg.contains("  Número: 10\n"));
        assert!(msg.contains("*Total do Pedido: R$ 30.00*\n"));
        assert!(msg.contains("*Forma de Pagamento:* dinheiro\n"));
        assert!(msg.contains("  Levar troco para: R$ 50,00\n"));
        assert!(msg.ends_with("Por favor, confirme meu pedido."));
    }

    #[test]
    fn test_note_line_only_when_trimmed_nonempty() {
        let mut cart = Cart::new();
        let with_note = cart.add_item(&item("burger", "Burger", "R$ 12,00"));
        cart.set_note(&with_note, "  sem cebola  ");
        let blank_note = cart.add_item(&item("fritas", "Fritas", "R$ 8,00"));
        cart.set_note(&blank_note, "   ");

        let msg =
            build_order_message(&cart, &CheckoutState::new(), &StoreConfig::default()).unwrap();

        // Trimmed in output, and no note line at all for the blank one.
        assert!(msg.contains("  Observação: sem cebola\n"));
        assert_eq!(msg.matches("Observação:").count(), 1);
        assert_eq!(msg.matches("---\n").count(), 2);
    }

    #[test]
    fn test_missing_customer_fields_fall_back() {
        let mut cart = Cart::new();
        cart.add_item(&item("burger", "Burger", "R$ 12,00"));

        let msg =
            build_order_message(&cart, &CheckoutState::new(), &StoreConfig::default()).unwrap();

        assert!(msg.contains("*Cliente:* Não informado\n"));
        assert!(msg.contains("*Telefone:* Não informado\n"));
        // No delivery option or payment chosen: those sections are absent,
        // but the grand total is always shown.
        assert!(!msg.contains("*Tipo de Entrega:*"));
        assert!(!msg.contains("*Forma de Pagamento:*"));
        assert!(msg.contains("*Total do Pedido: R$ 12.00*\n"));
    }

    #[test]
    fn test_takeaway_has_no_fee_or_address_block() {
        let (cart, mut checkout) = delivery_order();
        checkout.set_delivery_option(DeliveryOption::Takeaway);

        let msg = build_order_message(&cart, &checkout, &StoreConfig::default()).unwrap();

        assert!(msg.contains("*Tipo de Entrega:* retirada\n"));
        assert!(!msg.contains("*Taxa de Entrega:*"));
        assert!(!msg.contains("*Endereço de Entrega:*"));
        // Fee was re-derived to zero, so total equals subtotal.
        assert!(msg.contains("*Total do Pedido: R$ 24.00*\n"));
    }

    #[test]
    fn test_change_for_only_under_cash() {
        let (cart, mut checkout) = delivery_order();
        checkout.set_payment_method(PaymentMethod::Card);

        let msg = build_order_message(&cart, &checkout, &StoreConfig::default()).unwrap();
        assert!(msg.contains("*Forma de Pagamento:* cartao\n"));
        assert!(!msg.contains("Levar troco para"));
    }

    #[test]
    fn test_address_optional_lines() {
        let (cart, mut checkout) = delivery_order();
        checkout.set_customer_address(Address {
            street: "Rua B".to_string(),
            number: "42".to_string(),
            complement: Some("Apto 301".to_string()),
            landmark: Some(String::new()), // empty: must not emit a line
        });

        let msg = build_order_message(&cart, &checkout, &StoreConfig::default()).unwrap();
        assert!(msg.contains("  Complemento: Apto 301\n"));
        assert!(!msg.contains("Ponto de Referência"));
    }

    #[test]
    fn test_link_decodes_back_to_exact_message() {
        let (cart, checkout) = delivery_order();
        let store = StoreConfig::default();

        let msg = build_order_message(&cart, &checkout, &store).unwrap();
        let link = build_order_link(&cart, &checkout, &store).unwrap();

        let prefix = "https://wa.me/+5521981781693?text=";
        assert!(link.starts_with(prefix), "unexpected link shape: {link}");

        let encoded = &link[prefix.len()..];
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_store_config_overrides_greeting_and_endpoint() {
        let (cart, checkout) = delivery_order();
        let store = StoreConfig {
            name: "Lanchonete da Praça".to_string(),
            whatsapp_number: "+5511900000000".to_string(),
        };

        let msg = build_order_message(&cart, &checkout, &store).unwrap();
        assert!(msg.starts_with("Olá, Lanchonete da Praça! Gostaria de fazer o seguinte pedido:"));

        let link = build_order_link(&cart, &checkout, &store).unwrap();
        assert!(link.starts_with("https://wa.me/+5511900000000?text="));
    }

    #[test]
    fn test_link_is_reproducible() {
        let (cart, checkout) = delivery_order();
        let store = StoreConfig::default();

        let first = build_order_link(&cart, &checkout, &store).unwrap();
        let second = build_order_link(&cart, &checkout, &store).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encoding_matches_encode_uri_component() {
        let (cart, checkout) = delivery_order();
        let link = build_order_link(&cart, &checkout, &StoreConfig::default()).unwrap();

        // Spaces, asterisks kept/encoded the way encodeURIComponent does.
        assert!(!link.contains(' '));
        assert!(link.contains("%20"));
        assert!(link.contains('*'), "asterisk is not escaped");
        assert!(!link.contains('\n'));
    }
}
