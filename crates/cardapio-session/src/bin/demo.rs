//! # End-to-End Order Demo
//!
//! Seeds a small menu catalog, walks a full delivery checkout, and prints
//! the resulting WhatsApp order link.
//!
//! ## Usage
//! ```bash
//! cargo run -p cardapio-session --bin demo
//!
//! # With session operation logs
//! RUST_LOG=debug cargo run -p cardapio-session --bin demo
//! ```

use cardapio_core::order::StoreConfig;
use cardapio_core::types::{Address, DeliveryOption, PaymentMethod};
use cardapio_session::{parse_catalog, SessionState};

/// A small seed menu in the catalog wire shape.
const SEED_CATALOG: &str = r#"{
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
                    "description": "Com bacon crocante"
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

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = match parse_catalog(SEED_CATALOG) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("seed catalog is invalid: {err}");
            std::process::exit(1);
        }
    };

    // Browse the menu.
    for category in &catalog.categories {
        println!("== {} ==", category.name);
        for item in &category.items {
            println!("  {} - {} ({})", item.name, item.price, item.description);
        }
    }
    println!();

    // Build the cart: two X-Burgers (one with a note) and a soda.
    let session = SessionState::new();
    let first_burger = session.add_item(&catalog.categories[0].items[0]);
    session.set_note(&first_burger, "sem cebola");
    session.add_item(&catalog.categories[0].items[0]);
    session.add_item(&catalog.categories[1].items[0]);

    println!(
        "cart: {} lines, subtotal R$ {}",
        session.cart_lines().len(),
        session.cart_subtotal()
    );

    // Walk the checkout wizard.
    session.set_delivery_option(DeliveryOption::Delivery);
    session.set_customer_name("Ana");
    session.set_customer_phone("11999999999");
    session.set_customer_address(Address {
        street: "Rua A".to_string(),
        number: "10".to_string(),
        complement: Some("Apto 301".to_string()),
        landmark: None,
    });
    session.choose_payment_method(PaymentMethod::Cash);
    session.set_change_for("50,00");

    match session.first_unsatisfied_step() {
        None => println!("checkout complete, submitting"),
        Some(step) => {
            eprintln!("checkout incomplete, would redirect to {step:?}");
            std::process::exit(1);
        }
    }

    // Hand off: the session resets itself once the link is built.
    match session.submit_order(&StoreConfig::default()) {
        Some(link) => {
            println!("\norder link:\n{link}");
            println!(
                "\nsession after hand-off: {} lines, can_submit={}",
                session.cart_lines().len(),
                session.can_submit()
            );
        }
        None => eprintln!("cart was empty, nothing to submit"),
    }
}
