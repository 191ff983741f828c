//! Cart store behaviour through the public API.

use abhiram_commerce::prelude::*;

fn inr(amount: u64) -> Money {
    Money::new(amount, Currency::INR)
}

#[test]
fn repeated_adds_collapse_into_one_line() {
    let mut cart = Cart::new();
    for n in 1..=5u64 {
        assert_eq!(cart.add("p1", "Shirt", "499", "img").unwrap(), n);
    }

    let lines: Vec<&CartLine> = cart
        .lines()
        .iter()
        .filter(|l| l.product_id.as_str() == "p1")
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 5);
}

#[test]
fn totals_track_every_mutation() {
    let mut cart = Cart::new();
    let steps: [(&str, &str); 6] = [
        ("a", "\u{20b9}499"),
        ("b", "\u{20b9}2,499"),
        ("a", "\u{20b9}499"),
        ("c", "1,799"),
        ("b", "\u{20b9}2,499"),
        ("a", "\u{20b9}499"),
    ];

    for (id, label) in steps {
        cart.add(id, id.to_uppercase(), label, "").unwrap();

        let expected_items: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
        let expected_total: u64 = cart
            .lines()
            .iter()
            .map(|l| l.unit_price.amount * u64::from(l.quantity))
            .sum();
        assert_eq!(cart.total_item_count(), expected_items);
        assert_eq!(cart.grand_total().unwrap(), inr(expected_total));
    }

    assert_eq!(cart.total_item_count(), 6);
    assert_eq!(cart.grand_total().unwrap(), inr(3 * 499 + 2 * 2499 + 1799));

    cart.remove(&ProductId::new("b"));
    assert_eq!(cart.total_item_count(), 4);
    assert_eq!(cart.grand_total().unwrap(), inr(3 * 499 + 1799));
}

#[test]
fn checkout_demo_cart_then_empty() {
    let mut cart = Cart::demo();
    assert_eq!(cart.checkout(), Ok(inr(2998)));
    assert_eq!(cart.state(), CartState::Empty);

    assert_eq!(cart.checkout(), Err(CommerceError::EmptyCart));
    assert_eq!(cart.state(), CartState::Empty);
}

#[test]
fn malformed_price_is_reported_and_ignored() {
    let mut cart = Cart::new();
    cart.add("p1", "Shirt", "499", "").unwrap();

    let err = cart.add("p2", "Mystery", "N/A", "").unwrap_err();
    assert_eq!(err, CommerceError::parse("N/A"));
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_item_count(), 1);
}

#[test]
fn session_adds_from_catalog_by_price_label() {
    let catalog = Catalog::sample();
    let mut session = ShopSession::open(Currency::INR);

    for id in ["3", "2", "3"] {
        let product = catalog.require(&ProductId::new(id)).unwrap();
        session
            .cart_mut()
            .add(
                product.id.clone(),
                product.name.clone(),
                &product.price_label(),
                product.image.clone(),
            )
            .unwrap();
    }

    let cart = session.cart();
    assert_eq!(cart.lines()[0].product_id.as_str(), "3");
    assert_eq!(cart.lines()[0].quantity, 2);
    assert_eq!(cart.grand_total().unwrap(), inr(2 * 1799 + 2499));

    let order = session.cart_mut().place_order().unwrap();
    assert_eq!(order.item_count, 3);
    assert!(session.close().items_discarded == 0);
}
