//! Cart invariants checked over generated operation sequences.

use std::collections::HashSet;

use proptest::prelude::*;
use storefront_core::{Cart, Money, NewLineItem, PriceCalculator, MAX_UNIT_PRICE_CENTS};

const PRODUCT_IDS: [&str; 5] = ["p1", "p2", "p3", "p4", "p5"];

#[derive(Debug, Clone)]
enum Op {
    Increment { product: usize, price_cents: i64 },
    Decrement(usize),
    Remove(usize),
}

/// Ordinary prices, prices at the cap, and prices the cart must refuse.
fn arb_price() -> impl Strategy<Value = i64> {
    prop_oneof![
        6 => 0..=10_000i64,
        3 => (MAX_UNIT_PRICE_CENTS - 1_000)..=MAX_UNIT_PRICE_CENTS,
        1 => (MAX_UNIT_PRICE_CENTS + 1)..=i64::MAX,
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    let product = 0..PRODUCT_IDS.len();
    prop_oneof![
        5 => (product.clone(), arb_price())
            .prop_map(|(product, price_cents)| Op::Increment { product, price_cents }),
        4 => product.clone().prop_map(Op::Decrement),
        1 => product.prop_map(Op::Remove),
    ]
}

/// Reference model: `(product_id, first-seen price, quantity)` in insertion order.
#[derive(Debug, Default)]
struct Model(Vec<(&'static str, i64, u32)>);

impl Model {
    fn increment(&mut self, id: &'static str, price_cents: i64) {
        match self.0.iter_mut().find(|(p, _, _)| *p == id) {
            Some(line) => line.2 += 1,
            None => self.0.push((id, price_cents, 1)),
        }
    }

    fn decrement(&mut self, id: &str) {
        if let Some(pos) = self.0.iter().position(|(p, _, _)| *p == id) {
            if self.0[pos].2 > 1 {
                self.0[pos].2 -= 1;
            } else {
                self.0.remove(pos);
            }
        }
    }

    fn remove(&mut self, id: &str) {
        self.0.retain(|(p, _, _)| *p != id);
    }

    fn total_cents(&self) -> i64 {
        let exact: i128 = self
            .0
            .iter()
            .map(|(_, price, qty)| i128::from(*price) * i128::from(*qty))
            .sum();
        exact.min(i128::from(i64::MAX)) as i64
    }
}

proptest! {
    #[test]
    fn prop_mutations_preserve_invariants(ops in prop::collection::vec(arb_op(), 0..300)) {
        let mut cart = Cart::new();
        let mut model = Model::default();

        for op in ops {
            match op {
                Op::Increment { product, price_cents } => {
                    let id = PRODUCT_IDS[product];
                    let item = NewLineItem::new(id, id, Money::from_cents(price_cents), None, None);
                    match item {
                        Ok(item) => {
                            cart.increment(item);
                            model.increment(id, price_cents);
                        }
                        Err(_) => {
                            prop_assert!(price_cents > MAX_UNIT_PRICE_CENTS);
                        }
                    }
                }
                Op::Decrement(product) => {
                    cart.decrement(PRODUCT_IDS[product]);
                    model.decrement(PRODUCT_IDS[product]);
                }
                Op::Remove(product) => {
                    cart.remove(PRODUCT_IDS[product]);
                    model.remove(PRODUCT_IDS[product]);
                }
            }

            let mut seen = HashSet::new();
            for item in cart.items() {
                prop_assert!(seen.insert(item.product_id.clone()), "duplicate {}", item.product_id);
                prop_assert!(item.quantity >= 1);
                prop_assert!(!item.unit_price.is_negative());
                prop_assert!(item.unit_price.cents() <= MAX_UNIT_PRICE_CENTS);
            }

            let lines: Vec<_> = cart
                .items()
                .iter()
                .map(|i| (i.product_id.as_str(), i.unit_price.cents(), i.quantity))
                .collect();
            let expected: Vec<_> = model.0.iter().map(|&(p, price, qty)| (p, price, qty)).collect();
            prop_assert_eq!(lines, expected);

            let total = PriceCalculator::total(cart.items());
            prop_assert!(!total.is_negative());
            prop_assert_eq!(total.cents(), model.total_cents());
        }
    }

    #[test]
    fn prop_increments_only_never_duplicate(picks in prop::collection::vec(0..PRODUCT_IDS.len(), 1..200)) {
        let mut cart = Cart::new();
        for &pick in &picks {
            let id = PRODUCT_IDS[pick];
            cart.increment(NewLineItem::new(id, id, Money::from_cents(100), None, None).unwrap());
        }

        let distinct: HashSet<_> = picks.iter().collect();
        prop_assert_eq!(cart.item_count(), distinct.len());

        let total_quantity: u32 = cart.items().iter().map(|i| i.quantity).sum();
        prop_assert_eq!(total_quantity as usize, picks.len());
        prop_assert_eq!(PriceCalculator::total(cart.items()).cents(), 100 * picks.len() as i64);
    }

    #[test]
    fn prop_remove_is_idempotent(ops in prop::collection::vec(arb_op(), 0..50), target in 0..PRODUCT_IDS.len()) {
        let mut cart = Cart::new();
        for op in ops {
            if let Op::Increment { product, price_cents } = op {
                let id = PRODUCT_IDS[product];
                if let Ok(item) = NewLineItem::new(id, id, Money::from_cents(price_cents), None, None) {
                    cart.increment(item);
                }
            }
        }

        cart.remove(PRODUCT_IDS[target]);
        let after_first = cart.items().to_vec();

        prop_assert!(!cart.remove(PRODUCT_IDS[target]));
        prop_assert_eq!(cart.items(), after_first.as_slice());
    }
}

#[test]
fn decrement_to_zero_removes_item() {
    let mut cart = Cart::new();
    cart.increment(NewLineItem::new("p3", "Cap", Money::from_cents(1999), None, None).unwrap());
    cart.decrement("p3");

    assert!(cart.is_empty());
}

#[test]
fn scenario_add_add_decrement_remove() {
    let shirt = || NewLineItem::new("p1", "Shirt", Money::from_cents(2000), None, None).unwrap();
    let mut cart = Cart::new();

    cart.increment(shirt());
    assert_eq!(cart.quantity_of("p1"), 1);
    assert_eq!(PriceCalculator::total(cart.items()).cents(), 2000);

    cart.increment(shirt());
    assert_eq!(cart.quantity_of("p1"), 2);
    assert_eq!(PriceCalculator::total(cart.items()).cents(), 4000);

    cart.decrement("p1");
    assert_eq!(cart.quantity_of("p1"), 1);
    assert_eq!(PriceCalculator::total(cart.items()).cents(), 2000);

    cart.remove("p1");
    assert!(cart.is_empty());
    assert_eq!(PriceCalculator::total(cart.items()).cents(), 0);
}

#[test]
fn scenario_multi_product_total() {
    let mut cart = Cart::new();
    cart.increment(NewLineItem::new("p1", "Shirt", Money::from_cents(1000), None, None).unwrap());
    cart.increment(NewLineItem::new("p2", "Mug", Money::from_cents(1500), None, None).unwrap());
    cart.increment(NewLineItem::new("p2", "Mug", Money::from_cents(1500), None, None).unwrap());

    let lines: Vec<_> = cart
        .items()
        .iter()
        .map(|i| (i.product_id.as_str(), i.quantity))
        .collect();
    assert_eq!(lines, [("p1", 1), ("p2", 2)]);
    assert_eq!(PriceCalculator::total(cart.items()).cents(), 4000);
}

#[test]
fn scenario_decrement_absent_on_empty_cart() {
    let mut cart = Cart::new();
    cart.decrement("pX");

    assert!(cart.is_empty());
    assert!(PriceCalculator::total(cart.items()).is_zero());
}
