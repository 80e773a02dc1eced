//! Cart data model: the authoritative item-name → price/quantity mapping,
//! its reducer actions, and the durable snapshot format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

/// One item's price and quantity. Never stored with quantity 0 — the
/// mutation path removes the entry instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub price: u32,
    pub quantity: u32,
}

/// The cart mapping. Serializes as a bare `{"name": {"price": N, "quantity": N}}`
/// object, the same shape the page historically kept under the "cart" slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<String, CartEntry>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &CartEntry)> {
        self.items.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Quantity currently in the cart for `name`; 0 when absent.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.items.get(name).map(|e| e.quantity).unwrap_or(0)
    }

    /// Grand total across all entries (price × quantity each).
    pub fn total(&self) -> u64 {
        self.items
            .values()
            .map(|e| e.price as u64 * e.quantity as u64)
            .sum()
    }

    /// Aggregate item count (sum of quantities), shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.items.values().map(|e| e.quantity as u64).sum()
    }

    /// Creates or updates an entry by applying a quantity delta. A resulting
    /// quantity ≤ 0 removes the entry.
    pub fn upsert(&mut self, name: &str, price: u32, delta: i32) {
        let next = self.quantity_of(name) as i64 + delta as i64;
        if next <= 0 {
            self.items.remove(name);
        } else {
            self.items.insert(
                name.to_string(),
                CartEntry {
                    price,
                    quantity: next as u32,
                },
            );
        }
    }

    /// Deletes an entry. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) {
        self.items.remove(name);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Serialized snapshot for durable storage.
    pub fn snapshot(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Rebuilds a cart from a persisted snapshot. Absent or malformed state
    /// yields an empty cart rather than failing.
    pub fn restore(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }
}

/// Mutations the UI can dispatch. These are the only write path to the cart.
#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    Upsert {
        name: String,
        price: u32,
        delta: i32,
    },
    Remove {
        name: String,
    },
    Clear,
}

impl Reducible for Cart {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            CartAction::Upsert { name, price, delta } => new.upsert(&name, price, delta),
            CartAction::Remove { name } => new.remove(&name),
            CartAction::Clear => new.clear(),
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_first_item_sets_quantity_one() {
        let mut cart = Cart::default();
        cart.upsert("Burger", 150, 1);
        assert_eq!(cart.quantity_of("Burger"), 1);
        assert_eq!(cart.total(), 150);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn increment_accumulates_line_total() {
        let mut cart = Cart::default();
        cart.upsert("Burger", 150, 1);
        cart.upsert("Burger", 150, 1);
        assert_eq!(cart.quantity_of("Burger"), 2);
        assert_eq!(cart.total(), 300);
    }

    #[test]
    fn decrement_to_zero_removes_entry() {
        let mut cart = Cart::default();
        cart.upsert("Burger", 150, 1);
        cart.upsert("Burger", 150, -1);
        assert_eq!(cart.quantity_of("Burger"), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn no_entry_survives_with_nonpositive_quantity() {
        let mut cart = Cart::default();
        cart.upsert("Fries", 90, 3);
        cart.upsert("Fries", 90, -5);
        assert!(cart.entries().all(|(_, e)| e.quantity > 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn total_matches_sum_over_entries() {
        let mut cart = Cart::default();
        cart.upsert("Burger", 150, 2);
        cart.upsert("Pizza", 250, 1);
        cart.upsert("Fries", 90, 3);
        let expected: u64 = cart
            .entries()
            .map(|(_, e)| e.price as u64 * e.quantity as u64)
            .sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), 150 * 2 + 250 + 90 * 3);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::default();
        cart.upsert("Pizza", 250, 1);
        cart.remove("Pizza");
        cart.remove("Pizza");
        assert!(cart.is_empty());
    }

    #[test]
    fn snapshot_round_trips() {
        let mut cart = Cart::default();
        cart.upsert("Burger", 150, 2);
        cart.upsert("Paneer Pizza", 250, 1);
        let raw = cart.snapshot().unwrap();
        assert_eq!(Cart::restore(Some(&raw)), cart);
    }

    #[test]
    fn snapshot_is_a_bare_name_mapping() {
        let mut cart = Cart::default();
        cart.upsert("Burger", 150, 1);
        let raw = cart.snapshot().unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v["Burger"]["price"], 150);
        assert_eq!(v["Burger"]["quantity"], 1);
    }

    #[test]
    fn restore_fails_soft() {
        assert!(Cart::restore(None).is_empty());
        assert!(Cart::restore(Some("not json")).is_empty());
        assert!(Cart::restore(Some("[1,2,3]")).is_empty());
    }

    #[test]
    fn reducer_applies_actions() {
        let cart = Rc::new(Cart::default());
        let cart = cart.reduce(CartAction::Upsert {
            name: "Burger".into(),
            price: 150,
            delta: 1,
        });
        assert_eq!(cart.total(), 150);
        let cart = cart.reduce(CartAction::Clear);
        assert!(cart.is_empty());
    }
}
