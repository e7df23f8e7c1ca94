//! Client-side cart store.
//!
//! A reducer over an insertion-ordered list of lines. Totals are cached
//! recomputations of the line list and are refreshed after every mutation;
//! nothing mutates them independently.

use serde::Serialize;
use tracing::debug;

use crate::models::{round_to_cents, CartItem, MenuItem};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Set the line for `item` to `quantity` (overwrite, not increment).
    Add {
        item: MenuItem,
        quantity: u32,
        comment: Option<String>,
    },
    Remove {
        item_id: String,
    },
    UpdateQuantity {
        item_id: String,
        quantity: u32,
    },
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
    #[serde(rename = "totalItems")]
    total_items: u64,
    #[serde(rename = "totalPrice")]
    total_price: f64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, item_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == item_id)
    }

    /// Quantity currently selected for `item_id` (0 when absent).
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.get(item_id).map(|line| line.quantity).unwrap_or(0)
    }

    pub fn dispatch(&mut self, action: CartAction) {
        match action {
            CartAction::Add {
                item,
                quantity,
                comment,
            } => self.add_line(&item, quantity, comment),
            CartAction::Remove { item_id } => {
                let before = self.items.len();
                self.items.retain(|line| line.id != item_id);
                if self.items.len() == before {
                    return;
                }
            }
            CartAction::UpdateQuantity { item_id, quantity } => {
                let Some(line) = self.items.iter_mut().find(|line| line.id == item_id) else {
                    return;
                };
                line.quantity = quantity;
                line.subtotal = round_to_cents(f64::from(quantity) * line.unit_price());
            }
            CartAction::Clear => {
                self.items.clear();
                self.total_items = 0;
                self.total_price = 0.0;
                return;
            }
        }
        self.recompute_totals();
    }

    pub fn add(&mut self, item: &MenuItem, quantity: u32) {
        self.dispatch(CartAction::Add {
            item: item.clone(),
            quantity,
            comment: None,
        });
    }

    pub fn add_with_comment(&mut self, item: &MenuItem, quantity: u32, comment: Option<String>) {
        self.dispatch(CartAction::Add {
            item: item.clone(),
            quantity,
            comment,
        });
    }

    /// One more of `item`, as tapping its "+" button does.
    pub fn add_one(&mut self, item: &MenuItem) {
        let next = self.quantity_of(&item.id).saturating_add(1);
        self.add(item, next);
    }

    pub fn remove(&mut self, item_id: &str) {
        self.dispatch(CartAction::Remove {
            item_id: item_id.to_string(),
        });
    }

    pub fn update_quantity(&mut self, item_id: &str, quantity: u32) {
        self.dispatch(CartAction::UpdateQuantity {
            item_id: item_id.to_string(),
            quantity,
        });
    }

    /// Stepper used by the basket view: quantities never drop below one from
    /// here; removal is a separate action.
    pub fn step_quantity(&mut self, item_id: &str, delta: i64) {
        let current = i64::from(self.quantity_of(item_id));
        let next = current.saturating_add(delta);
        if next > 0 && self.get(item_id).is_some() {
            self.update_quantity(item_id, u32::try_from(next).unwrap_or(u32::MAX));
        }
    }

    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    fn add_line(&mut self, item: &MenuItem, quantity: u32, comment: Option<String>) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.quantity = quantity;
                line.subtotal = round_to_cents(f64::from(quantity) * line.unit_price());
                if comment.is_some() {
                    line.comment = comment;
                }
            }
            None => {
                let mut line = CartItem::from_menu_item(item, quantity);
                line.subtotal = round_to_cents(f64::from(quantity) * line.unit_price());
                line.comment = comment;
                self.items.push(line);
            }
        }
    }

    fn recompute_totals(&mut self) {
        self.total_items = self.items.iter().map(|line| u64::from(line.quantity)).sum();
        self.total_price = round_to_cents(self.items.iter().map(|line| line.subtotal).sum());
        debug!(
            lines = self.items.len(),
            total_items = self.total_items,
            total_price = self.total_price,
            "cart: totals recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, promo: Option<f64>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            price,
            promo_price: promo,
            ..Default::default()
        }
    }

    #[test]
    fn add_appends_with_computed_subtotal() {
        let mut cart = Cart::new();
        cart.add(&item("a", 2.5, None), 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].subtotal, 7.5);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), 7.5);
    }

    #[test]
    fn add_existing_overwrites_quantity() {
        let mut cart = Cart::new();
        let tea = item("tea", 1.25, None);
        cart.add(&tea, 2);
        cart.add(&tea, 5);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of("tea"), 5);
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), 6.25);
    }

    #[test]
    fn promotion_sets_unit_price() {
        let mut cart = Cart::new();
        cart.add(&item("p", 10.0, Some(7.99)), 3);
        assert_eq!(cart.items()[0].subtotal, 23.97);

        cart.add(&item("z", 10.0, Some(0.0)), 1);
        assert_eq!(cart.get("z").map(|l| l.subtotal), Some(10.0));
        assert_eq!(cart.total_price(), 33.97);
    }

    #[test]
    fn subtotals_are_rounded_to_cents() {
        let mut cart = Cart::new();
        cart.add(&item("x", 0.1, None), 3);
        assert_eq!(cart.items()[0].subtotal, 0.3);
        assert_eq!(cart.total_price(), 0.3);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(&item("a", 1.0, None), 2);
        let before = cart.clone();
        cart.remove("missing");
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_drops_line_and_totals() {
        let mut cart = Cart::new();
        cart.add(&item("a", 1.0, None), 2);
        cart.add(&item("b", 3.0, None), 1);
        cart.remove("a");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), 3.0);
    }

    #[test]
    fn update_quantity_recomputes_only_existing_lines() {
        let mut cart = Cart::new();
        cart.add(&item("a", 4.0, None), 1);
        cart.update_quantity("a", 4);
        assert_eq!(cart.items()[0].subtotal, 16.0);
        assert_eq!(cart.total_items(), 4);

        cart.update_quantity("ghost", 9);
        assert_eq!(cart.total_items(), 4);
        assert!(cart.get("ghost").is_none());
    }

    #[test]
    fn update_quantity_has_no_lower_bound() {
        let mut cart = Cart::new();
        cart.add(&item("a", 4.0, None), 2);
        cart.update_quantity("a", 0);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn step_quantity_stops_at_one() {
        let mut cart = Cart::new();
        cart.add(&item("a", 2.0, None), 1);
        cart.step_quantity("a", -1);
        assert_eq!(cart.quantity_of("a"), 1);
        cart.step_quantity("a", 2);
        assert_eq!(cart.quantity_of("a"), 3);
    }

    #[test]
    fn step_quantity_saturates_on_extreme_deltas() {
        let mut cart = Cart::new();
        cart.add(&item("a", 1.0, None), 1);
        cart.step_quantity("a", i64::MAX);
        assert_eq!(cart.quantity_of("a"), u32::MAX);
        cart.step_quantity("a", i64::MAX);
        assert_eq!(cart.quantity_of("a"), u32::MAX);
        cart.step_quantity("a", i64::MIN);
        assert_eq!(cart.quantity_of("a"), u32::MAX);
        assert_eq!(cart.total_items(), u64::from(u32::MAX));
    }

    #[test]
    fn add_one_increments_from_current_quantity() {
        let mut cart = Cart::new();
        let rice = item("rice", 3.0, None);
        cart.add_one(&rice);
        cart.add_one(&rice);
        assert_eq!(cart.quantity_of("rice"), 2);
        assert_eq!(cart.total_price(), 6.0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut cart = Cart::new();
        cart.add(&item("a", 1.0, None), 2);
        cart.add_with_comment(&item("b", 2.0, None), 1, Some("no ice".into()));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn comments_survive_quantity_overwrites() {
        let mut cart = Cart::new();
        let soup = item("soup", 5.0, None);
        cart.add_with_comment(&soup, 1, Some("extra spicy".into()));
        cart.add(&soup, 2);
        assert_eq!(
            cart.get("soup").and_then(|l| l.comment.as_deref()),
            Some("extra spicy")
        );
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(&item("c", 1.0, None), 1);
        cart.add(&item("a", 1.0, None), 1);
        cart.add(&item("b", 1.0, None), 1);
        cart.add(&item("a", 1.0, None), 3);
        let ids: Vec<&str> = cart.items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
