use std::{collections::HashMap, fmt};
use thiserror::Error;
use tracing::warn;
use crate::model::{ItemId, MenuItem, Price};


#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("no menu item with id {0}")]
    UnknownItem(ItemId),
}

// Per-item counts for every item on the menu
#[derive(Debug, Clone)]
pub struct Cart<'m> {
    menu: &'m [MenuItem],
    counts: HashMap<ItemId, u32>,
}

// One ordered item in a summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub title: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub subtotal: Price,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Empty,
    Placed(OrderSummary),
}


impl<'m> Cart<'m> {
    pub fn new(menu: &'m [MenuItem]) -> Self {
        let counts = menu.iter().map(|item| (item.id, 0)).collect();
        Cart { menu, counts }
    }

    pub fn menu(&self) -> &'m [MenuItem] {
        self.menu
    }

    // Current count, zero for ids that are not on the menu
    pub fn count(&self, id: ItemId) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, id: ItemId) -> Result<u32, CartError> {
        let count = self.counts.get_mut(&id).ok_or(CartError::UnknownItem(id))?;
        *count = count.saturating_add(1);
        Ok(*count)
    }

    // Floors at zero
    pub fn decrement(&mut self, id: ItemId) -> Result<u32, CartError> {
        let count = self.counts.get_mut(&id).ok_or(CartError::UnknownItem(id))?;
        *count = count.saturating_sub(1);
        Ok(*count)
    }

    pub fn clear(&mut self) {
        self.counts.values_mut().for_each(|count| *count = 0);
    }

    pub fn total_items(&self) -> u64 {
        self.counts.values().map(|&count| u64::from(count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&count| count == 0)
    }

    // Sum of price x count over the whole menu, recomputed on every call.
    // An item whose price does not parse contributes nothing.
    pub fn subtotal(&self) -> Price {
        self.menu.iter().fold(Price::ZERO, |acc, item| {
            let count = self.count(item.id);
            if count == 0 {
                return acc;
            }
            match item.unit_price() {
                Ok(price) => acc.saturating_add(price.times(count)),
                Err(err) => {
                    warn!(item = item.id, title = item.title, %err, "skipping malformed price");
                    acc
                }
            }
        })
    }

    // Collect ordered items in menu order; the cart itself is left as is
    pub fn place_order(&self) -> OrderOutcome {
        let lines: Vec<OrderLine> = self
            .menu
            .iter()
            .filter_map(|item| {
                let count = self.count(item.id);
                (count > 0).then_some(OrderLine { title: item.title, count })
            })
            .collect();

        if lines.is_empty() {
            return OrderOutcome::Empty;
        }

        OrderOutcome::Placed(OrderSummary {
            lines,
            subtotal: self.subtotal(),
        })
    }
}


impl OrderOutcome {
    // Text for the blocking notice
    pub fn notice(&self) -> String {
        match self {
            OrderOutcome::Empty => "No items in cart".to_string(),
            OrderOutcome::Placed(summary) => summary.to_string(),
        }
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order placed!")?;
        for line in &self.lines {
            writeln!(f, "{}: {}", line.title, line.count)?;
        }
        write!(f, "Subtotal: {}", self.subtotal)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::menu_items;

    #[test]
    fn starts_with_every_item_at_zero() {
        let cart = Cart::new(menu_items());
        for item in menu_items() {
            assert_eq!(cart.count(item.id), 0);
        }
        assert_eq!(cart.subtotal().to_string(), "$0.00");
        assert!(cart.is_empty());
    }

    #[test]
    fn three_whataburgers() {
        let mut cart = Cart::new(menu_items());
        for _ in 0..3 {
            cart.increment(1).unwrap();
        }
        assert_eq!(cart.count(1), 3);
        assert_eq!(cart.subtotal().to_string(), "$14.25");
    }

    #[test]
    fn order_lists_items_and_subtotal() {
        let mut cart = Cart::new(menu_items());
        cart.increment(5).unwrap();
        cart.increment(1).unwrap();
        cart.increment(5).unwrap();

        let notice = cart.place_order().notice();
        assert!(notice.contains("Whataburger: 1"));
        assert!(notice.contains("French Fries: 2"));
        assert!(notice.contains("Subtotal: $9.73"));

        // menu order, not click order
        let burger = notice.find("Whataburger: 1").unwrap();
        let fries = notice.find("French Fries: 2").unwrap();
        assert!(burger < fries);
    }

    #[test]
    fn empty_order_is_reported() {
        let cart = Cart::new(menu_items());
        let outcome = cart.place_order();
        assert_eq!(outcome, OrderOutcome::Empty);
        assert_eq!(outcome.notice(), "No items in cart");
        assert!(cart.is_empty());
    }

    #[test]
    fn order_keeps_cart() {
        let mut cart = Cart::new(menu_items());
        cart.increment(3).unwrap();
        assert!(matches!(cart.place_order(), OrderOutcome::Placed(_)));
        assert_eq!(cart.count(3), 1);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut cart = Cart::new(menu_items());
        assert_eq!(cart.decrement(2), Ok(0));
        assert_eq!(cart.count(2), 0);
    }

    #[test]
    fn increment_then_decrement_restores_count() {
        let mut cart = Cart::new(menu_items());
        cart.increment(4).unwrap();
        cart.increment(4).unwrap();
        cart.increment(4).unwrap();
        cart.decrement(4).unwrap();
        assert_eq!(cart.increment(4), Ok(3));
        assert_eq!(cart.decrement(4), Ok(2));
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut cart = Cart::new(menu_items());
        for item in menu_items() {
            cart.increment(item.id).unwrap();
        }
        cart.increment(2).unwrap();
        cart.clear();
        for item in menu_items() {
            assert_eq!(cart.count(item.id), 0);
        }
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), Price::ZERO);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut cart = Cart::new(menu_items());
        assert_eq!(cart.increment(99), Err(CartError::UnknownItem(99)));
        assert_eq!(cart.decrement(0), Err(CartError::UnknownItem(0)));
        assert_eq!(cart.count(99), 0);
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn subtotal_tracks_every_change() {
        let mut cart = Cart::new(menu_items());
        cart.increment(2).unwrap();
        assert_eq!(cart.subtotal(), Price::from_cents(595));
        cart.increment(3).unwrap();
        assert_eq!(cart.subtotal(), Price::from_cents(595 + 675));
        cart.decrement(2).unwrap();
        assert_eq!(cart.subtotal(), Price::from_cents(675));
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn malformed_price_contributes_nothing() {
        let menu = [
            MenuItem { id: 1, title: "Good", price: "$1.50", description: "", image: "" },
            MenuItem { id: 2, title: "Bad", price: "free", description: "", image: "" },
        ];
        let mut cart = Cart::new(&menu);
        cart.increment(1).unwrap();
        cart.increment(2).unwrap();
        assert_eq!(cart.subtotal().to_string(), "$1.50");

        let notice = cart.place_order().notice();
        assert!(notice.contains("Bad: 1"));
        assert!(notice.contains("Subtotal: $1.50"));
    }
}
