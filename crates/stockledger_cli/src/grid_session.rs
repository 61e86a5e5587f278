//! # Grid Menu Session
//!
//! Session object for the fixed 10x5 stock grid menu. Store and item
//! numbers arrive 1-based from the prompts and are converted here.

use stockledger_core::StockGrid;

/// State carried across grid menu commands.
#[derive(Default)]
pub struct GridSession {
    grid: StockGrid,
}

impl GridSession {
    /// Creates a session with an all-zero grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: StockGrid::new(),
        }
    }

    /// Menu 1: show every item level for one store (1-based).
    pub fn show_store(&self, store: i32) -> String {
        match self.grid.store_row(store - 1) {
            Ok(row) => {
                let mut message = format!("Stock for store {store}:");
                for (item, level) in row.iter().enumerate() {
                    message.push_str(&format!("\n  Item {}: {level}", item + 1));
                }
                message
            }
            Err(err) => format!("Cannot show store: {err}."),
        }
    }

    /// Menu 2: add stock to one item in one store (1-based).
    pub fn add(&mut self, store: i32, item: i32, quantity: i32) -> String {
        match self.grid.add_stock(store - 1, item - 1, quantity) {
            Ok(level) => format!(
                "Added {quantity} to store {store}, item {item}. New stock: {level}"
            ),
            Err(err) => format!("Cannot add stock: {err}."),
        }
    }

    /// Menu 3: reduce stock for one item in one store (1-based).
    ///
    /// Reductions past zero clamp the level to zero; the message says so.
    pub fn reduce(&mut self, store: i32, item: i32, quantity: i32) -> String {
        let before = match self.grid.get(store - 1, item - 1) {
            Ok(level) => level,
            Err(err) => return format!("Cannot reduce stock: {err}."),
        };
        match self.grid.reduce_stock(store - 1, item - 1, quantity) {
            Ok(0) if quantity > before => format!(
                "Cannot reduce by {quantity} because current stock is {before}. Setting stock to 0."
            ),
            Ok(level) => format!(
                "Reduced {quantity} from store {store}, item {item}. New stock: {level}"
            ),
            Err(err) => format!("Cannot reduce stock: {err}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_show() {
        let mut s = GridSession::new();
        assert_eq!(
            s.add(3, 2, 7),
            "Added 7 to store 3, item 2. New stock: 7"
        );
        let shown = s.show_store(3);
        assert!(shown.starts_with("Stock for store 3:"));
        assert!(shown.contains("Item 2: 7"));
        assert!(shown.contains("Item 1: 0"));
    }

    #[test]
    fn test_reduce_and_clamp() {
        let mut s = GridSession::new();
        s.add(1, 1, 10);
        assert_eq!(
            s.reduce(1, 1, 4),
            "Reduced 4 from store 1, item 1. New stock: 6"
        );
        assert_eq!(
            s.reduce(1, 1, 50),
            "Cannot reduce by 50 because current stock is 6. Setting stock to 0."
        );
    }

    #[test]
    fn test_bad_indices_reported() {
        let mut s = GridSession::new();
        assert!(s.show_store(11).starts_with("Cannot show store"));
        assert!(s.add(0, 1, 5).starts_with("Cannot add stock"));
        assert!(s.reduce(1, 6, 5).starts_with("Cannot reduce stock"));
    }
}
