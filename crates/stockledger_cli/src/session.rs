//! # Ledger Menu Session
//!
//! One explicit session object owns the optional ledger and maps every
//! menu command to a user-facing message. The ledger only exists after a
//! successful "create"; every other command is guarded.

use stockledger_core::StockLedger;

use crate::config::CliConfig;

/// Guard message printed when a command needs a ledger that does not exist.
pub const CREATE_FIRST: &str = "Please create the inventory first (option 1).";

/// State carried across menu commands.
pub struct Session {
    ledger: Option<StockLedger>,
    capacity_limit: usize,
}

impl Session {
    /// Creates a session with no ledger yet.
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            ledger: None,
            capacity_limit: config.ledger.capacity_limit,
        }
    }

    /// Returns true once a ledger has been created.
    #[must_use]
    pub fn has_ledger(&self) -> bool {
        self.ledger.is_some()
    }

    /// Menu 1: create a new ledger, destroying any existing one first.
    pub fn create(&mut self, initial_capacity: i32) -> String {
        let mut message = String::new();
        if self.ledger.take().is_some() {
            message.push_str("Re-initializing: existing inventory will be destroyed.\n");
        }
        match StockLedger::with_capacity_and_limit(initial_capacity, self.capacity_limit) {
            Ok(ledger) => {
                self.ledger = Some(ledger);
                message.push_str("New inventory ledger created successfully!");
            }
            Err(err) => message.push_str(&format!("Cannot create ledger: {err}.")),
        }
        message
    }

    /// Menu 2: append a product's stock at the end.
    pub fn append(&mut self, value: i32) -> String {
        let Some(ledger) = self.ledger.as_mut() else {
            return CREATE_FIRST.to_string();
        };
        match ledger.append(value) {
            Ok(()) => "Product added successfully.".to_string(),
            Err(err) => format!("Cannot add product: {err}."),
        }
    }

    /// Menu 3: insert a product's stock at a position.
    pub fn insert(&mut self, index: i32, value: i32) -> String {
        let Some(ledger) = self.ledger.as_mut() else {
            return CREATE_FIRST.to_string();
        };
        match ledger.insert_at(index, value) {
            Ok(()) => "Product inserted successfully.".to_string(),
            Err(err) => format!("Cannot insert product: {err}."),
        }
    }

    /// Menu 4: remove the product at a position.
    pub fn remove(&mut self, index: i32) -> String {
        let Some(ledger) = self.ledger.as_mut() else {
            return CREATE_FIRST.to_string();
        };
        match ledger.delete_at(index) {
            Ok(()) => "Product removed successfully.".to_string(),
            Err(err) => format!("Cannot remove product: {err}."),
        }
    }

    /// Menu 5: find the first product with a given stock quantity.
    pub fn find(&self, target: i32) -> String {
        let Some(ledger) = self.ledger.as_ref() else {
            return CREATE_FIRST.to_string();
        };
        match ledger.find(target) {
            Some(index) => format!("Found product at index: {index}"),
            None => "Not found.".to_string(),
        }
    }

    /// Menu 6: show occupied size and total capacity.
    pub fn show_counts(&self) -> String {
        let Some(ledger) = self.ledger.as_ref() else {
            return CREATE_FIRST.to_string();
        };
        format!("Size: {}, Capacity: {}", ledger.len(), ledger.capacity())
    }

    /// Menu 7: reverse the product list in place.
    pub fn reverse(&mut self) -> String {
        let Some(ledger) = self.ledger.as_mut() else {
            return CREATE_FIRST.to_string();
        };
        ledger.reverse();
        "Stock list reversed.".to_string()
    }

    /// Menu 8: min / max / average over all stock values.
    pub fn show_stats(&self) -> String {
        let Some(ledger) = self.ledger.as_ref() else {
            return CREATE_FIRST.to_string();
        };
        match ledger.stats() {
            Ok(stats) => format!(
                "Inventory Statistics:\nMinimum stock = {}\nMaximum stock = {}\nAverage stock = {:.2}",
                stats.min, stats.max, stats.average
            ),
            Err(_) => "Inventory is empty.".to_string(),
        }
    }

    /// Menu 9: adjust reserved capacity (can grow or shrink).
    pub fn reserve(&mut self, new_capacity: i32) -> String {
        let Some(ledger) = self.ledger.as_mut() else {
            return CREATE_FIRST.to_string();
        };
        match ledger.reserve(new_capacity) {
            Ok(()) => format!("Inventory capacity updated to {}.", ledger.capacity()),
            Err(err) => format!("Cannot update capacity: {err}."),
        }
    }

    /// Menu 10: list all stock values in order.
    pub fn list(&self) -> String {
        let Some(ledger) = self.ledger.as_ref() else {
            return CREATE_FIRST.to_string();
        };
        let values = ledger
            .snapshot()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Stock List (size = {} / capacity = {}):\n[{values}]",
            ledger.len(),
            ledger.capacity()
        )
    }

    /// Menu 11: sort the stock values ascending.
    pub fn sort(&mut self) -> String {
        let Some(ledger) = self.ledger.as_mut() else {
            return CREATE_FIRST.to_string();
        };
        ledger.sort_ascending();
        "Inventory sorted successfully.".to_string()
    }
}
