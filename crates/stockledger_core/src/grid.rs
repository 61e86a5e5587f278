//! # Stock Grid
//!
//! Fixed-size per-store stock block: 10 stores, 5 items each, no resizing.
//!
//! The whole grid lives in one contiguous row-major block, so store `s`
//! item `i` is slot `s * NUM_ITEMS + i`. All quantities start at zero.

use crate::error::{LedgerError, LedgerResult};

/// Number of stores in the grid.
pub const NUM_STORES: usize = 10;

/// Number of items tracked per store.
pub const NUM_ITEMS: usize = 5;

/// A fixed 10x5 block of stock quantities.
#[derive(Clone, Debug)]
pub struct StockGrid {
    /// Row-major storage, length `NUM_STORES * NUM_ITEMS`.
    block: Box<[i32]>,
}

impl StockGrid {
    /// Creates a grid with every quantity at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            block: vec![0; NUM_STORES * NUM_ITEMS].into_boxed_slice(),
        }
    }

    /// Returns the stock level for one item in one store.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::OutOfBounds` if `store` or `item` falls
    /// outside the grid.
    pub fn get(&self, store: i32, item: i32) -> LedgerResult<i32> {
        let slot = self.slot(store, item)?;
        Ok(self.block[slot])
    }

    /// Returns all item levels for one store, in item order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::OutOfBounds` if `store` falls outside the grid.
    pub fn store_row(&self, store: i32) -> LedgerResult<&[i32]> {
        let s = Self::checked_axis(store, NUM_STORES)?;
        let start = s * NUM_ITEMS;
        Ok(&self.block[start..start + NUM_ITEMS])
    }

    /// Adds `quantity` units of stock, returning the new level.
    ///
    /// The addition saturates at `i32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidQuantity` if `quantity <= 0`, or
    /// `LedgerError::OutOfBounds` for a bad store/item index.
    pub fn add_stock(&mut self, store: i32, item: i32, quantity: i32) -> LedgerResult<i32> {
        if quantity <= 0 {
            return Err(LedgerError::InvalidQuantity {
                requested: quantity,
            });
        }
        let slot = self.slot(store, item)?;
        self.block[slot] = self.block[slot].saturating_add(quantity);
        Ok(self.block[slot])
    }

    /// Removes `quantity` units of stock, returning the new level.
    ///
    /// A reduction past zero clamps the level to zero rather than failing.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidQuantity` if `quantity <= 0`, or
    /// `LedgerError::OutOfBounds` for a bad store/item index.
    pub fn reduce_stock(&mut self, store: i32, item: i32, quantity: i32) -> LedgerResult<i32> {
        if quantity <= 0 {
            return Err(LedgerError::InvalidQuantity {
                requested: quantity,
            });
        }
        let slot = self.slot(store, item)?;
        if quantity > self.block[slot] {
            tracing::debug!(store, item, level = self.block[slot], quantity, "reduction clamped to zero");
            self.block[slot] = 0;
        } else {
            self.block[slot] -= quantity;
        }
        Ok(self.block[slot])
    }

    /// Resolves a `(store, item)` pair to a slot in the block.
    fn slot(&self, store: i32, item: i32) -> LedgerResult<usize> {
        let s = Self::checked_axis(store, NUM_STORES)?;
        let i = Self::checked_axis(item, NUM_ITEMS)?;
        Ok(s * NUM_ITEMS + i)
    }

    /// Validates one signed axis index against its bound.
    fn checked_axis(index: i32, bound: usize) -> LedgerResult<usize> {
        match usize::try_from(index) {
            Ok(idx) if idx < bound => Ok(idx),
            _ => Err(LedgerError::OutOfBounds { index, len: bound }),
        }
    }
}

impl Default for StockGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_starts_at_zero() {
        let grid = StockGrid::new();
        assert_eq!(grid.get(0, 0).unwrap(), 0);
        assert_eq!(grid.get(9, 4).unwrap(), 0);
    }

    #[test]
    fn test_add_and_get() {
        let mut grid = StockGrid::new();
        assert_eq!(grid.add_stock(2, 3, 10).unwrap(), 10);
        assert_eq!(grid.add_stock(2, 3, 5).unwrap(), 15);
        assert_eq!(grid.get(2, 3).unwrap(), 15);
        // neighbouring slots untouched
        assert_eq!(grid.get(2, 2).unwrap(), 0);
        assert_eq!(grid.get(3, 3).unwrap(), 0);
    }

    #[test]
    fn test_reduce_clamps_to_zero() {
        let mut grid = StockGrid::new();
        grid.add_stock(1, 1, 8).unwrap();
        assert_eq!(grid.reduce_stock(1, 1, 3).unwrap(), 5);
        assert_eq!(grid.reduce_stock(1, 1, 100).unwrap(), 0);
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let mut grid = StockGrid::new();
        for bad in [0, -5] {
            assert_eq!(
                grid.add_stock(0, 0, bad).unwrap_err(),
                LedgerError::InvalidQuantity { requested: bad }
            );
            assert_eq!(
                grid.reduce_stock(0, 0, bad).unwrap_err(),
                LedgerError::InvalidQuantity { requested: bad }
            );
        }
    }

    #[test]
    fn test_rejects_out_of_grid_indices() {
        let mut grid = StockGrid::new();
        assert!(matches!(
            grid.get(10, 0),
            Err(LedgerError::OutOfBounds { index: 10, .. })
        ));
        assert!(matches!(
            grid.get(0, 5),
            Err(LedgerError::OutOfBounds { index: 5, .. })
        ));
        assert!(grid.add_stock(-1, 0, 1).is_err());
        assert!(grid.reduce_stock(0, -1, 1).is_err());
    }

    #[test]
    fn test_store_row() {
        let mut grid = StockGrid::new();
        grid.add_stock(4, 0, 1).unwrap();
        grid.add_stock(4, 4, 9).unwrap();
        assert_eq!(grid.store_row(4).unwrap(), &[1, 0, 0, 0, 9]);
        assert!(grid.store_row(10).is_err());
    }
}
