//! # Stock Ledger
//!
//! A growable array of stock quantities with explicit capacity management.
//!
//! The ledger owns a single contiguous region of `capacity` slots of which
//! the first `len` hold meaningful values. `capacity == 0` means no region
//! is allocated at all. Growth doubles the capacity (minimum 1) whenever an
//! insertion finds the region full; `reserve` can also grow or shrink the
//! region explicitly, truncating occupied values when shrunk below `len`.
//!
//! ## Invariants
//!
//! - `len <= capacity <= limit` at all times
//! - a failed operation leaves the ledger exactly as it was
//! - the region is released on drop, and `release` is idempotent
//!
//! # Example
//!
//! ```rust,ignore
//! let mut ledger = StockLedger::with_capacity(4)?;
//! ledger.append(120)?;
//! ledger.append(55)?;
//! ledger.sort_ascending();
//! assert_eq!(ledger.items(), &[55, 120]);
//! ```

use crate::error::{LedgerError, LedgerResult};

/// Default ceiling on the number of slots a single ledger may reserve.
///
/// Safe Rust treats a refused allocation as fatal, so "the underlying
/// memory request could not be satisfied" is surfaced through this
/// per-instance bound instead.
pub const DEFAULT_SLOT_LIMIT: usize = 1 << 20;

/// Minimum / maximum / arithmetic mean over the occupied slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LedgerStats {
    /// Smallest stock quantity.
    pub min: i32,
    /// Largest stock quantity.
    pub max: i32,
    /// Arithmetic mean of all stock quantities.
    pub average: f64,
}

/// A growable, contiguous sequence of stock quantities.
///
/// Capacity and index parameters cross this API as `i32` because the
/// surrounding callers work with raw signed integers; negative requests
/// are rejected here rather than silently wrapped at the boundary.
///
/// # Thread Safety
///
/// Mutations perform multi-step region copies and are NOT safe to
/// interleave. Callers in threaded contexts must serialize all access to
/// a given instance.
#[derive(Clone, Debug)]
pub struct StockLedger {
    /// The owned region; its length is the capacity.
    slots: Box<[i32]>,
    /// Number of occupied slots.
    len: usize,
    /// Ceiling on reservations for this instance.
    limit: usize,
}

impl StockLedger {
    /// Creates an empty, unallocated ledger with the default slot limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new().into_boxed_slice(),
            len: 0,
            limit: DEFAULT_SLOT_LIMIT,
        }
    }

    /// Creates a ledger with `initial_capacity` slots allocated up front.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidCapacity` if `initial_capacity <= 0`,
    /// or `LedgerError::AllocationFailed` if it exceeds the default limit.
    pub fn with_capacity(initial_capacity: i32) -> LedgerResult<Self> {
        Self::with_capacity_and_limit(initial_capacity, DEFAULT_SLOT_LIMIT)
    }

    /// Creates a ledger with an explicit slot limit.
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - slots to allocate immediately, must be positive
    /// * `limit` - ceiling on all future reservations for this instance
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidCapacity` if `initial_capacity <= 0`,
    /// or `LedgerError::AllocationFailed` if it exceeds `limit`.
    pub fn with_capacity_and_limit(initial_capacity: i32, limit: usize) -> LedgerResult<Self> {
        let Ok(capacity) = usize::try_from(initial_capacity) else {
            return Err(LedgerError::InvalidCapacity {
                requested: initial_capacity,
            });
        };
        if capacity == 0 {
            return Err(LedgerError::InvalidCapacity {
                requested: initial_capacity,
            });
        }
        if capacity > limit {
            return Err(LedgerError::AllocationFailed {
                requested: capacity,
                limit,
            });
        }
        tracing::debug!(capacity, limit, "allocating ledger region");
        Ok(Self {
            slots: vec![0; capacity].into_boxed_slice(),
            len: 0,
            limit,
        })
    }

    /// Returns the number of occupied slots.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no slots are occupied.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if a region is currently allocated.
    #[inline]
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.capacity() > 0
    }

    /// Returns the reservation ceiling for this instance.
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the occupied slots in order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[i32] {
        &self.slots[..self.len]
    }

    /// Returns an owned copy of the occupied slots, for display or export.
    #[must_use]
    pub fn snapshot(&self) -> Vec<i32> {
        self.items().to_vec()
    }

    /// Releases the owned region and resets to the unallocated state.
    ///
    /// Safe to call any number of times; releasing an already-empty
    /// ledger is a no-op.
    pub fn release(&mut self) {
        if self.is_allocated() {
            tracing::debug!(capacity = self.capacity(), "releasing ledger region");
        }
        self.slots = Vec::new().into_boxed_slice();
        self.len = 0;
    }

    /// Grows or shrinks the allocated region to exactly `new_capacity` slots.
    ///
    /// `new_capacity == capacity` is a no-op; `new_capacity == 0` is
    /// equivalent to [`release`](Self::release). Shrinking below the
    /// occupied length silently drops the trailing values - a lossy
    /// truncation, not an error.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidCapacity` if `new_capacity < 0`, or
    /// `LedgerError::AllocationFailed` if it exceeds the slot limit. On
    /// failure the old region is left intact.
    pub fn reserve(&mut self, new_capacity: i32) -> LedgerResult<()> {
        let Ok(capacity) = usize::try_from(new_capacity) else {
            return Err(LedgerError::InvalidCapacity {
                requested: new_capacity,
            });
        };
        if capacity == self.capacity() {
            return Ok(());
        }
        if capacity == 0 {
            self.release();
            return Ok(());
        }
        self.reallocate(capacity)
    }

    /// Appends a stock quantity at the end, growing the region if full.
    ///
    /// Growth doubles the capacity (minimum 1) through the same mechanism
    /// as [`reserve`](Self::reserve). Amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::AllocationFailed` if the required growth
    /// would exceed the slot limit; the ledger is unchanged.
    pub fn append(&mut self, value: i32) -> LedgerResult<()> {
        self.ensure_room_for_one()?;
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Inserts a stock quantity at `index`, shifting later values right.
    ///
    /// `index == len` is a valid append-equivalent. O(n) due to the shift.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::OutOfBounds` if `index < 0` or `index > len`,
    /// or `LedgerError::AllocationFailed` if the required growth would
    /// exceed the slot limit. The ledger is unchanged on failure.
    pub fn insert_at(&mut self, index: i32, value: i32) -> LedgerResult<()> {
        let idx = match usize::try_from(index) {
            Ok(idx) if idx <= self.len => idx,
            _ => {
                return Err(LedgerError::OutOfBounds {
                    index,
                    len: self.len,
                })
            }
        };
        self.ensure_room_for_one()?;
        self.slots.copy_within(idx..self.len, idx + 1);
        self.slots[idx] = value;
        self.len += 1;
        Ok(())
    }

    /// Deletes the stock quantity at `index`, shifting later values left.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::OutOfBounds` if `index < 0` or `index >= len`;
    /// the ledger is unchanged.
    pub fn delete_at(&mut self, index: i32) -> LedgerResult<()> {
        let idx = match usize::try_from(index) {
            Ok(idx) if idx < self.len => idx,
            _ => {
                return Err(LedgerError::OutOfBounds {
                    index,
                    len: self.len,
                })
            }
        };
        self.slots.copy_within(idx + 1..self.len, idx);
        self.len -= 1;
        Ok(())
    }

    /// Finds the first slot holding `target`.
    ///
    /// Linear scan from index 0; `None` means the value is absent, which
    /// is a normal negative result rather than a failure.
    #[must_use]
    pub fn find(&self, target: i32) -> Option<usize> {
        self.items().iter().position(|&v| v == target)
    }

    /// Sorts the occupied slots into non-decreasing order.
    ///
    /// Duplicate quantities are indistinguishable, so an unstable sort
    /// is sufficient.
    pub fn sort_ascending(&mut self) {
        self.slots[..self.len].sort_unstable();
    }

    /// Reverses the occupied slots in place.
    pub fn reverse(&mut self) {
        self.slots[..self.len].reverse();
    }

    /// Computes minimum, maximum and arithmetic mean over the occupied slots.
    ///
    /// The running sum uses `i64` so large ledgers cannot overflow the
    /// element type.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Empty` if no slots are occupied.
    pub fn stats(&self) -> LedgerResult<LedgerStats> {
        if self.len == 0 {
            return Err(LedgerError::Empty);
        }
        let mut min = self.slots[0];
        let mut max = self.slots[0];
        let mut sum: i64 = 0;
        for &value in self.items() {
            min = min.min(value);
            max = max.max(value);
            sum += i64::from(value);
        }
        #[allow(clippy::cast_precision_loss)]
        let average = sum as f64 / self.len as f64;
        Ok(LedgerStats { min, max, average })
    }

    /// Makes room for one more element, doubling the capacity if full.
    ///
    /// The doubled target clamps to the slot limit; only a ledger that is
    /// both full and already at the limit fails.
    fn ensure_room_for_one(&mut self) -> LedgerResult<()> {
        if self.len < self.capacity() {
            return Ok(());
        }
        let doubled = if self.capacity() == 0 {
            1
        } else {
            self.capacity() * 2
        };
        let target = doubled.min(self.limit);
        if target <= self.capacity() {
            return Err(LedgerError::AllocationFailed {
                requested: doubled,
                limit: self.limit,
            });
        }
        tracing::debug!(from = self.capacity(), to = target, "growing ledger region");
        self.reallocate(target)
    }

    /// Swaps the region for one of `new_capacity` slots, copying the
    /// occupied prefix that still fits.
    fn reallocate(&mut self, new_capacity: usize) -> LedgerResult<()> {
        if new_capacity > self.limit {
            return Err(LedgerError::AllocationFailed {
                requested: new_capacity,
                limit: self.limit,
            });
        }
        if new_capacity < self.len {
            tracing::warn!(
                occupied = self.len,
                new_capacity,
                "shrinking below occupied length, trailing stock values dropped"
            );
        }
        let mut region = vec![0; new_capacity].into_boxed_slice();
        let keep = self.len.min(new_capacity);
        region[..keep].copy_from_slice(&self.slots[..keep]);
        self.slots = region;
        self.len = keep;
        Ok(())
    }
}

impl Default for StockLedger {
    fn default() -> Self {
        Self::new()
    }
}
