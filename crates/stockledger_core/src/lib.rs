//! # STOCKLEDGER Core
//!
//! Capacity-managed stock containers for the STOCKLEDGER tools.
//!
//! ## Design Principles
//!
//! 1. **Explicit capacity** - occupied length and allocated slots are
//!    tracked separately; growth policy is doubling on full
//! 2. **No hidden state** - every operation is a pure function of current
//!    state plus inputs, with an explicit success/failure outcome
//! 3. **Failure leaves state intact** - a failed reserve/append/insert is
//!    never observed as a partial write
//! 4. **No user-facing text** - the core reports outcomes; callers print
//!
//! ## Example
//!
//! ```rust,ignore
//! use stockledger_core::StockLedger;
//!
//! let mut ledger = StockLedger::with_capacity(4)?;
//! ledger.append(120)?;
//! ledger.insert_at(0, 55)?;
//! let stats = ledger.stats()?;
//! assert_eq!(stats.min, 55);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod grid;
pub mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use grid::{StockGrid, NUM_ITEMS, NUM_STORES};
pub use ledger::{LedgerStats, StockLedger, DEFAULT_SLOT_LIMIT};
