//! # STOCKLEDGER CLI
//!
//! Interactive menu front-ends for the stock containers.
//!
//! The binaries own all prompting, validation of raw input, and printing.
//! Command handlers live on explicit session objects and return the
//! user-facing message for each outcome, so the mapping from container
//! results to text is testable without a terminal.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod grid_session;
pub mod input;
pub mod session;

pub use config::CliConfig;
pub use grid_session::GridSession;
pub use session::Session;
