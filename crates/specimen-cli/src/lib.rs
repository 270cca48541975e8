// this_file: crates/specimen-cli/src/lib.rs

//! Command-line driver for specimen sheets
//!
//! The `specimen` binary lives in `main.rs`; the batch driver and font
//! discovery are exposed here so they can be exercised without a process.

pub mod batch;
pub mod cli;
pub mod walk;

pub use batch::{BatchRunner, BatchSummary};
pub use cli::Cli;
