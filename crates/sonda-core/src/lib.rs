//! Sonda Core - Domain types for the Sonda manual analyzer.

mod types;

pub use types::*;
