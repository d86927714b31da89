//! Database CRUD operations.

pub mod machines;
pub mod stats;
