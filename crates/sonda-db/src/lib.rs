//! Sonda DB - SQLite persistence for the machine archive.

mod database;
mod error;
mod migrations;
mod operations;

pub use database::Database;
pub use error::{DbError, DbResult};
pub use operations::stats::ArchiveStats;
