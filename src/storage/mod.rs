//! Storage layer for the player statistics cache
//!
//! This module wraps a single SQLite table whose columns are discovered from
//! live data:
//! - `models`: Row, report and schema status types
//! - `schema`: Connection handling and schema creation
//! - `queries`: Refresh and lookup operations

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::{quote_identifier, StatsStore, NAME_COLUMN, STATS_TABLE};
