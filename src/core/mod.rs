//! Core utilities for the ESPN Fantasy Basketball assistant
//!
//! - `http`: request headers for ESPN reads
//! - `filters`: `x-fantasy-filter` structures for the player pool

pub mod filters;
pub mod http;

pub use filters::{FreeAgentFilter, IntoHeaderValue, Val};
pub use http::league_header_map;
