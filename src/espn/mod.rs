//! ESPN Fantasy Basketball adapter: raw payloads, HTTP client and the
//! domain model the rest of the crate works with.

pub mod compute;
pub mod credentials;
pub mod http;
pub mod league;
pub mod stats_map;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use compute::{category_weights, CategoryMap};
pub use credentials::LeagueCredentials;
pub use http::EspnClient;
pub use league::{League, LeagueSource, Player, StatLine, StatSplit, Team};
