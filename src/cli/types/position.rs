//! Fantasy basketball position types and utilities.

use crate::error::FbbError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy basketball player positions.
///
/// Only the five primary positions are modelled; combo slots (G, F, UT) are
/// roster constructs and never a player's default position.
///
/// # Examples
///
/// ```rust
/// use espn_fbb::Position;
///
/// let pg: Position = "pg".parse().unwrap();
/// assert_eq!(pg, Position::PG);
/// assert_eq!(pg.label(), "POINT GUARD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PG,
        Position::SG,
        Position::SF,
        Position::PF,
        Position::C,
    ];

    /// ESPN lineup slot id used by the free-agent `filterSlotIds` filter.
    pub fn slot_id(&self) -> u8 {
        match self {
            Position::PG => 0,
            Position::SG => 1,
            Position::SF => 2,
            Position::PF => 3,
            Position::C => 4,
        }
    }

    /// Map a player's `defaultPositionId` (1-based) to a position.
    pub fn from_default_position_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Position::PG),
            2 => Some(Position::SG),
            3 => Some(Position::SF),
            4 => Some(Position::PF),
            5 => Some(Position::C),
            _ => None,
        }
    }

    /// Human-readable heading used by the free-agent report.
    pub fn label(&self) -> &'static str {
        match self {
            Position::PG => "POINT GUARD",
            Position::SG => "SHOOTING GUARD",
            Position::SF => "SMALL FORWARD",
            Position::PF => "POWER FORWARD",
            Position::C => "CENTER",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FbbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PG" | "POINT GUARD" => Ok(Position::PG),
            "SG" | "SHOOTING GUARD" => Ok(Position::SG),
            "SF" | "SMALL FORWARD" => Ok(Position::SF),
            "PF" | "POWER FORWARD" => Ok(Position::PF),
            "C" | "CENTER" => Ok(Position::C),
            _ => Err(FbbError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
