// crates/geoblock-core/src/direction.rs

//! Cardinal directions accepted by the adjacency engine, and the eight
//! compass labels used to name a neighborhood.

use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four primitive steps. Diagonals are never primitive; see
/// [`Compass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "n", alias = "north")]
    North,
    #[serde(rename = "s", alias = "south")]
    South,
    #[serde(rename = "e", alias = "east")]
    East,
    #[serde(rename = "w", alias = "west")]
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Row of this direction in the adjacency tables.
    #[inline]
    pub(crate) const fn table_row(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single lowercase letter, as used in query strings.
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Direction {
    type Err = GeoError;

    /// Accepts `n`/`s`/`e`/`w` or the full word, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let word = s.trim();
        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Direction::try_from(c).map_err(|_| GeoError::InvalidDirection(s.to_string()));
        }
        match word.to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            _ => Err(GeoError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = GeoError;

    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'n' => Ok(Direction::North),
            's' => Ok(Direction::South),
            'e' => Ok(Direction::East),
            'w' => Ok(Direction::West),
            _ => Err(GeoError::InvalidDirection(c.to_string())),
        }
    }
}

/// Label of a cell in a 3×3 neighborhood, center excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    /// Clockwise from north; the order of [`Neighbors::to_array`](crate::Neighbors::to_array).
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Compass::N => "n",
            Compass::NE => "ne",
            Compass::E => "e",
            Compass::SE => "se",
            Compass::S => "s",
            Compass::SW => "sw",
            Compass::W => "w",
            Compass::NW => "nw",
        }
    }

    /// The one or two cardinal steps reaching this cell, vertical step first.
    pub fn steps(self) -> (Direction, Option<Direction>) {
        match self {
            Compass::N => (Direction::North, None),
            Compass::NE => (Direction::North, Some(Direction::East)),
            Compass::E => (Direction::East, None),
            Compass::SE => (Direction::South, Some(Direction::East)),
            Compass::S => (Direction::South, None),
            Compass::SW => (Direction::South, Some(Direction::West)),
            Compass::W => (Direction::West, None),
            Compass::NW => (Direction::North, Some(Direction::West)),
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
