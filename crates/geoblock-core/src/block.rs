// crates/geoblock-core/src/block.rs

//! # Blocks
//!
//! A block is a geocode prefix at a fixed precision (5 by default) and the
//! unit of change tracking: "did anything under this prefix change since T"
//! is answered per block, and area queries fan out over a block and its
//! eight neighbors.

use crate::error::Result;
use crate::geocode::Geocode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A truncated geocode used as a range-query prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block(Geocode);

impl Block {
    /// Truncates `geocode` to `precision`; a shorter geocode is kept whole.
    pub fn new(geocode: &Geocode, precision: i32) -> Self {
        Block(geocode.with_max_precision(precision))
    }

    pub fn geocode(&self) -> &Geocode {
        &self.0
    }

    pub fn precision(&self) -> usize {
        self.0.precision()
    }

    /// SQL `LIKE` pattern matching every geocode inside this block.
    ///
    /// No escaping is done: the geocode alphabet has no `%` or `_`, so the
    /// pattern is only safe for blocks built from validated geocodes.
    pub fn like_pattern(&self) -> String {
        format!("{}%", self.0)
    }

    /// In-memory equivalent of matching [`Block::like_pattern`].
    pub fn contains(&self, geocode: &Geocode) -> bool {
        self.0.covers(geocode)
    }

    /// This block followed by its neighbors in `[n, ne, e, se, s, sw, w, nw]`
    /// order, all at this block's precision.
    pub fn surrounding(&self) -> Result<[Block; 9]> {
        let [n, ne, e, se, s, sw, w, nw] = self.0.neighbors()?;
        Ok([self.0.clone(), n, ne, e, se, s, sw, w, nw].map(Block))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Block {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
