// crates/geoblock-core/src/adjacency.rs

//! # Adjacency
//!
//! Computes the cell next to a geocode in one cardinal direction, at the same
//! precision.
//!
//! The last symbol is swapped through the neighbor table for its parity. When
//! that symbol sits on the border of its parent cell in the requested
//! direction, the parent must move too, so the step carries one symbol to the
//! left, where it repeats with the opposite parity. The carry stops at the
//! first non-border symbol or at the first character; a border symbol in
//! first position wraps around without carrying (there is no ancestor).

use crate::direction::Direction;
use crate::error::{GeoError, Result};
use crate::tables;

/// Returns the geocode adjacent to `geocode` in `direction`.
///
/// The input is lowercased first. Fails with [`GeoError::EmptyGeocode`] on an
/// empty string and [`GeoError::InvalidSymbol`] if any character is outside
/// the base32 alphabet. Length is not capped here; callers bound precision
/// before calling.
///
/// # Examples
///
/// ```rust
/// use geoblock_core::{adjacent, Direction};
///
/// assert_eq!(adjacent("b", Direction::North).unwrap(), "0");
/// assert_eq!(adjacent("u33dc", Direction::East).unwrap(), "u33df");
/// ```
pub fn adjacent(geocode: &str, direction: Direction) -> Result<String> {
    let mut bytes = normalized_bytes(geocode)?;

    let mut idx = bytes.len() - 1;
    loop {
        // Prefix ending here has length idx + 1.
        let step = tables::step(direction, idx + 1);
        let c = bytes[idx];
        let carry = step.is_border(c) && idx > 0;
        // normalized_bytes guarantees every byte is in the alphabet.
        bytes[idx] = step.replace(c).ok_or(GeoError::InvalidSymbol {
            symbol: c as char,
            position: idx,
        })?;
        if !carry {
            break;
        }
        tracing::trace!(geocode, %direction, position = idx, "border carry");
        idx -= 1;
    }

    Ok(bytes.into_iter().map(char::from).collect())
}

/// Parses `direction` and resolves as [`adjacent`].
///
/// For callers holding raw request strings; an empty or unknown direction is
/// [`GeoError::InvalidDirection`].
pub fn adjacent_str(geocode: &str, direction: &str) -> Result<String> {
    if geocode.is_empty() {
        return Err(GeoError::EmptyGeocode);
    }
    adjacent(geocode, direction.parse()?)
}

/// Lowercases and checks every symbol against the alphabet.
fn normalized_bytes(geocode: &str) -> Result<Vec<u8>> {
    if geocode.is_empty() {
        return Err(GeoError::EmptyGeocode);
    }
    geocode
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            let lower = ch.to_ascii_lowercase();
            if tables::is_base32(lower) {
                Ok(lower as u8)
            } else {
                Err(GeoError::InvalidSymbol {
                    symbol: ch,
                    position,
                })
            }
        })
        .collect()
}
