// crates/geoblock-core/src/geocode.rs

//! The [`Geocode`] value type.

use crate::adjacency::adjacent;
use crate::direction::Direction;
use crate::error::Result;
use crate::neighbors::{self, Neighbors};
use crate::tables::EXCLUDED;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A lowercase geohash string.
///
/// Construction only folds ASCII letters to lowercase. Anything else, including an empty or
/// non-alphabet string, is stored as given so it can still be echoed back in
/// error messages; call [`Geocode::is_valid_and_has_precision`] before
/// trusting the value for a spatial operation.
///
/// # Examples
///
/// ```rust
/// use geoblock_core::Geocode;
///
/// let g = Geocode::new("U33DC1V");
/// assert_eq!(g.as_str(), "u33dc1v");
/// assert!(g.is_valid_and_has_precision(4));
/// assert_eq!(g.with_max_precision(5).as_str(), "u33dc");
///
/// let bad = Geocode::new("ail0");
/// assert!(!bad.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Geocode(String);

impl Geocode {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Geocode(raw.as_ref().to_ascii_lowercase())
    }

    /// Wraps output of the adjacency engine, which is already lowercase.
    pub(crate) fn from_canonical(s: String) -> Self {
        debug_assert!(!s.chars().any(|c| c.is_uppercase()));
        Geocode(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of characters.
    pub fn precision(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-empty, ASCII alphanumeric, and free of `a`, `i`, `l`, `o`.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self.0.chars().all(|c| c.is_ascii_alphanumeric())
            && !self.0.chars().any(|c| EXCLUDED.contains(c))
    }

    /// `true` iff `min` is non-negative and the precision is at least `min`.
    pub fn has_min_precision(&self, min: i32) -> bool {
        usize::try_from(min).is_ok_and(|min| self.precision() >= min)
    }

    /// The admission gate for untrusted input.
    pub fn is_valid_and_has_precision(&self, min: i32) -> bool {
        self.is_valid() && self.has_min_precision(min)
    }

    /// First `n` characters, or `self` unchanged when shorter than `n` (or
    /// when `n` is negative). Never pads.
    pub fn with_max_precision(&self, n: i32) -> Geocode {
        match usize::try_from(n) {
            Ok(n) if self.precision() >= n => Geocode(self.0.chars().take(n).collect()),
            _ => self.clone(),
        }
    }

    /// The enclosing cell one level up; `None` for a single character or
    /// empty geocode.
    pub fn parent(&self) -> Option<Geocode> {
        let mut chars = self.0.chars();
        chars.next_back()?;
        let rest = chars.as_str();
        (!rest.is_empty()).then(|| Geocode(rest.to_string()))
    }

    /// `true` if `other` lies inside this cell, i.e. starts with it.
    pub fn covers(&self, other: &Geocode) -> bool {
        other.0.starts_with(&self.0)
    }

    pub fn adjacent(&self, direction: Direction) -> Result<Geocode> {
        adjacent(&self.0, direction).map(Geocode::from_canonical)
    }

    pub fn neighbors_labeled(&self) -> Result<Neighbors> {
        neighbors::neighbors_labeled(&self.0)
    }

    /// `[n, ne, e, se, s, sw, w, nw]`
    pub fn neighbors(&self) -> Result<[Geocode; 8]> {
        neighbors::neighbors(&self.0)
    }

    /// `[n, e, s, w]`
    pub fn cardinal_neighbors(&self) -> Result<[Geocode; 4]> {
        neighbors::cardinal_neighbors(&self.0)
    }
}

impl fmt::Display for Geocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Geocode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Geocode {
    fn from(s: &str) -> Self {
        Geocode::new(s)
    }
}

impl From<String> for Geocode {
    fn from(s: String) -> Self {
        Geocode::new(s)
    }
}

impl From<Geocode> for String {
    fn from(g: Geocode) -> Self {
        g.0
    }
}

impl PartialEq<str> for Geocode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Geocode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::BASE32;

    #[test]
    fn test_construction_lowercases_only() {
        let g = Geocode::new("U33Dc");
        assert_eq!(g.as_str(), "u33dc");
        // Invalid input is kept verbatim (lowercased) for echoing.
        assert_eq!(Geocode::new("Hello World!").as_str(), "hello world!");
    }

    #[test]
    fn test_non_ascii_is_not_folded_into_alphabet() {
        // KELVIN SIGN lowercases to ASCII 'k' under Unicode rules.
        let g = Geocode::new("u33d\u{212A}");
        assert_eq!(g.as_str(), "u33d\u{212A}");
        assert!(!g.is_valid());
        assert!(!g.is_valid_and_has_precision(4));
        assert!(crate::adjacency::adjacent_str("u33d\u{212A}", "n").is_err());
        assert_eq!(Geocode::new("\u{130}").as_str(), "\u{130}");
    }

    #[test]
    fn test_validity() {
        assert!(!Geocode::new("").is_valid());
        assert!(!Geocode::new("a1").is_valid());
        assert!(!Geocode::new("i0").is_valid());
        assert!(!Geocode::new("L0").is_valid());
        assert!(!Geocode::new("0O").is_valid());
        assert!(!Geocode::new("u3 3").is_valid());
        assert!(!Geocode::new("u3-3").is_valid());
        assert!(Geocode::new("b0c1").is_valid());
        assert!(Geocode::new("B0C1").is_valid());
        assert!(Geocode::new(BASE32).is_valid());
    }

    #[test]
    fn test_every_single_char_against_alphabet() {
        for b in 0u8..128 {
            let c = b as char;
            let g = Geocode::new(c.to_string());
            let expected = BASE32.contains(c.to_ascii_lowercase());
            assert_eq!(g.is_valid(), expected, "{c:?}");
        }
    }

    #[test]
    fn test_precision_monotonic() {
        let g = Geocode::new("u33dc1");
        for k in 0..=6 {
            assert!(g.has_min_precision(k), "{k}");
        }
        for k in 7..12 {
            assert!(!g.has_min_precision(k), "{k}");
        }
    }

    #[test]
    fn test_negative_precision_never_satisfied() {
        let g = Geocode::new("u33dc1");
        assert!(!g.has_min_precision(-1));
        assert!(!g.is_valid_and_has_precision(-3));
        assert_eq!(g.with_max_precision(-2), g);
    }

    #[test]
    fn test_validity_and_precision_gate() {
        assert!(Geocode::new("u33d").is_valid_and_has_precision(4));
        assert!(!Geocode::new("u33").is_valid_and_has_precision(4));
        assert!(!Geocode::new("u3ad").is_valid_and_has_precision(4));
        assert!(Geocode::new("u33dc1v0x").is_valid_and_has_precision(9));
    }

    #[test]
    fn test_truncation() {
        let g = Geocode::new("u33dc1v0x");
        let five = g.with_max_precision(5);
        assert_eq!(five.as_str(), "u33dc");
        assert_eq!(five.with_max_precision(5), five);
        assert!(five.covers(&g));
        assert!(!g.covers(&five));
        // Shorter input is returned unchanged, never padded.
        assert_eq!(Geocode::new("u33").with_max_precision(5).as_str(), "u33");
        assert_eq!(g.with_max_precision(0).as_str(), "");
    }

    #[test]
    fn test_truncation_never_grows() {
        for raw in ["", "b", "u33dc", "u33dc1v0x"] {
            let g = Geocode::new(raw);
            for n in -1..12 {
                let t = g.with_max_precision(n);
                assert!(t.precision() <= g.precision());
                assert_eq!(t.with_max_precision(n), t);
            }
        }
    }

    #[test]
    fn test_parent() {
        assert_eq!(Geocode::new("u33dc").parent(), Some(Geocode::new("u33d")));
        assert_eq!(Geocode::new("u").parent(), None);
        assert_eq!(Geocode::new("").parent(), None);
    }

    #[test]
    fn test_adjacent_delegates() {
        let g = Geocode::new("B");
        assert_eq!(g.adjacent(Direction::North).unwrap(), "0");
        assert_eq!(g.adjacent(Direction::West).unwrap(), "z");
        assert!(Geocode::new("").adjacent(Direction::North).is_err());
    }

    #[test]
    fn test_serde_normalizes_case() {
        let g: Geocode = serde_json::from_str("\"U33DC\"").unwrap();
        assert_eq!(g.as_str(), "u33dc");
        assert_eq!(serde_json::to_string(&g).unwrap(), "\"u33dc\"");
    }
}
