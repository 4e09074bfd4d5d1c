// crates/geoblock-core/src/tables.rs

//! Geohash alphabet and adjacency lookup tables.
//!
//! Each table row is indexed by `[direction][parity]`, where parity is the
//! length of the geocode prefix ending at the symbol being replaced, mod 2.
//! Direction rows follow [`Direction::table_row`]: n, s, e, w.
//!
//! Neighbor rows are permutations of [`BASE32`]: the replacement for symbol
//! `c` is `BASE32[row.find(c)]`. Border rows list the symbols sitting on the
//! edge of their parent cell in that direction; stepping off one of them
//! carries into the parent.

use crate::direction::Direction;
use once_cell::sync::Lazy;

/// The 32-symbol geocode alphabet, in value order.
pub const BASE32: &str = "0123456789bcdefghjkmnpqrstuvwxyz";

/// Letters left out of the alphabet to avoid visual ambiguity.
pub const EXCLUDED: &str = "ailo";

pub const NEIGHBOR: [[&str; 2]; 4] = [
    // n
    [
        "p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        "bc01fg45238967deuvhjyznpkmstqrwx",
    ],
    // s
    [
        "14365h7k9dcfesgujnmqp0r2twvyx8zb",
        "238967debc01fg45kmstqrwxuvhjyznp",
    ],
    // e
    [
        "bc01fg45238967deuvhjyznpkmstqrwx",
        "p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    ],
    // w
    [
        "238967debc01fg45kmstqrwxuvhjyznp",
        "14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
];

pub const BORDER: [[&str; 2]; 4] = [
    ["prxz", "bcfguvyz"],
    ["028b", "0145hjnp"],
    ["bcfguvyz", "prxz"],
    ["0145hjnp", "028b"],
];

/// Byte-indexed form of one `(direction, parity)` row pair.
pub(crate) struct Step {
    /// Replacement symbol per input byte; `0` marks a byte outside the alphabet.
    replace: [u8; 128],
    border: [bool; 128],
}

impl Step {
    fn build(neighbor: &str, border: &str) -> Self {
        let alphabet = BASE32.as_bytes();
        let mut replace = [0u8; 128];
        for (i, c) in neighbor.bytes().enumerate() {
            replace[c as usize] = alphabet[i];
        }
        let mut on_border = [false; 128];
        for c in border.bytes() {
            on_border[c as usize] = true;
        }
        Step {
            replace,
            border: on_border,
        }
    }

    /// Replacement for `c`, or `None` if `c` is not a geocode symbol.
    #[inline]
    pub(crate) fn replace(&self, c: u8) -> Option<u8> {
        match self.replace.get(c as usize) {
            Some(&0) | None => None,
            Some(&r) => Some(r),
        }
    }

    #[inline]
    pub(crate) fn is_border(&self, c: u8) -> bool {
        self.border.get(c as usize).copied().unwrap_or(false)
    }
}

static STEPS: Lazy<[[Step; 2]; 4]> = Lazy::new(|| {
    std::array::from_fn(|dir| {
        std::array::from_fn(|parity| Step::build(NEIGHBOR[dir][parity], BORDER[dir][parity]))
    })
});

/// Lookup for stepping `direction` from a prefix of length `len`.
#[inline]
pub(crate) fn step(direction: Direction, len: usize) -> &'static Step {
    &STEPS[direction.table_row()][len % 2]
}

/// `true` if `c` (lowercase) belongs to [`BASE32`].
#[inline]
pub fn is_base32(c: char) -> bool {
    c.is_ascii() && BASE32.as_bytes().contains(&(c as u8))
}
