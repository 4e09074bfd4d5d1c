// crates/geoblock-core/src/traits.rs
use crate::block::Block;
use crate::geocode::Geocode;

/// Location helpers for records keyed by a geocode string.
///
/// Implementors provide the stored geocode via [`HasGeocode::geocode_str`]
/// (entries, block summaries, ...) and get block membership for free, using
/// the same prefix rule as the SQL `LIKE` pattern of a [`Block`].
///
/// # Examples
/// ```rust
/// use geoblock_core::{Block, Geocode};
/// use geoblock_core::traits::HasGeocode;
///
/// struct Entry(&'static str);
/// impl HasGeocode for Entry {
///     fn geocode_str(&self) -> &str { self.0 }
/// }
///
/// let block = Block::new(&Geocode::new("u33dc"), 5);
/// assert!(Entry("U33DC1V0X").in_block(&block));
/// assert!(!Entry("u33dd1v0x").in_block(&block));
/// ```
pub trait HasGeocode {
    /// The geocode as stored; need not be lowercase.
    fn geocode_str(&self) -> &str;

    #[inline]
    fn geocode(&self) -> Geocode {
        Geocode::new(self.geocode_str())
    }

    #[inline]
    fn in_block(&self, block: &Block) -> bool {
        block.contains(&self.geocode())
    }
}

impl HasGeocode for Geocode {
    fn geocode_str(&self) -> &str {
        self.as_str()
    }
}
