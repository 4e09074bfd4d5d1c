//! geoblock-core prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::adjacency::{adjacent, adjacent_str};
pub use crate::block::Block;
pub use crate::config::PrecisionPolicy;
pub use crate::direction::{Compass, Direction};
pub use crate::error::{GeoError, Result};
pub use crate::geocode::Geocode;
pub use crate::neighbors::{cardinal_neighbors, neighbors, neighbors_labeled, Neighbors};
pub use crate::traits::HasGeocode;
