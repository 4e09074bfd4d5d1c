// crates/geoblock-core/src/lib.rs

//! geoblock-core
//! =============
//!
//! Geohash handling for block-based location queries: validation, precision
//! capping, and neighbor computation on geocodes that are already stored as
//! strings. There is no latitude/longitude conversion here.
//!
//! ```rust
//! use geoblock_core::prelude::*;
//!
//! let policy = PrecisionPolicy::default();
//! let block = policy.admit_query(&Geocode::new("u33dc1v")).unwrap();
//! assert_eq!(block.like_pattern(), "u33dc%");
//!
//! let around = block.surrounding()?;
//! assert_eq!(around.len(), 9);
//! # Ok::<(), GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adjacency;
pub mod block;
pub mod config;
pub mod direction;
pub mod error;
pub mod geocode;
pub mod neighbors;
pub mod prelude;
pub mod tables;
pub mod traits;

// Re-exports
pub use crate::adjacency::{adjacent, adjacent_str};
pub use crate::block::Block;
pub use crate::config::PrecisionPolicy;
pub use crate::direction::{Compass, Direction};
pub use crate::error::{GeoError, Result};
pub use crate::geocode::Geocode;
pub use crate::neighbors::{cardinal_neighbors, neighbors, neighbors_labeled, Neighbors};
