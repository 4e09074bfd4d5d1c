//! geoblock-rs
//!
//! Workspace umbrella crate: re-exports [`geoblock_core`] so the demos under
//! `demos/` can `use geoblock_rs::prelude::*`.

pub use geoblock_core::*;
