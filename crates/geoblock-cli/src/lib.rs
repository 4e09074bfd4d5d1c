//! geoblock-cli
//! ============
//!
//! Command-line interface for the `geoblock-core` geohash engine.
//!
//! This crate primarily provides a binary (`geoblock`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geoblock-cli
//! geoblock --help
//! geoblock validate u33dc1v0x --min 9
//! geoblock neighbors u33dc --labeled
//! geoblock --json fanout u33dc1v
//! ```
//!
//! For programmatic access, use the [`geoblock-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
