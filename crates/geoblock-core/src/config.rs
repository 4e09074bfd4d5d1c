// crates/geoblock-core/src/config.rs

//! Precision policy applied by consumers before touching storage.
//!
//! Three lengths govern the whole service: area queries need at least
//! [`PrecisionPolicy::query_min_precision`] characters and are answered per
//! block of [`PrecisionPolicy::block_precision`]; new entries need, and are
//! stored at, [`PrecisionPolicy::entry_precision`].

use crate::block::Block;
use crate::error::{GeoError, Result};
use crate::geocode::Geocode;
use serde::{Deserialize, Serialize};
#[cfg(feature = "toml")]
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecisionPolicy {
    /// Shortest geocode accepted for block and area queries.
    /// Default: 4
    pub query_min_precision: i32,

    /// Length of a change-tracking block.
    /// Default: 5
    pub block_precision: i32,

    /// Exact length stored for entries; shorter submissions are rejected.
    /// Default: 9
    pub entry_precision: i32,
}

impl Default for PrecisionPolicy {
    fn default() -> Self {
        Self {
            query_min_precision: 4,
            block_precision: 5,
            entry_precision: 9,
        }
    }
}

impl PrecisionPolicy {
    /// Checks `0 < query_min_precision <= block_precision <= entry_precision`.
    pub fn validate(&self) -> Result<()> {
        if self.query_min_precision <= 0 {
            return Err(GeoError::InvalidPolicy(format!(
                "query_min_precision must be positive, got {}",
                self.query_min_precision
            )));
        }
        if self.block_precision < self.query_min_precision {
            return Err(GeoError::InvalidPolicy(format!(
                "block_precision {} is below query_min_precision {}",
                self.block_precision, self.query_min_precision
            )));
        }
        if self.entry_precision < self.block_precision {
            return Err(GeoError::InvalidPolicy(format!(
                "entry_precision {} is below block_precision {}",
                self.entry_precision, self.block_precision
            )));
        }
        Ok(())
    }

    /// Block for an area query, or `None` if the geocode is invalid or too
    /// coarse.
    pub fn admit_query(&self, geocode: &Geocode) -> Option<Block> {
        if !geocode.is_valid_and_has_precision(self.query_min_precision) {
            tracing::trace!(%geocode, min = self.query_min_precision, "query geocode rejected");
            return None;
        }
        Some(Block::new(geocode, self.block_precision))
    }

    /// Storage form of an entry geocode, or `None` if it is invalid or not
    /// precise enough.
    pub fn admit_entry(&self, geocode: &Geocode) -> Option<Geocode> {
        if !geocode.is_valid_and_has_precision(self.entry_precision) {
            tracing::trace!(%geocode, min = self.entry_precision, "entry geocode rejected");
            return None;
        }
        Some(geocode.with_max_precision(self.entry_precision))
    }

    /// Parses and validates a TOML policy. Missing keys take their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let policy: PrecisionPolicy =
            toml::from_str(s).map_err(|e| GeoError::Config(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    #[cfg(feature = "toml")]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            GeoError::Config(msg) => GeoError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        let p = PrecisionPolicy::default();
        assert!(p.validate().is_ok());
        assert_eq!(
            (p.query_min_precision, p.block_precision, p.entry_precision),
            (4, 5, 9)
        );
    }

    #[test]
    fn test_inconsistent_policies() {
        let p = PrecisionPolicy {
            query_min_precision: 0,
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(GeoError::InvalidPolicy(_))));

        let p = PrecisionPolicy {
            block_precision: 3,
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(GeoError::InvalidPolicy(_))));

        let p = PrecisionPolicy {
            entry_precision: 4,
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(GeoError::InvalidPolicy(_))));
    }

    #[test]
    fn test_admit_query() {
        let p = PrecisionPolicy::default();
        let block = p.admit_query(&Geocode::new("U33DC1V")).unwrap();
        assert_eq!(block.geocode().as_str(), "u33dc");
        // Four characters pass but stay at four.
        assert_eq!(p.admit_query(&Geocode::new("u33d")).unwrap().precision(), 4);
        assert!(p.admit_query(&Geocode::new("u33")).is_none());
        assert!(p.admit_query(&Geocode::new("u3od")).is_none());
    }

    #[test]
    fn test_admit_entry() {
        let p = PrecisionPolicy::default();
        assert_eq!(
            p.admit_entry(&Geocode::new("u33dc1v0xyz")).unwrap().as_str(),
            "u33dc1v0x"
        );
        assert!(p.admit_entry(&Geocode::new("u33dc1v0")).is_none());
        assert!(p.admit_entry(&Geocode::new("u33dc1v0a")).is_none());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_partial_overrides() {
        let p = PrecisionPolicy::from_toml_str("block_precision = 6\n").unwrap();
        assert_eq!(p.block_precision, 6);
        assert_eq!(p.query_min_precision, 4);
        assert_eq!(p.entry_precision, 9);

        assert!(matches!(
            PrecisionPolicy::from_toml_str("block_precision = 2\n"),
            Err(GeoError::InvalidPolicy(_))
        ));
        assert!(matches!(
            PrecisionPolicy::from_toml_str("block_precision = \"five\"\n"),
            Err(GeoError::Config(_))
        ));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_missing_file_is_io_error() {
        let err = PrecisionPolicy::load_from_file("/nonexistent/geoblock/policy.toml").unwrap_err();
        assert!(matches!(err, GeoError::Io(_)));
    }
}
