// crates/geoblock-core/src/error.rs

//! Error types for geoblock-core.
//!
//! Validation of untrusted input is expressed through boolean predicates on
//! [`Geocode`](crate::Geocode); the variants here are reserved for calls that
//! should never see unvalidated input (the adjacency engine) and for loading
//! a [`PrecisionPolicy`](crate::config::PrecisionPolicy).

use thiserror::Error;

/// Result type alias using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;

#[derive(Error, Debug)]
pub enum GeoError {
    /// An empty string was passed where a geocode is required.
    #[error("Invalid geocode: empty")]
    EmptyGeocode,

    /// Direction was empty or not one of n/s/e/w.
    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    /// A character outside the base32 geocode alphabet reached the resolver.
    #[error("Invalid geocode symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The precision policy contradicts itself.
    #[error("Invalid precision policy: {0}")]
    InvalidPolicy(String),

    /// Policy file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeoError {
    /// `true` for the programmer-error family: the caller passed input to
    /// the adjacency engine without validating it first.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GeoError::EmptyGeocode | GeoError::InvalidDirection(_) | GeoError::InvalidSymbol { .. }
        )
    }
}
