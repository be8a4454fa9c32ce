//! Spatial reference identifiers.
//!
//! The output feature collection carries the caller-specified spatial
//! reference.  We accept the bare EPSG code (`4326`) or the authority form
//! (`EPSG:4326`).  Inserted geometries are always geographic lon/lat degrees,
//! the declared reference is recorded as-is, never used to reproject.
//!

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SrefError {
    #[error("invalid spatial reference {0}, expected 4326 or EPSG:4326 form")]
    Invalid(String),
}

/// A spatial reference identified by its EPSG code.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SpatialRef(u32);

impl SpatialRef {
    /// Geographic lon/lat in degrees, what ARGOS fixes are expressed in.
    pub const WGS84: SpatialRef = SpatialRef(4326);

    pub fn epsg(&self) -> u32 {
        self.0
    }

    /// OGC URN form, used for the GeoJSON `crs` member.
    ///
    pub fn urn(&self) -> String {
        format!("urn:ogc:def:crs:EPSG::{}", self.0)
    }
}

impl FromStr for SpatialRef {
    type Err = SrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s
            .strip_prefix("EPSG:")
            .or_else(|| s.strip_prefix("epsg:"))
            .unwrap_or(s);
        match code.parse::<u32>() {
            Ok(code) if code != 0 => Ok(SpatialRef(code)),
            _ => Err(SrefError::Invalid(s.to_string())),
        }
    }
}

impl fmt::Display for SpatialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}
