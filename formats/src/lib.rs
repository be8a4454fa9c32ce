//! Parsing support for the ARGOS satellite tracking text export.
//!
//! ARGOS files alternate two-line record pairs inside arbitrary noise lines:
//! a *header* line (recognized by the `"Date :"` substring) carrying tag id,
//! date, time and location class at fixed token positions, immediately
//! followed by a *coordinate* line carrying the raw latitude and longitude
//! tokens with a trailing hemisphere letter.
//!
//! The [`Scanner`] drives the two-state protocol over a stream of lines and
//! yields [`ScanEvent`]s; [`ObsRecord`] is the resulting observation.
//!

pub use coord::*;
pub use error::*;
pub use record::*;
pub use scan::*;

mod coord;
mod error;
mod record;
mod scan;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
