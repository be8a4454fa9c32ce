//! Module describing all options to the `argosctl` main driver.
//!
//! The four positional arguments mirror the legacy importer, in the same
//! order: input directory, location-class filter, output collection path,
//! output spatial reference.
//!

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};

use argos_common::SpatialRef;
use argos_formats::LonConvention;

/// CLI options
#[derive(Debug, Parser)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Replace the output collection if it already exists.
    #[clap(long)]
    pub overwrite: bool,
    /// Use conventional longitude signs (W negative) instead of the
    /// polarity found in the source exports.
    #[clap(long)]
    pub standard_longitude: bool,
    /// Directory holding the ARGOS text files.
    pub indir: PathBuf,
    /// Semicolon-separated list of accepted location classes (e.g. "1;2;3").
    pub filter: String,
    /// Path of the output point feature collection (GeoJSON).
    pub output: PathBuf,
    /// Spatial reference of the output collection ("4326" or "EPSG:4326").
    pub sref: SpatialRef,
}

impl Opts {
    /// The filter set, order irrelevant, membership test only.
    ///
    pub fn lc_filter(&self) -> HashSet<String> {
        self.filter
            .split(';')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }

    pub fn convention(&self) -> LonConvention {
        if self.standard_longitude {
            LonConvention::Standard
        } else {
            LonConvention::Literal
        }
    }
}
