//! This library shares common code amongst the ARGOS importer crates.
//!

mod logging;
mod sref;

use clap::{crate_name, crate_version};
pub use logging::*;
pub use sref::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
