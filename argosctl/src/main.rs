//! Main driver for `argosctl`.
//!
//! Reads ARGOS satellite wildlife-tracking text files from a directory,
//! keeps observations whose location class is in the given filter set,
//! converts the raw coordinate tokens to signed decimal degrees and writes
//! the resulting points into a freshly created GeoJSON feature collection
//! with the caller-specified spatial reference.
//!

use clap::{crate_version, Parser};
use eyre::Result;
use tracing::info;

use argos_common::init_logging;
use argosctl::{import_dir, GeoJsonSink, Opts};

/// Binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging.
    //
    init_logging(opts.verbose);

    banner();

    // Create the output collection before any input file is read, so
    // setup errors abort the run up-front.
    //
    let mut sink = GeoJsonSink::create(&opts.output, opts.sref, opts.overwrite)?;

    let stats = import_dir(&opts.indir, &opts.lc_filter(), opts.convention(), &mut sink)?;
    let rows = sink.close()?;

    info!("Done: {} ({} rows written to {})", stats, rows, opts.output.display());
    Ok(())
}

/// Display banner
///
fn banner() {
    eprintln!("{}/{}", NAME, VERSION);
}
