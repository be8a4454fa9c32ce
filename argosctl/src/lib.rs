//! Library part of the `argosctl` binary.
//!
//! The import pipeline is a single linear pass: create the output
//! collection, scan every file in the input directory through the
//! two-line record protocol, insert each filter-passing observation,
//! then finalize the collection.
//!

pub use cli::*;
pub use import::*;
pub use sink::*;

mod cli;
mod import;
mod sink;
