//! The import run itself.
//!
//! One linear pass: every file in the input directory (minus `README.txt`)
//! is scanned through the two-line record protocol, filter-passing
//! observations are inserted into the sink, rejected and unconvertible
//! records are counted.  Structural errors abort the whole run, leaving
//! whatever was already inserted unflushed.
//!

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use eyre::{Result, WrapErr};
use tracing::{info, warn};

use argos_formats::{LonConvention, ScanEvent, Scanner};

use crate::GeoJsonSink;

/// Files with this exact name are documentation, not data.
const README: &str = "README.txt";

/// Run-scoped counters, logged at end of run.
///
/// The legacy importer referenced its counters without ever initializing
/// them; these start at zero and are returned to the caller.
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    /// Input files scanned (excluding `README.txt`)
    pub files: usize,
    /// Observations inserted into the output collection
    pub imported: usize,
    /// Records whose location class was not in the filter set
    pub rejected: usize,
    /// Records discarded for unconvertible coordinates
    pub bad_coord: usize,
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {} imported, {} rejected, {} bad coordinates",
            self.files, self.imported, self.rejected, self.bad_coord
        )
    }
}

/// Import every ARGOS file in `indir` into `sink`.
///
/// Files are processed strictly sequentially in directory-listing order,
/// one file handle open at a time.  Any structural error is fatal and
/// aborts processing of the remaining files.
///
#[tracing::instrument(skip(filter, sink))]
pub fn import_dir(
    indir: &Path,
    filter: &HashSet<String>,
    convention: LonConvention,
    sink: &mut GeoJsonSink,
) -> Result<RunStats> {
    let mut stats = RunStats::default();

    let entries = std::fs::read_dir(indir)
        .wrap_err_with(|| format!("can not read input directory {}", indir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        // Skip the README.txt file
        //
        if entry.file_name() == README {
            continue;
        }

        let path = entry.path();
        info!("Processing {}", path.display());

        stats.files += 1;
        import_file(&path, filter, convention, sink, &mut stats)
            .wrap_err_with(|| format!("while importing {}", path.display()))?;
    }
    Ok(stats)
}

/// Scan one file, inserting every complete observation.
///
fn import_file(
    path: &Path,
    filter: &HashSet<String>,
    convention: LonConvention,
    sink: &mut GeoJsonSink,
    stats: &mut RunStats,
) -> Result<()> {
    let fh = BufReader::new(File::open(path)?);
    let mut scanner = Scanner::new(filter.clone(), convention);

    for line in fh.lines() {
        let line = line?;
        match scanner.feed(&line)? {
            Some(ScanEvent::Record(rec)) => {
                sink.insert(&rec)?;
                stats.imported += 1;
            }
            Some(ScanEvent::Rejected { .. }) => {
                stats.rejected += 1;
            }
            Some(ScanEvent::BadCoordinates { tag_id, error }) => {
                warn!("skipping record {}: {}", tag_id, error);
                stats.bad_coord += 1;
            }
            None => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::tempdir;

    use argos_common::SpatialRef;

    const ONE_GOOD_ONE_REJECTED: &str = "\
Program 9660
20616 Date : 12.05.2019 08:30:00 LC : 3 IQ : 66
      Lat1 : 45.200N Lon1 : 70.100W
20617 Date : 13.05.2019 09:45:00 LC : B IQ : 00
      Lat1 : 44.100S Lon1 : 69.900E
";

    fn lc(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|s| s.to_string()).collect()
    }

    // The sink lives in its own directory so it is not picked up as input
    //
    fn sink() -> (tempfile::TempDir, GeoJsonSink) {
        let out = tempdir().unwrap();
        let s =
            GeoJsonSink::create(&out.path().join("out.geojson"), SpatialRef::WGS84, false).unwrap();
        (out, s)
    }

    #[test]
    fn test_end_to_end_one_row() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("tags.txt"), ONE_GOOD_ONE_REJECTED).unwrap();

        let (_out, mut sink) = sink();
        let stats = import_dir(
            tmp.path(),
            &lc(&["1", "2", "3"]),
            LonConvention::Literal,
            &mut sink,
        )
        .unwrap();

        assert_eq!(
            RunStats {
                files: 1,
                imported: 1,
                rejected: 1,
                bad_coord: 0
            },
            stats
        );
        assert_eq!(1, sink.close().unwrap());
    }

    #[test]
    fn test_readme_is_never_parsed() {
        let tmp = tempdir().unwrap();

        // This would be a fatal malformed header if it were scanned
        //
        fs::write(tmp.path().join("README.txt"), "see Date : above\n").unwrap();

        let (_out, mut sink) = sink();
        let stats =
            import_dir(tmp.path(), &lc(&["3"]), LonConvention::Literal, &mut sink).unwrap();

        assert_eq!(RunStats::default(), stats);
    }

    #[test]
    fn test_bad_coordinates_are_counted() {
        let tmp = tempdir().unwrap();
        let data = "\
20616 Date : 12.05.2019 08:30:00 LC : 3 IQ : 66
      Lat1 : xx.xxxN Lon1 : 70.100W
";
        fs::write(tmp.path().join("tags.txt"), data).unwrap();

        let (_out, mut sink) = sink();
        let stats =
            import_dir(tmp.path(), &lc(&["3"]), LonConvention::Literal, &mut sink).unwrap();

        assert_eq!(0, stats.imported);
        assert_eq!(1, stats.bad_coord);
    }

    #[test]
    fn test_malformed_header_aborts() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("tags.txt"), "20616 Date : 12.05.2019\n").unwrap();

        let (_out, mut sink) = sink();
        let r = import_dir(tmp.path(), &lc(&["3"]), LonConvention::Literal, &mut sink);

        assert!(r.is_err());
    }

    #[test]
    fn test_standard_longitude() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("tags.txt"), ONE_GOOD_ONE_REJECTED).unwrap();

        let (_out, mut sink) = sink();
        let stats = import_dir(
            tmp.path(),
            &lc(&["3", "B"]),
            LonConvention::Standard,
            &mut sink,
        )
        .unwrap();

        // Both records pass with the wider filter
        //
        assert_eq!(2, stats.imported);
    }

    #[test]
    fn test_empty_directory() {
        let tmp = tempdir().unwrap();

        let (_out, mut sink) = sink();
        let stats =
            import_dir(tmp.path(), &lc(&["3"]), LonConvention::Literal, &mut sink).unwrap();

        assert_eq!(RunStats::default(), stats);
        assert_eq!(0, sink.close().unwrap());
    }
}
