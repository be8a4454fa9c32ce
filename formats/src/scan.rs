//! Line scanner for the two-line ARGOS record protocol.
//!
//! The protocol is an explicit two-state machine:
//!
//! - `ScanningForHeader`: every line is examined for the `"Date :"` marker,
//!   anything else is noise and skipped.
//! - `ExpectCoordinateLine`: the line right after an accepted header carries
//!   the raw coordinate tokens.
//!
//! A header whose location class is not in the filter set sends the scanner
//! straight back to `ScanningForHeader` *without* consuming the paired
//! coordinate line; that line is examined as an ordinary scan line on the
//! next call.  This matches the behavior of the legacy importer this tool
//! replaces (the coordinate line never contains the header marker in
//! well-formed exports, so it falls through as noise).
//!

use std::collections::HashSet;

use tracing::trace;

use crate::{parse_latitude, parse_longitude, ArgosError, LonConvention, ObsRecord};

/// Substring that identifies a header line.
pub const HEADER_MARK: &str = "Date :";

/// Minimum token counts per the fixed-position contract.
const HEADER_TOKENS: usize = 8;
const COORD_TOKENS: usize = 6;

/// Fields lifted from a header line, pending its coordinate line.
///
#[derive(Clone, Debug, PartialEq)]
struct Header {
    tag_id: i64,
    date: String,
    time: String,
    lc: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
enum ScanState {
    #[default]
    ScanningForHeader,
    ExpectCoordinateLine(Header),
}

/// What a fed line produced.
///
#[derive(Clone, Debug, PartialEq)]
pub enum ScanEvent {
    /// A complete, filter-passing, converted observation.
    Record(ObsRecord),
    /// Header seen but its location class is not in the filter set.
    Rejected { tag_id: i64, lc: String },
    /// Coordinate tokens present but not convertible, record discarded.
    BadCoordinates { tag_id: i64, error: ArgosError },
}

/// Stateful scanner, one per input file.
///
#[derive(Debug)]
pub struct Scanner {
    filter: HashSet<String>,
    convention: LonConvention,
    state: ScanState,
    line_no: usize,
}

impl Scanner {
    pub fn new(filter: HashSet<String>, convention: LonConvention) -> Self {
        Scanner {
            filter,
            convention,
            state: ScanState::ScanningForHeader,
            line_no: 0,
        }
    }

    /// Current line number (1-based), for error reporting.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Feed one line into the state machine.
    ///
    /// Returns `Ok(None)` for noise lines and accepted headers (which only
    /// change state), `Ok(Some(event))` when a record completes, is rejected
    /// or has bad coordinates, and `Err` on structural errors which are
    /// fatal to the run.
    ///
    pub fn feed(&mut self, line: &str) -> Result<Option<ScanEvent>, ArgosError> {
        self.line_no += 1;

        match std::mem::take(&mut self.state) {
            ScanState::ScanningForHeader => {
                if !line.contains(HEADER_MARK) {
                    return Ok(None);
                }
                let header = self.parse_header(line)?;

                // Filter rejection leaves the coordinate line for re-scan
                //
                if !self.filter.contains(&header.lc) {
                    trace!("line {}: reject lc={}", self.line_no, header.lc);
                    return Ok(Some(ScanEvent::Rejected {
                        tag_id: header.tag_id,
                        lc: header.lc,
                    }));
                }
                self.state = ScanState::ExpectCoordinateLine(header);
                Ok(None)
            }
            ScanState::ExpectCoordinateLine(header) => self.parse_coordinates(line, header),
        }
    }

    /// Header token contract: [0] tag id, [3] date, [4] time, [7] location class.
    ///
    fn parse_header(&self, line: &str) -> Result<Header, ArgosError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < HEADER_TOKENS {
            return Err(ArgosError::MalformedHeader {
                line: self.line_no,
                tokens: tokens.len(),
                min: HEADER_TOKENS,
            });
        }
        let tag_id = tokens[0]
            .parse::<i64>()
            .map_err(|_| ArgosError::BadTagId(tokens[0].to_string(), self.line_no))?;

        Ok(Header {
            tag_id,
            date: tokens[3].to_string(),
            time: tokens[4].to_string(),
            lc: tokens[7].to_string(),
        })
    }

    /// Coordinate token contract: [2] latitude, [5] longitude.
    ///
    fn parse_coordinates(
        &mut self,
        line: &str,
        header: Header,
    ) -> Result<Option<ScanEvent>, ArgosError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < COORD_TOKENS {
            return Err(ArgosError::MalformedCoordinates {
                line: self.line_no,
                tokens: tokens.len(),
                min: COORD_TOKENS,
            });
        }

        let lat = parse_latitude(tokens[2]);
        let lon = parse_longitude(tokens[5], self.convention);
        let event = match (lat, lon) {
            (Ok(latitude), Ok(longitude)) => ScanEvent::Record(ObsRecord {
                tag_id: header.tag_id,
                date: header.date,
                time: header.time,
                lc: header.lc,
                latitude,
                longitude,
            }),
            (Err(error), _) | (_, Err(error)) => ScanEvent::BadCoordinates {
                tag_id: header.tag_id,
                error,
            },
        };
        Ok(Some(event))
    }
}
