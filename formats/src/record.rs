//! Observation record, one per header/coordinate line pair.
//!

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ArgosError;

/// A single ARGOS fix after filtering and coordinate conversion.
///
/// `date` and `time` keep the source form (`DD.MM.YYYY` / `HH:MM:SS`),
/// latitude and longitude are signed decimal degrees.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObsRecord {
    /// Identifier of the tracked animal/device emitting the fix
    pub tag_id: i64,
    /// Observation date as found in the header (`DD.MM.YYYY`)
    pub date: String,
    /// Observation time as found in the header (`HH:MM:SS`)
    pub time: String,
    /// Location class, the quality code of the fix
    pub lc: String,
    /// Latitude in signed degrees
    pub latitude: f64,
    /// Longitude in signed degrees
    pub longitude: f64,
}

impl ObsRecord {
    /// The combined date value stored on the output feature:
    /// dots replaced by slashes, a space, then the time.
    ///
    pub fn timestamp(&self) -> String {
        format!("{} {}", self.date.replace('.', "/"), self.time)
    }

    /// Same value, validated through chrono.
    ///
    pub fn datetime(&self) -> Result<NaiveDateTime, ArgosError> {
        let ts = self.timestamp();
        NaiveDateTime::parse_from_str(&ts, "%d/%m/%Y %H:%M:%S")
            .map_err(|_| ArgosError::BadTimestamp(ts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn sample() -> ObsRecord {
        ObsRecord {
            tag_id: 20616,
            date: "12.05.2019".to_string(),
            time: "08:30:00".to_string(),
            lc: "3".to_string(),
            latitude: 45.2,
            longitude: 70.1,
        }
    }

    #[test]
    fn test_timestamp() {
        assert_eq!("12/05/2019 08:30:00", sample().timestamp());
    }

    #[test]
    fn test_datetime() {
        let dt = sample().datetime().unwrap();

        assert_eq!(
            NaiveDate::from_ymd_opt(2019, 5, 12).unwrap(),
            dt.date()
        );
        assert_eq!(8, dt.hour());
    }

    #[test]
    fn test_datetime_bad() {
        let mut r = sample();
        r.date = "99.99.2019".to_string();

        assert!(r.datetime().is_err());
    }
}
