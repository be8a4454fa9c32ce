//! GeoJSON sink for the output point feature collection.
//!
//! The collection is created fresh before any input file is read and
//! finalized once at end of run.  Inserted geometries are always geographic
//! lon/lat degrees; the declared spatial reference is recorded in the
//! legacy `crs` member of the collection, never used to reproject.
//!

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use geo_types::Point;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use argos_common::SpatialRef;
use argos_formats::ObsRecord;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("output {0} already exists, use --overwrite to replace it")]
    AlreadyExists(PathBuf),
    #[error("can not create output {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("can not write output: {0}")]
    Write(#[from] std::io::Error),
    #[error("can not serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Insertion handle for the output collection, opened once for the whole
/// run and shared by every input file in turn.
///
#[derive(Debug)]
pub struct GeoJsonSink {
    out: BufWriter<File>,
    sref: SpatialRef,
    features: Vec<Feature>,
}

impl GeoJsonSink {
    /// Create the output collection.
    ///
    /// The file is created (and truncated) up-front so setup errors abort
    /// the run before any input file is read.  A pre-existing output
    /// without `overwrite` is fatal.
    ///
    pub fn create(path: &Path, sref: SpatialRef, overwrite: bool) -> Result<Self, SinkError> {
        if path.exists() && !overwrite {
            return Err(SinkError::AlreadyExists(path.to_path_buf()));
        }
        let fh = File::create(path).map_err(|source| SinkError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("created {} with {}", path.display(), sref);

        Ok(GeoJsonSink {
            out: BufWriter::new(fh),
            sref,
            features: Vec::new(),
        })
    }

    /// Insert one observation as a point feature with the
    /// {TagID, LC, Date} attribute schema.
    ///
    pub fn insert(&mut self, rec: &ObsRecord) -> Result<(), SinkError> {
        let geometry = Geometry::new(Value::from(&Point::new(rec.longitude, rec.latitude)));

        let mut properties = JsonObject::new();
        properties.insert("TagID".into(), rec.tag_id.into());
        properties.insert("LC".into(), rec.lc.clone().into());
        properties.insert("Date".into(), rec.timestamp().into());

        self.features.push(Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
        Ok(())
    }

    /// Number of features inserted so far.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Finalize the collection: serialize, flush, return the row count.
    ///
    pub fn close(mut self) -> Result<usize, SinkError> {
        let rows = self.features.len();

        let mut foreign_members = JsonObject::new();
        foreign_members.insert(
            "crs".into(),
            json!({
                "type": "name",
                "properties": { "name": self.sref.urn() },
            }),
        );

        let fc = FeatureCollection {
            bbox: None,
            features: self.features,
            foreign_members: Some(foreign_members),
        };
        serde_json::to_writer(&mut self.out, &fc)?;
        self.out.flush()?;

        debug!("flushed {} rows", rows);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use geojson::GeoJson;
    use tempfile::tempdir;

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
    fn test_create_insert_close() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("tracks.geojson");

        let mut sink = GeoJsonSink::create(&out, SpatialRef::WGS84, false).unwrap();
        assert!(sink.is_empty());

        sink.insert(&sample()).unwrap();
        assert_eq!(1, sink.len());
        assert_eq!(1, sink.close().unwrap());

        // Round-trip through the geojson crate
        //
        let raw = fs::read_to_string(&out).unwrap();
        let gj = raw.parse::<GeoJson>().unwrap();
        match gj {
            GeoJson::FeatureCollection(fc) => {
                assert_eq!(1, fc.features.len());

                let feature = &fc.features[0];
                let props = feature.properties.as_ref().unwrap();
                assert_eq!(20616, props["TagID"]);
                assert_eq!("3", props["LC"]);
                assert_eq!("12/05/2019 08:30:00", props["Date"]);

                let crs = &fc.foreign_members.unwrap()["crs"];
                assert_eq!("urn:ogc:def:crs:EPSG::4326", crs["properties"]["name"]);
            }
            _ => panic!("expected a feature collection"),
        }
    }

    #[test]
    fn test_existing_output_is_fatal() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("tracks.geojson");
        fs::write(&out, "{}").unwrap();

        let r = GeoJsonSink::create(&out, SpatialRef::WGS84, false);
        assert!(matches!(r, Err(SinkError::AlreadyExists(_))));

        // and fine with --overwrite
        //
        let r = GeoJsonSink::create(&out, SpatialRef::WGS84, true);
        assert!(r.is_ok());
    }

    #[test]
    fn test_bad_output_path_is_fatal() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("nonexistent").join("tracks.geojson");

        let r = GeoJsonSink::create(&out, SpatialRef::WGS84, false);
        assert!(matches!(r, Err(SinkError::Create { .. })));
    }
}
