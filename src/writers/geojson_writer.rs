use std::fs;
use std::path::{Path, PathBuf};

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

use crate::error::Result;
use crate::models::{CityTable, Detection};
use crate::utils::constants::BBOX_PADDING_FRACTION;

/// Renders detections and city markers as a GeoJSON `FeatureCollection`.
///
/// The collection's bounding box is the data extent padded by a fraction of
/// each axis span, so a map client framing the bbox shows a margin around
/// the outermost points.
pub struct GeoJsonWriter {
    padding: f64,
}

impl GeoJsonWriter {
    pub fn new() -> Self {
        Self {
            padding: BBOX_PADDING_FRACTION,
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// One point feature per detection, carrying the feed columns as
    /// properties.
    pub fn detection_features(&self, detections: &[Detection]) -> Vec<Feature> {
        detections
            .iter()
            .map(|detection| {
                let mut properties = detection.properties();
                properties.insert("layer".to_string(), "fire".into());
                point_feature(detection.geo_point().position(), properties)
            })
            .collect()
    }

    /// One point feature per city row that carries coordinates. Rows
    /// without coordinates have nothing to place on a map and are skipped.
    pub fn city_features(&self, table: &CityTable) -> Vec<Feature> {
        table
            .rows
            .iter()
            .zip(table.records())
            .filter_map(|(row, mut record)| match row.geo_point() {
                Some(point) => {
                    record.insert("layer".to_string(), "city".into());
                    Some(point_feature(point.position(), record))
                }
                None => {
                    tracing::warn!(row = row.row_number, "city row has no coordinates, skipped");
                    None
                }
            })
            .collect()
    }

    /// Assemble features into a collection with a padded bounding box.
    pub fn collection(&self, features: Vec<Feature>) -> FeatureCollection {
        let bbox = self.bounding_box(&features);
        FeatureCollection {
            bbox,
            features,
            foreign_members: None,
        }
    }

    /// Write a collection as pretty-printed GeoJSON, creating parent
    /// directories as needed.
    pub fn write(&self, collection: FeatureCollection, path: &Path) -> Result<WriteSummary> {
        let feature_count = collection.features.len();
        let bbox = collection.bbox.clone();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let geojson = GeoJson::FeatureCollection(collection);
        let serialized = serde_json::to_string_pretty(&geojson)?;
        fs::write(path, &serialized)?;

        Ok(WriteSummary {
            path: path.to_path_buf(),
            feature_count,
            bbox,
            file_size_bytes: serialized.len() as u64,
        })
    }

    /// Extent of all point features, padded on each side by the configured
    /// fraction of the axis span. `[west, south, east, north]`.
    fn bounding_box(&self, features: &[Feature]) -> Option<Vec<f64>> {
        let positions: Vec<&Vec<f64>> = features
            .iter()
            .filter_map(|f| match &f.geometry {
                Some(Geometry {
                    value: Value::Point(position),
                    ..
                }) => Some(position),
                _ => None,
            })
            .collect();

        if positions.is_empty() {
            return None;
        }

        let mut west = f64::INFINITY;
        let mut south = f64::INFINITY;
        let mut east = f64::NEG_INFINITY;
        let mut north = f64::NEG_INFINITY;

        for position in positions {
            west = west.min(position[0]);
            east = east.max(position[0]);
            south = south.min(position[1]);
            north = north.max(position[1]);
        }

        let lon_pad = (east - west) * self.padding;
        let lat_pad = (north - south) * self.padding;

        Some(vec![
            west - lon_pad,
            south - lat_pad,
            east + lon_pad,
            north + lat_pad,
        ])
    }
}

impl Default for GeoJsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn point_feature(
    position: Vec<f64>,
    properties: serde_json::Map<String, serde_json::Value>,
) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(position))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Post-write report for a rendered layer file.
pub struct WriteSummary {
    pub path: PathBuf,
    pub feature_count: usize,
    pub bbox: Option<Vec<f64>>,
    pub file_size_bytes: u64,
}

impl WriteSummary {
    pub fn summary(&self) -> String {
        let bbox = match &self.bbox {
            Some(b) => format!("[{:.4}, {:.4}, {:.4}, {:.4}]", b[0], b[1], b[2], b[3]),
            None => "none".to_string(),
        };
        format!(
            "File: {}\nFeatures: {}\nBounding box: {}\nSize: {} bytes",
            self.path.display(),
            self.feature_count,
            bbox,
            self.file_size_bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CityRow, Detection};
    use std::collections::BTreeMap;

    fn detection(lat: f64, lon: f64) -> Detection {
        Detection::new(
            lat,
            lon,
            "2026-08-28".to_string(),
            "1012".to_string(),
            "nominal".to_string(),
            BTreeMap::new(),
        )
    }

    #[test]
    fn test_detection_features_carry_properties() {
        let writer = GeoJsonWriter::new();
        let features = writer.detection_features(&[detection(40.0, -120.0)]);

        assert_eq!(features.len(), 1);
        let props = features[0].properties.as_ref().unwrap();
        assert_eq!(props["layer"], "fire");
        assert_eq!(props["acq_date"], "2026-08-28");
        assert_eq!(props["confidence"], "nominal");
    }

    #[test]
    fn test_bbox_is_padded_extent() {
        let writer = GeoJsonWriter::new();
        let features =
            writer.detection_features(&[detection(30.0, -120.0), detection(40.0, -100.0)]);
        let collection = writer.collection(features);

        // Spans: 20 degrees of longitude, 10 of latitude, padded by 5%.
        let bbox = collection.bbox.unwrap();
        assert!((bbox[0] - -121.0).abs() < 1e-9);
        assert!((bbox[1] - 29.5).abs() < 1e-9);
        assert!((bbox[2] - -99.0).abs() < 1e-9);
        assert!((bbox[3] - 40.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_collection_has_no_bbox() {
        let writer = GeoJsonWriter::new();
        let collection = writer.collection(vec![]);
        assert!(collection.bbox.is_none());
    }

    #[test]
    fn test_city_rows_without_coordinates_are_skipped() {
        let table = CityTable::new(
            vec!["City".to_string()],
            vec![
                CityRow {
                    row_number: 1,
                    cells: vec!["Mexico City".to_string()],
                    link: Some("/wiki/Mexico_City".to_string()),
                    latitude: Some(19.43),
                    longitude: Some(-99.13),
                },
                CityRow {
                    row_number: 2,
                    cells: vec!["Unlinked Town".to_string()],
                    link: None,
                    latitude: None,
                    longitude: None,
                },
            ],
        );

        let writer = GeoJsonWriter::new();
        let features = writer.city_features(&table);

        assert_eq!(features.len(), 1);
        let props = features[0].properties.as_ref().unwrap();
        assert_eq!(props["layer"], "city");
        assert_eq!(props["City"], "Mexico City");
        assert_eq!(props["url"], "/wiki/Mexico_City");
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("fires.geojson");

        let writer = GeoJsonWriter::new();
        let features = writer.detection_features(&[detection(40.0, -120.0)]);
        let collection = writer.collection(features);
        let summary = writer.write(collection, &path).unwrap();

        assert!(path.exists());
        assert_eq!(summary.feature_count, 1);
        assert!(summary.file_size_bytes > 0);

        let parsed: GeoJson = fs::read_to_string(&path).unwrap().parse().unwrap();
        match parsed {
            GeoJson::FeatureCollection(fc) => assert_eq!(fc.features.len(), 1),
            _ => panic!("expected a FeatureCollection"),
        }
    }
}
