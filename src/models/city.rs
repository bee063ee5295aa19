use serde::{Deserialize, Serialize};

use crate::models::GeoPoint;
use crate::utils::constants::CITY_EXTRA_COLUMNS;

/// One data row from the ranked city table.
///
/// `link` is `None` when the row carried no anchor. In that case the detail
/// page was never fetched and the coordinates stay `None` too — the row is
/// explicitly narrower rather than padded with placeholder columns that
/// would misalign downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRow {
    /// 1-based position within the scraped rows.
    pub row_number: usize,

    /// Cell text in table order.
    pub cells: Vec<String>,

    pub link: Option<String>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,
}

impl CityRow {
    pub fn geo_point(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}

/// The scraped city table: original headers plus `url`, `lat`, `long`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityTable {
    pub headers: Vec<String>,
    pub rows: Vec<CityRow>,
}

impl CityTable {
    pub fn new(mut headers: Vec<String>, rows: Vec<CityRow>) -> Self {
        headers.extend(CITY_EXTRA_COLUMNS.iter().map(|c| c.to_string()));
        Self { headers, rows }
    }

    /// Rows as JSON objects keyed by header.
    ///
    /// The appended `url`, `lat`, and `long` keys are null for rows that had
    /// no anchor, keeping every record the same width.
    pub fn records(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        let cell_headers = self.headers.len() - CITY_EXTRA_COLUMNS.len();

        self.rows
            .iter()
            .map(|row| {
                let mut map = serde_json::Map::new();
                for (i, header) in self.headers.iter().take(cell_headers).enumerate() {
                    let value = row.cells.get(i).cloned().unwrap_or_default();
                    map.insert(header.clone(), value.into());
                }
                map.insert(
                    "url".to_string(),
                    row.link.clone().map_or(serde_json::Value::Null, Into::into),
                );
                map.insert(
                    "lat".to_string(),
                    row.latitude.map_or(serde_json::Value::Null, Into::into),
                );
                map.insert(
                    "long".to_string(),
                    row.longitude.map_or(serde_json::Value::Null, Into::into),
                );
                map
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CityTable {
        CityTable::new(
            vec!["City".to_string(), "Population".to_string()],
            vec![
                CityRow {
                    row_number: 1,
                    cells: vec!["Mexico City".to_string(), "9,209,944".to_string()],
                    link: Some("/wiki/Mexico_City".to_string()),
                    latitude: Some(19.43),
                    longitude: Some(-99.13),
                },
                CityRow {
                    row_number: 2,
                    cells: vec!["Unlinked Town".to_string(), "1".to_string()],
                    link: None,
                    latitude: None,
                    longitude: None,
                },
            ],
        )
    }

    #[test]
    fn test_headers_are_extended() {
        let table = table();
        assert_eq!(
            table.headers,
            vec!["City", "Population", "url", "lat", "long"]
        );
    }

    #[test]
    fn test_records_keyed_by_header() {
        let records = table().records();
        assert_eq!(records[0]["City"], "Mexico City");
        assert_eq!(records[0]["url"], "/wiki/Mexico_City");
        assert_eq!(records[0]["lat"], 19.43);
    }

    #[test]
    fn test_anchorless_row_has_null_coordinate_fields() {
        let records = table().records();
        assert!(records[1]["url"].is_null());
        assert!(records[1]["lat"].is_null());
        assert!(records[1]["long"].is_null());
    }

    #[test]
    fn test_geo_point_requires_both_coordinates() {
        let table = table();
        assert!(table.rows[0].geo_point().is_some());
        assert!(table.rows[1].geo_point().is_none());
    }
}
