use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::GeoPoint;

/// One thermal-anomaly record from the satellite feed.
///
/// The feed schema is whatever upstream publishes. Position, acquisition
/// date/time, and confidence are lifted into typed fields; every other
/// column is carried through `extras` unmodified.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Detection {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub acq_date: String,

    pub acq_time: String,

    pub confidence: String,

    pub extras: BTreeMap<String, String>,
}

impl Detection {
    pub fn new(
        latitude: f64,
        longitude: f64,
        acq_date: String,
        acq_time: String,
        confidence: String,
        extras: BTreeMap<String, String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            acq_date,
            acq_time,
            confidence,
            extras,
        }
    }

    pub fn geo_point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Typed fields plus pass-through columns as a flat JSON object.
    pub fn properties(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("acq_date".to_string(), self.acq_date.clone().into());
        map.insert("acq_time".to_string(), self.acq_time.clone().into());
        map.insert("confidence".to_string(), self.confidence.clone().into());
        for (key, value) in &self.extras {
            map.insert(key.clone(), value.clone().into());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Detection {
        let mut extras = BTreeMap::new();
        extras.insert("frp".to_string(), "12.6".to_string());
        extras.insert("satellite".to_string(), "N".to_string());
        Detection::new(
            38.52,
            -122.41,
            "2026-08-28".to_string(),
            "1012".to_string(),
            "nominal".to_string(),
            extras,
        )
    }

    #[test]
    fn test_detection_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_latitude_fails_validation() {
        let mut detection = sample();
        detection.latitude = 95.0;
        assert!(detection.validate().is_err());
    }

    #[test]
    fn test_properties_include_extras() {
        let props = sample().properties();
        assert_eq!(props["acq_date"], "2026-08-28");
        assert_eq!(props["frp"], "12.6");
        assert_eq!(props["satellite"], "N");
    }
}
