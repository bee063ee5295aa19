use serde::{Deserialize, Serialize};
use validator::Validate;

/// A (latitude, longitude) pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// GeoJSON position order: [longitude, latitude].
    pub fn position(&self) -> Vec<f64> {
        vec![self.longitude, self.latitude]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_point() {
        let point = GeoPoint::new(34.05, -118.24);
        assert!(point.validate().is_ok());
        assert_eq!(point.position(), vec![-118.24, 34.05]);
    }

    #[test]
    fn test_latitude_out_of_range() {
        let point = GeoPoint::new(91.0, 0.0);
        assert!(point.validate().is_err());
    }

    #[test]
    fn test_longitude_out_of_range() {
        let point = GeoPoint::new(0.0, -181.0);
        assert!(point.validate().is_err());
    }
}
