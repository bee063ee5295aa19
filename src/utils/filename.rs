use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default GeoJSON filename with format: firms-{kind}-{YYMMDD}.geojson
pub fn generate_default_geojson_filename(kind: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("firms-{}-{:02}{:02}{:02}.geojson", kind, year, month, day);
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_geojson_filename() {
        let filename = generate_default_geojson_filename("fires");
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.ends_with(".geojson"));
        assert!(filename_str.starts_with("output/"));

        let parts: Vec<&str> = filename_str.split('/').collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "output");

        let file_part = parts[1];
        assert!(file_part.starts_with("firms-fires-"));
        assert!(file_part.ends_with(".geojson"));
    }

    #[test]
    fn test_kind_is_embedded() {
        let filename = generate_default_geojson_filename("cities");
        assert!(filename.to_string_lossy().contains("firms-cities-"));
    }
}
