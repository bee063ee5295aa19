/// Current Suomi NPP VIIRS active-fire detections, USA contiguous + Hawaii,
/// last 24 hours. Listed at
/// <https://firms.modaps.eosdis.nasa.gov/active_fire/#firms-txt>.
pub const DEFAULT_FEED_URL: &str = "https://firms.modaps.eosdis.nasa.gov/data/active_fire/suomi-npp-viirs-c2/csv/SUOMI_VIIRS_C2_USA_contiguous_and_Hawaii_24h.csv";

/// Ranked city table used for map markers.
pub const DEFAULT_CITIES_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_North_American_cities_by_population";

/// Base URL prepended to the relative links found in the city table.
pub const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org";

/// Number of city rows scraped when no count is given.
pub const DEFAULT_CITY_COUNT: usize = 10;

/// Columns appended to the scraped city table headers.
pub const CITY_EXTRA_COLUMNS: [&str; 3] = ["url", "lat", "long"];

/// Fraction of each axis span added on both sides of the map bounding box.
pub const BBOX_PADDING_FRACTION: f64 = 0.05;

/// Geographic bounds for decimal-degree coordinates.
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Feed columns lifted into typed fields; everything else passes through.
pub const FEED_LATITUDE_COLUMN: &str = "latitude";
pub const FEED_LONGITUDE_COLUMN: &str = "longitude";
pub const FEED_DATE_COLUMN: &str = "acq_date";
pub const FEED_TIME_COLUMN: &str = "acq_time";
pub const FEED_CONFIDENCE_COLUMN: &str = "confidence";
