pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::coord_to_decimal;
pub use filename::generate_default_geojson_filename;
pub use progress::ProgressReporter;
