pub mod city;
pub mod detection;
pub mod geo;

pub use city::{CityRow, CityTable};
pub use detection::Detection;
pub use geo::GeoPoint;
