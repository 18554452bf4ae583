pub mod cities;
pub mod markers;

pub use cities::{city_coordinate, LatLng};
pub use markers::{build_markers, marker_radius, CityMarker, MapProjection, MAX_MARKER_RADIUS};
