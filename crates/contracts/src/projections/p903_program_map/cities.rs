use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// Town centers, as they appear in the dataset's `city` column
static CITY_COORDINATES: Lazy<HashMap<&'static str, LatLng>> = Lazy::new(|| {
    [
        ("Barre", 44.1970, -72.5020),
        ("Bennington", 42.8781, -73.1968),
        ("Brattleboro", 42.8509, -72.5579),
        ("Bristol", 44.1334, -73.0790),
        ("Burlington", 44.4759, -73.2121),
        ("Colchester", 44.5439, -73.1479),
        ("Essex", 44.4906, -73.1107),
        ("Essex Junction", 44.4906, -73.1107),
        ("Greensboro", 44.5759, -72.2915),
        ("Hinesburg", 44.3292, -73.1107),
        ("Huntington", 44.3298, -72.9693),
        ("Jericho", 44.5045, -72.9973),
        ("Manchester", 43.1637, -73.0723),
        ("Middlebury", 44.0153, -73.1673),
        ("Montpelier", 44.2601, -72.5754),
        ("Morrisville", 44.5617, -72.5984),
        ("Newport", 44.9364, -72.2051),
        ("Norwich", 43.7154, -72.3079),
        ("Randolph", 43.9251, -72.6654),
        ("Richmond", 44.4054, -72.9993),
        ("Rutland", 43.6106, -72.9726),
        ("Shelburne", 44.3806, -73.2273),
        ("South Burlington", 44.4669, -73.1710),
        ("Springfield", 43.2984, -72.4823),
        ("St. Albans", 44.8109, -73.0832),
        ("St. Johnsbury", 44.4192, -72.0151),
        ("Stowe", 44.4654, -72.6874),
        ("Vergennes", 44.1673, -73.2540),
        ("Waitsfield", 44.1898, -72.8232),
        ("Waterbury", 44.3378, -72.7562),
        ("White River Junction", 43.6490, -72.3193),
        ("Williston", 44.4378, -73.0687),
        ("Winooski", 44.4914, -73.1857),
        ("Woodstock", 43.6242, -72.5185),
    ]
    .into_iter()
    .map(|(city, lat, lng)| (city, LatLng { lat, lng }))
    .collect()
});

/// Fixed coordinate for a city name, `None` when the city is not in the table.
pub fn city_coordinate(city: &str) -> Option<LatLng> {
    CITY_COORDINATES.get(city.trim()).copied()
}
