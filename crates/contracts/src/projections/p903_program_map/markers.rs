//! Map projection: one marker per city present in the filtered subset.

use super::cities::{city_coordinate, LatLng};
use crate::domain::a001_program::Program;
use crate::projections::p902_program_calendar::ProgramRef;
use std::collections::HashMap;

/// Program names listed in a marker popup before "+N more".
pub const MAX_POPUP_PROGRAMS: usize = 8;
pub const MIN_MARKER_RADIUS: f64 = 8.0;
pub const MAX_MARKER_RADIUS: f64 = 28.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CityMarker {
    pub city: String,
    pub position: LatLng,
    pub count: usize,
    pub radius: f64,
    /// At most [`MAX_POPUP_PROGRAMS`]
    pub programs: Vec<ProgramRef>,
    pub overflow: usize,
}

impl CityMarker {
    /// "Burlington — 3 programs"
    pub fn heading(&self) -> String {
        let noun = if self.count == 1 { "program" } else { "programs" };
        format!("{} — {} {}", self.city, self.count, noun)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapProjection {
    /// In order of each city's first appearance in the subset
    pub markers: Vec<CityMarker>,
    /// Programs left off the map because their city has no coordinate
    pub unmapped_count: usize,
}

/// Grows with the square root of the count, capped at [`MAX_MARKER_RADIUS`].
pub fn marker_radius(count: usize) -> f64 {
    (MIN_MARKER_RADIUS + 4.0 * ((count.max(1) - 1) as f64).sqrt()).min(MAX_MARKER_RADIUS)
}

pub fn build_markers(subset: &[Program]) -> MapProjection {
    let mut order: Vec<String> = Vec::new();
    let mut by_city: HashMap<String, (LatLng, Vec<ProgramRef>)> = HashMap::new();
    let mut unmapped_count = 0;

    for p in subset {
        let Some(position) = city_coordinate(&p.city) else {
            unmapped_count += 1;
            continue;
        };
        let city = p.city.trim().to_string();
        let entry = by_city.entry(city.clone()).or_insert_with(|| {
            order.push(city);
            (position, Vec::new())
        });
        entry.1.push(ProgramRef {
            id: p.id,
            name: p.name.clone(),
        });
    }

    if unmapped_count > 0 {
        log::debug!("map: {} programs without a city coordinate", unmapped_count);
    }

    let markers = order
        .into_iter()
        .filter_map(|city| {
            let (position, refs) = by_city.remove(&city)?;
            let count = refs.len();
            Some(CityMarker {
                city,
                position,
                count,
                radius: marker_radius(count),
                overflow: count.saturating_sub(MAX_POPUP_PROGRAMS),
                programs: refs.into_iter().take(MAX_POPUP_PROGRAMS).collect(),
            })
        })
        .collect();

    MapProjection {
        markers,
        unmapped_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_program::aggregate::test_support::program;

    fn in_city(id: u32, city: &str) -> Program {
        let mut p = program(id, &format!("P{}", id));
        p.city = city.to_string();
        p
    }

    #[test]
    fn test_one_marker_per_city() {
        let subset = vec![
            in_city(1, "Burlington"),
            in_city(2, "Stowe"),
            in_city(3, "Burlington"),
            in_city(4, "South Woodstock"),
            in_city(5, ""),
        ];
        let projection = build_markers(&subset);
        let cities: Vec<&str> = projection.markers.iter().map(|m| m.city.as_str()).collect();
        assert_eq!(cities, vec!["Burlington", "Stowe"]);
        assert_eq!(projection.markers[0].count, 2);
        assert_eq!(projection.unmapped_count, 2);
    }

    #[test]
    fn test_radius_is_monotonic_and_bounded() {
        let mut last = 0.0;
        for count in 1..500 {
            let r = marker_radius(count);
            assert!(r >= last);
            assert!(r <= MAX_MARKER_RADIUS);
            last = r;
        }
        assert_eq!(marker_radius(1), MIN_MARKER_RADIUS);
        assert_eq!(marker_radius(10_000), MAX_MARKER_RADIUS);
    }

    #[test]
    fn test_popup_overflow() {
        let subset: Vec<Program> = (1..=11).map(|i| in_city(i, "Rutland")).collect();
        let projection = build_markers(&subset);
        let marker = &projection.markers[0];
        assert_eq!(marker.programs.len(), MAX_POPUP_PROGRAMS);
        assert_eq!(marker.overflow, 3);
        assert_eq!(marker.heading(), "Rutland — 11 programs");
    }

    #[test]
    fn test_empty_subset() {
        assert_eq!(build_markers(&[]), MapProjection::default());
    }
}
