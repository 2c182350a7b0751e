//! Region records and the built-in sample set.
//!
//! Regions are loaded once and only read afterwards. The core never repairs
//! a region; `Region::validate` lets a loader reject bad records early.

use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom2::{area, bounding_box, is_simple, Bounds2, Polygon};

/// A named region ("state") with its outline in native (lon/lat) units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub name: String,
    pub abbreviation: String,
    pub geometry: Polygon,
    /// Surveyed area in km². Display only; ratios use the ring geometry.
    #[cfg_attr(feature = "serde", serde(rename = "area"))]
    pub area_km2: f64,
    pub bounds: Bounds2,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    InvalidRegion { name: String, reason: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion { name, reason } => write!(f, "invalid region {name:?}: {reason}"),
        }
    }
}

impl std::error::Error for DatasetError {}

impl Region {
    /// Build a region; `bounds` is derived from `geometry` (all zero if empty).
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        geometry: Polygon,
        area_km2: f64,
    ) -> Self {
        let bounds = bounding_box(&geometry).unwrap_or(Bounds2 {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        });
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            geometry,
            area_km2,
            bounds,
        }
    }

    /// Check the invariants the fit tester relies on.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let fail = |reason: &str| {
            Err(DatasetError::InvalidRegion {
                name: self.name.clone(),
                reason: reason.to_string(),
            })
        };
        if self.name.trim().is_empty() {
            return fail("empty name");
        }
        if self.abbreviation.trim().is_empty() {
            return fail("empty abbreviation");
        }
        if !self.geometry.is_finite() {
            return fail("non-finite coordinates");
        }
        let distinct: HashSet<(u64, u64)> = self
            .geometry
            .vertices()
            .iter()
            .map(|v| (v.x.to_bits(), v.y.to_bits()))
            .collect();
        if distinct.len() < 3 {
            return fail("fewer than 3 distinct vertices");
        }
        if area(&self.geometry) == 0.0 {
            return fail("zero-area outline");
        }
        if !is_simple(&self.geometry) {
            return fail("self-intersecting outline");
        }
        if !(self.area_km2.is_finite() && self.area_km2 > 0.0) {
            return fail("area must be finite and positive");
        }
        let consistent = bounding_box(&self.geometry)
            .map(|b| b.approx_eq(&self.bounds, 1e-6))
            .unwrap_or(false);
        if !consistent {
            return fail("bounds do not match geometry");
        }
        Ok(())
    }
}

/// Validate every region and reject duplicate names (names key the history).
pub fn validate_regions(regions: &[Region]) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for r in regions {
        r.validate()?;
        if !seen.insert(r.name.as_str()) {
            return Err(DatasetError::InvalidRegion {
                name: r.name.clone(),
                reason: "duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

/// `(name, abbreviation, min_lon, min_lat, max_lon, max_lat, km²)`
const SAMPLE_STATES: [(&str, &str, f64, f64, f64, f64, f64); 12] = [
    ("Rhode Island", "RI", -71.8, 41.1, -71.1, 41.7, 4001.0),
    ("Delaware", "DE", -75.8, 38.4, -75.0, 39.8, 6446.0),
    ("Connecticut", "CT", -73.7, 40.9, -71.8, 42.1, 14357.0),
    ("New Jersey", "NJ", -75.6, 38.9, -73.9, 41.4, 22591.0),
    ("New Hampshire", "NH", -72.6, 42.7, -70.6, 45.3, 24214.0),
    ("Vermont", "VT", -73.4, 42.7, -71.5, 45.0, 24906.0),
    ("Massachusetts", "MA", -73.5, 41.2, -69.9, 42.9, 27336.0),
    ("Hawaii", "HI", -160.2, 18.9, -154.8, 22.2, 28313.0),
    ("Maryland", "MD", -79.5, 37.9, -75.0, 39.7, 32131.0),
    ("West Virginia", "WV", -82.6, 37.2, -77.7, 40.6, 62756.0),
    ("South Carolina", "SC", -83.4, 32.0, -78.5, 35.2, 82933.0),
    ("Maine", "ME", -71.1, 43.1, -66.9, 47.5, 91633.0),
];

/// Twelve US states approximated by their lon/lat bounding boxes.
pub fn sample_regions() -> Vec<Region> {
    SAMPLE_STATES
        .iter()
        .map(|&(name, abbr, x0, y0, x1, y1, km2)| {
            Region::new(name, abbr, Polygon::rect(x0, y0, x1 - x0, y1 - y0), km2)
        })
        .collect()
}

/// Find a region by name or abbreviation, ignoring ASCII case.
pub fn find_region<'a>(regions: &'a [Region], key: &str) -> Option<&'a Region> {
    let key = key.trim();
    regions
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(key) || r.abbreviation.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_is_valid() {
        let regions = sample_regions();
        assert_eq!(regions.len(), 12);
        validate_regions(&regions).unwrap();
        let ri = find_region(&regions, "ri").unwrap();
        assert_eq!(ri.name, "Rhode Island");
        assert!((ri.bounds.width() - 0.7).abs() < 1e-9);
        assert!(find_region(&regions, "maine").is_some());
        assert!(find_region(&regions, "Texas").is_none());
    }

    #[test]
    fn validation_catches_bad_records() {
        let good = Region::new("Box", "BX", Polygon::rect(0.0, 0.0, 1.0, 1.0), 10.0);
        assert!(good.validate().is_ok());

        let line = Region::new(
            "Line",
            "LN",
            Polygon::from_xy(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
            1.0,
        );
        assert!(line.validate().is_err());

        // collinear on paper, not quite in binary
        let sliver = Region::new(
            "Sliver",
            "SL",
            Polygon::from_xy(&[(-71.8, 41.1), (-71.45, 41.4), (-71.1, 41.7)]),
            1.0,
        );
        match sliver.validate() {
            Err(DatasetError::InvalidRegion { reason, .. }) => {
                assert_eq!(reason, "zero-area outline")
            }
            other => panic!("expected zero-area error, got {other:?}"),
        }

        let bowtie = Region::new(
            "Bowtie",
            "BT",
            Polygon::from_xy(&[(0.0, 0.0), (6.0, 6.0), (6.0, 0.0), (0.0, 2.0)]),
            12.0,
        );
        match bowtie.validate() {
            Err(DatasetError::InvalidRegion { reason, .. }) => {
                assert_eq!(reason, "self-intersecting outline")
            }
            other => panic!("expected self-intersection error, got {other:?}"),
        }

        let mut shifted = good.clone();
        shifted.bounds.max_x += 1.0;
        assert!(shifted.validate().is_err());

        let unnamed = Region {
            name: " ".into(),
            ..good.clone()
        };
        assert!(unnamed.validate().is_err());

        let dupes = vec![good.clone(), good];
        match validate_regions(&dupes) {
            Err(DatasetError::InvalidRegion { reason, .. }) => assert_eq!(reason, "duplicate name"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }
}
