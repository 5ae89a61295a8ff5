use serde::{Deserialize, Serialize};

/// A geographic point in latitude/longitude order, the order map clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Rectangle spanned by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Builds the bounds enclosing both corners, in whatever order they are given.
    pub fn new(a: LatLng, b: LatLng) -> Self {
        LatLngBounds {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Degenerate bounds covering a single point.
    pub fn from_point(point: LatLng) -> Self {
        LatLngBounds {
            south_west: point,
            north_east: point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized() {
        let bounds = LatLngBounds::new(LatLng::new(20.0, 40.0), LatLng::new(10.0, 30.0));

        assert_eq!(bounds.south_west, LatLng::new(10.0, 30.0));
        assert_eq!(bounds.north_east, LatLng::new(20.0, 40.0));
    }

    #[test]
    fn point_bounds_are_degenerate() {
        let point = LatLng::new(60.17, 24.94);
        let bounds = LatLngBounds::from_point(point);

        assert_eq!(bounds.south_west, bounds.north_east);
        assert_eq!(bounds.south_west, point);
    }
}
