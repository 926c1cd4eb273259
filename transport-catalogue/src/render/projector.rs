//! Geographic to plane projection.

use crate::domain::Coordinates;

use super::svg::Point;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Linear projection of a set of coordinates onto a `width` x `height`
/// canvas, keeping `padding` clear on every side.
///
/// Longitude maps to x, latitude to y with north at the top. A single zoom
/// factor is used for both axes, so shapes are not distorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Fit the projection to `points`. With no points, or all points at one
    /// location, everything projects to `(padding, padding)`.
    pub fn new(
        points: impl IntoIterator<Item = Coordinates>,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Self {
        let mut points = points.into_iter().peekable();
        if points.peek().is_none() {
            return Self {
                padding,
                min_lng: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        }

        let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for point in points {
            min_lng = min_lng.min(point.lng);
            max_lng = max_lng.max(point.lng);
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
        }

        let width_zoom =
            (!is_zero(max_lng - min_lng)).then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom =
            (!is_zero(max_lat - min_lat)).then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        Self {
            padding,
            min_lng,
            max_lat,
            zoom,
        }
    }

    pub fn project(&self, coordinates: Coordinates) -> Point {
        Point::new(
            (coordinates.lng - self.min_lng) * self.zoom + self.padding,
            (self.max_lat - coordinates.lat) * self.zoom + self.padding,
        )
    }
}
