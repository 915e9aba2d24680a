use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::angle::Angle;
use super::line::Line3d;
use super::point::Point3d;
use super::vector::Vec3;
use crate::EPSILON;

/// An infinite plane in implicit form: `a·x + b·y + c·z + d = 0`.
///
/// `(a, b, c)` is the plane's normal. Constructors from a normal and a
/// point store the unit normal, which the metric queries (`distance`,
/// `parallel`, `angle_with`) rely on; `new` takes raw coefficients as-is
/// and leaves that property to the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plane3d {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Plane3d {
    /// Raw coefficients, stored without normalization.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through `point` with the given normal. The normal is unit-
    /// normalized; a zero normal is a precondition violation and panics.
    pub fn from_normal_point(normal: &Vec3, point: &Point3d) -> Self {
        let n = normal.normalize();
        Self {
            a: n.x,
            b: n.y,
            c: n.z,
            d: -n.dot(&point.to_vec3()),
        }
    }

    /// Fit a plane to an ordered loop of points.
    ///
    /// Picks the first two points, scans for the first point not collinear
    /// with them, builds the plane from those three, then requires every
    /// remaining loop point to lie on it. Returns `None` for fewer than
    /// three points, a collinear/degenerate loop, or a non-planar one.
    #[instrument(skip(points), fields(count = points.len()))]
    pub fn from_loop(points: &[Point3d]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }
        let first = points[0];
        let second = points[1];
        let ab = (second - first).normalized()?;
        let ab_line = Line3d::new(first, ab);
        let third = points[2..]
            .iter()
            .copied()
            .find(|p| !ab_line.contains_point(p))?;
        let normal = (second - first).cross(&(third - second)).normalized()?;
        let plane = Self::from_normal_point(&normal, &first);
        if points[2..].iter().any(|p| !plane.on_plane(p)) {
            debug!("loop is not planar");
            return None;
        }
        Some(plane)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Signed distance from `point` to the plane: `n·p + d`.
    pub fn distance(&self, point: &Point3d) -> f64 {
        self.normal().dot(&point.to_vec3()) + self.d
    }

    pub fn on_plane(&self, point: &Point3d) -> bool {
        self.distance(point).abs() < EPSILON
    }

    /// True if the normals are equal or exactly opposite within tolerance.
    /// The comparison assumes both planes carry unit normals.
    pub fn parallel(&self, other: &Plane3d) -> bool {
        self.normal() == other.normal() || self.normal() == -other.normal()
    }

    /// True if the two planes describe the same point set, not merely
    /// parallel ones. The `normal·d` product is orientation-insensitive,
    /// so a plane and its inverse compare coplanar.
    pub fn coplanar(&self, other: &Plane3d) -> bool {
        self.parallel(other) && self.normal() * self.d == other.normal() * other.d
    }

    /// Translate the plane along its own normal by `offset_by`.
    pub fn offset(&self, offset_by: f64) -> Self {
        Self::new(self.a, self.b, self.c, self.d - offset_by)
    }

    /// Same point set, opposite orientation.
    pub fn inverse(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }

    /// Angle between the two planes, in `[0, π/2]`.
    pub fn angle_with(&self, other: &Plane3d) -> Angle {
        Angle::new(self.normal().dot(&other.normal()).abs().min(1.0).acos())
    }
}

impl PartialEq for Plane3d {
    fn eq(&self, other: &Self) -> bool {
        (self.a - other.a).abs() < EPSILON
            && (self.b - other.b).abs() < EPSILON
            && (self.c - other.c).abs() < EPSILON
            && (self.d - other.d).abs() < EPSILON
    }
}
