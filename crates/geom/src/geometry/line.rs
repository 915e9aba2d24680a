use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::Vec3;
use crate::EPSILON;

/// An infinite line defined by a point and a unit direction.
///
/// The direction is normalized at construction regardless of the input's
/// magnitude; a zero input direction is a precondition violation and panics
/// (see [`Vec3::normalize`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line3d {
    pub origin: Point3d,
    pub direction: Vec3,
}

impl Line3d {
    pub fn new(origin: Point3d, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn from_points(a: Point3d, b: Point3d) -> Self {
        Self::new(a, b - a)
    }

    pub fn evaluate(&self, t: f64) -> Point3d {
        self.origin + self.direction * t
    }

    pub fn closest_point(&self, p: &Point3d) -> (Point3d, f64) {
        let v = *p - self.origin;
        let t = v.dot(&self.direction);
        (self.evaluate(t), t)
    }

    pub fn distance_to_point(&self, p: &Point3d) -> f64 {
        let (closest, _) = self.closest_point(p);
        p.distance_to(&closest)
    }

    /// True if `p` lies on this line within tolerance.
    ///
    /// Solves for the parametric factor along the direction component of
    /// largest magnitude (always ≥ 1/√3 for a unit direction), then checks
    /// that the same factor reproduces the other two coordinates.
    pub fn contains_point(&self, p: &Point3d) -> bool {
        let d = self.direction.to_array();
        let o = self.origin.to_array();
        let q = p.to_array();

        let mut axis = 0;
        for i in 1..3 {
            if d[i].abs() > d[axis].abs() {
                axis = i;
            }
        }
        let factor = (q[axis] - o[axis]) / d[axis];
        for i in 0..3 {
            if i != axis && (o[i] + d[i] * factor - q[i]).abs() > EPSILON {
                return false;
            }
        }
        true
    }

    /// True if the other line runs in the same or exactly opposite direction.
    pub fn parallel(&self, other: &Line3d) -> bool {
        self.direction == other.direction || self.direction == -other.direction
    }

    /// True if `v` points along this line (either way). A zero `v` is
    /// parallel to nothing.
    pub fn parallel_to_vector(&self, v: &Vec3) -> bool {
        match v.normalized() {
            Some(unit) => self.direction == unit || self.direction == -unit,
            None => false,
        }
    }

    /// True if `test_point` lies on the segment `a`→`b`, strictly between
    /// the endpoints: collinearity via a near-zero cross product, then the
    /// dot-product projection confined to `(0, |a→b|²]`.
    pub fn point_between(a: &Point3d, b: &Point3d, test_point: &Point3d) -> bool {
        let a_to_b = *b - *a;
        let a_to_c = *test_point - *a;
        let (Some(ab_unit), Some(ac_unit)) = (a_to_b.normalized(), a_to_c.normalized()) else {
            // Degenerate segment, or the test point sits on the start corner.
            return false;
        };
        if ab_unit.cross(&ac_unit).length() > EPSILON {
            return false;
        }
        let dot = a_to_b.dot(&a_to_c);
        if dot < EPSILON {
            return false;
        }
        let reach = a_to_b.length() + EPSILON;
        dot <= reach * reach
    }
}
