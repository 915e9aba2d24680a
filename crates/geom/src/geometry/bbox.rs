use serde::{Deserialize, Serialize};

use super::point::Point3d;

/// An axis-aligned box described by two corner points.
///
/// A passive container over whatever corners it is given, typically the
/// host's entity bounds (see [`crate::GeometryProvider`]). No `min ≤ max`
/// ordering is enforced or assumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3d,
    pub max: Point3d,
}

impl BoundingBox {
    pub fn new(min: Point3d, max: Point3d) -> Self {
        Self { min, max }
    }
}
