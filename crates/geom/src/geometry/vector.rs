use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::angle::Angle;
use super::point::Point3d;
use crate::EPSILON;

/// A free vector in 3D Euclidean space.
///
/// A zero-length `Vec3` is a legitimate value; operations that cannot
/// tolerate one (`normalize`, `rotate_about`'s axis) document it as a
/// caller precondition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Unit-length copy, or `None` for a (near-)zero vector.
    pub fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len < EPSILON {
            None
        } else {
            Some(*self / len)
        }
    }

    /// Unit-length copy. Panics on a (near-)zero vector; callers must rule
    /// that out first.
    pub fn normalize(&self) -> Self {
        self.normalized()
            .expect("Cannot normalize zero-length vector")
    }

    /// Angle between this vector and `other`, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` so floating round-off near
    /// (anti-)parallel inputs cannot push `acos` out of its domain.
    pub fn angle_to(&self, other: &Self) -> Angle {
        let d = self.dot(other);
        let len_product = self.length() * other.length();
        if len_product < EPSILON {
            return Angle::ZERO;
        }
        Angle::new((d / len_product).clamp(-1.0, 1.0).acos())
    }

    pub fn project_onto(&self, other: &Self) -> Self {
        let denom = other.length_squared();
        if denom < EPSILON * EPSILON {
            return Self::ZERO;
        }
        *other * (self.dot(other) / denom)
    }

    /// Rotate this vector by `angle` about `axis`.
    ///
    /// Axis–angle decomposition: the component parallel to the axis is kept,
    /// the orthogonal component is rotated within the plane perpendicular to
    /// the axis using `{orthogonal, axis × orthogonal}` as the basis. A
    /// vector (near-)parallel to the axis comes back unchanged. A zero axis
    /// is a precondition violation and yields a meaningless (NaN) result.
    pub fn rotate_about(&self, angle: Angle, axis: &Self) -> Self {
        let parallel = self.project_onto(axis);
        let orthogonal = *self - parallel;
        let orth_len = orthogonal.length();
        if orth_len < EPSILON {
            return *self;
        }
        let w = axis.cross(&orthogonal);
        // |w| = |axis|·|orthogonal|, so this rescales w to |orthogonal|.
        let rotated = orthogonal * angle.cos() + w * (orth_len * angle.sin() / w.length());
        rotated + parallel
    }

    /// Reinterpret this displacement as a position.
    pub fn to_point(&self) -> Point3d {
        Point3d::new(self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.z - other.z).abs() < EPSILON
    }
}
