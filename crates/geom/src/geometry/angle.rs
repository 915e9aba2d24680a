use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::EPSILON;

/// An angular quantity in radians, kept normalized to `[0, 2π)`.
///
/// Every constructor and arithmetic operator reduces its result back into
/// the canonical range, so downstream code never sees a raw winding count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    /// Build an angle from an arbitrary finite radian value, reducing it
    /// into `[0, 2π)` by whole turns.
    pub fn new(radians: f64) -> Self {
        let tau = 2.0 * std::f64::consts::PI;
        let mut value = radians % tau;
        if value < 0.0 {
            value += tau;
        }
        // Rounding in the remainder can land exactly on a full turn.
        if value >= tau {
            value -= tau;
        }
        Self(value)
    }

    pub fn radians(&self) -> f64 {
        self.0
    }

    pub fn sin(&self) -> f64 {
        self.0.sin()
    }

    pub fn cos(&self) -> f64 {
        self.0.cos()
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Self::new(radians)
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.0 * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.0 / rhs)
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.0)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < EPSILON
    }
}

impl PartialEq<f64> for Angle {
    fn eq(&self, other: &f64) -> bool {
        (self.0 - other).abs() < EPSILON
    }
}
